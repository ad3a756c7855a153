pub mod recover;

pub use recover::handle_recover;

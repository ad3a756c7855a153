//! Comment syntax resolution by file extension.
//!
//! Each supported file type maps to a [`CommentSyntax`] descriptor holding
//! the marker pattern used for extraction and the delimiters used when
//! writing comments back. Adding a file type means adding a row to
//! [`EXTENSION_STYLES`]; unknown extensions fall back to `//` comments.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal label that tags a fragment line.
pub const MARKER_LABEL: &str = "OWNER_ID";

/// Comment families recognised in source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// text`
    Slash,
    /// `# text`
    Hash,
    /// `/* text */`
    Css,
    /// `<!-- text -->`
    Html,
}

/// Extension (lowercase, no dot) to comment style.
const EXTENSION_STYLES: &[(&str, CommentStyle)] = &[
    ("js", CommentStyle::Slash),
    ("jsx", CommentStyle::Slash),
    ("ts", CommentStyle::Slash),
    ("tsx", CommentStyle::Slash),
    ("java", CommentStyle::Slash),
    ("cpp", CommentStyle::Slash),
    ("h", CommentStyle::Slash),
    ("c", CommentStyle::Slash),
    ("cs", CommentStyle::Slash),
    ("py", CommentStyle::Hash),
    ("yml", CommentStyle::Hash),
    ("yaml", CommentStyle::Hash),
    ("sh", CommentStyle::Hash),
    ("css", CommentStyle::Css),
    ("html", CommentStyle::Html),
];

static SLASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile(r"//\s*OWNER_ID:\s*(\S+)"));
static HASH_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"#\s*OWNER_ID:\s*(\S+)"));
static CSS_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile(r"/\*\s*OWNER_ID:\s*(\S+)\s*\*/"));
static HTML_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile(r"<!--\s*OWNER_ID:\s*(\S+)\s*-->"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("marker patterns are valid regular expressions")
}

/// Delimiters and marker pattern for one comment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub style: CommentStyle,
    /// Opening delimiter, e.g. `//` or `<!--`
    pub open: &'static str,
    /// Closing delimiter for block styles
    pub close: Option<&'static str>,
}

impl CommentSyntax {
    /// Descriptor for a comment style.
    pub const fn from_style(style: CommentStyle) -> Self {
        let (open, close) = match style {
            CommentStyle::Slash => ("//", None),
            CommentStyle::Hash => ("#", None),
            CommentStyle::Css => ("/*", Some("*/")),
            CommentStyle::Html => ("<!--", Some("-->")),
        };
        Self { style, open, close }
    }

    /// Resolve syntax from an extension, with or without the leading dot.
    ///
    /// Matching is case-insensitive. Unknown extensions resolve to `//`.
    pub fn for_extension(extension: &str) -> Self {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        let style = EXTENSION_STYLES
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, style)| *style)
            .unwrap_or(CommentStyle::Slash);
        Self::from_style(style)
    }

    /// Resolve syntax from a file path's extension.
    pub fn for_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy())
            .unwrap_or_default();
        Self::for_extension(&ext)
    }

    /// Pattern matching a tagged fragment line; capture group 1 is the token.
    pub fn pattern(&self) -> &'static Regex {
        match self.style {
            CommentStyle::Slash => &*SLASH_PATTERN,
            CommentStyle::Hash => &*HASH_PATTERN,
            CommentStyle::Css => &*CSS_PATTERN,
            CommentStyle::Html => &*HTML_PATTERN,
        }
    }

    /// Wrap text as a single comment line (no trailing newline).
    pub fn wrap(&self, text: &str) -> String {
        match self.close {
            Some(close) => format!("{} {} {}", self.open, text, close),
            None => format!("{} {}", self.open, text),
        }
    }
}

//! Rendering primitives for CLI output.

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a header line.
///
/// Pretty mode: "ownerid · title"
/// Plain mode: "ownerid title"
pub fn header(ctx: &UiContext, title: &str) -> String {
    if ctx.mode.is_pretty() {
        let name = styled("ownerid", styles::bold(), ctx.color);
        format!("{} \u{00B7} {}", name, title)
    } else {
        format!("ownerid {}", title)
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_badge() {
        let ctx = UiContext::plain();
        assert_eq!(badge(&ctx, Badge::Warn, "careful"), "[WARN] careful");
        assert_eq!(badge(&ctx, Badge::Err, ""), "[ERR]");
    }

    #[test]
    fn test_plain_kv_normalizes_key() {
        let ctx = UiContext::plain();
        assert_eq!(kv(&ctx, "Encoded payload", "abc="), "encoded_payload=abc=");
    }

    #[test]
    fn test_plain_receipt() {
        let ctx = UiContext::plain();
        let out = receipt(&ctx, "Annotated", &[("File", "a.py")]);
        assert_eq!(out, "status=ok\nfile=a.py");
    }

    #[test]
    fn test_plain_header_and_hint() {
        let ctx = UiContext::plain();
        assert_eq!(header(&ctx, "recover"), "ownerid recover");
        assert_eq!(hint(&ctx, "check the key"), "hint=check the key");
    }
}

//! HTML escaping utilities.

/// Escape HTML special characters for safe rendering in text and
/// double-quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render an external link that opens in a new tab.
///
/// `inner` is inserted as-is; callers escape text content themselves.
pub fn external_link(href: &str, class: Option<&str>, inner: &str) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();
    format!(
        r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">{}</a>"#,
        html_escape(href),
        class_attr,
        inner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_basic() {
        assert_eq!(html_escape("hello"), "hello");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_external_link() {
        assert_eq!(
            external_link("https://x.test/?a=1&b=2", Some("affiliation-link"), "1"),
            r#"<a href="https://x.test/?a=1&amp;b=2" class="affiliation-link" target="_blank" rel="noopener noreferrer">1</a>"#
        );
        assert_eq!(
            external_link("#", None, "Name"),
            r##"<a href="#" target="_blank" rel="noopener noreferrer">Name</a>"##
        );
    }
}

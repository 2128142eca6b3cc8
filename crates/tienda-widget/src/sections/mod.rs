//! Section renderers for the storefront widget.

mod cart;
mod products;

pub use cart::*;
pub use products::*;

/// Escape text for use in HTML content and double- or single-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("plain"), "plain");
        assert_eq!(
            html_escape(r#"<b onclick='x()'>"Tom & Jerry"</b>"#),
            "&lt;b onclick=&#39;x()&#39;&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }
}

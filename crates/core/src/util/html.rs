/// HTML escaping utilities
pub struct HtmlEscape;

impl HtmlEscape {
    /// Escape HTML content (for text content inside tags)
    /// Escapes: &, <, >, ", '
    pub fn escape_content(text: &str) -> String {
        text.replace("&", "&amp;")
            .replace("<", "&lt;")
            .replace(">", "&gt;")
            .replace("\"", "&quot;")
            .replace("'", "&#39;")
    }

    /// Render plain text to inline HTML: escape, then turn line breaks into <br>.
    /// CRLF and LF normalize identically; a lone CR is left untouched.
    pub fn text_to_html(text: &str) -> String {
        Self::escape_content(text)
            .replace("\r\n", "<br>")
            .replace("\n", "<br>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_reserved_characters() {
        assert_eq!(
            HtmlEscape::escape_content(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_other_characters_untouched() {
        assert_eq!(HtmlEscape::escape_content("héllo wörld 123"), "héllo wörld 123");
        assert_eq!(HtmlEscape::escape_content(""), "");
    }

    #[test]
    fn ampersand_is_escaped_first() {
        // "&lt;" in the input must not double-escape into "&amp;amp;lt;"
        assert_eq!(HtmlEscape::escape_content("&lt;"), "&amp;lt;");
    }

    #[test]
    fn line_breaks_become_br_tags() {
        assert_eq!(HtmlEscape::text_to_html("a\nb"), "a<br>b");
        assert_eq!(HtmlEscape::text_to_html("a\r\nb"), "a<br>b");
        assert_eq!(HtmlEscape::text_to_html("a\n\nb"), "a<br><br>b");
    }

    #[test]
    fn lone_carriage_return_is_preserved() {
        assert_eq!(HtmlEscape::text_to_html("a\rb"), "a\rb");
    }
}

// Presentation: maps an AnalysisReport to HTML. No business logic lives here.

pub mod chart;
pub mod page;

pub use page::render_page;

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"cv" & 'job'</b>"#),
            "&lt;b&gt;&quot;cv&quot; &amp; &#39;job&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("node.js"), "node.js");
    }
}

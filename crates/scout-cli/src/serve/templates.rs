//! HTML template rendering for the research form.
//!
//! Templates are stored as separate files for maintainability:
//! - `templates/index.html` - HTML structure
//! - `templates/styles.css` - CSS styles
//! - `templates/app.js` - JavaScript application code
//!
//! Files are embedded at compile time using `include_str!`.

const HTML_TEMPLATE: &str = include_str!("templates/index.html");
const STYLES: &str = include_str!("templates/styles.css");
const SCRIPT: &str = include_str!("templates/app.js");

/// Render the research form page.
///
/// Substitutes `{{MODEL}}`, `{{STYLES}}` and `{{SCRIPT}}` in the template.
pub fn render_form_page(model: &str) -> String {
    HTML_TEMPLATE
        .replace("{{MODEL}}", &html_escape(model))
        .replace("{{STYLES}}", STYLES)
        .replace("{{SCRIPT}}", SCRIPT)
}

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
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
    fn test_render_substitutes_placeholders() {
        let page = render_form_page("gpt-4o");
        assert!(page.contains("gpt-4o"));
        assert!(!page.contains("{{MODEL}}"));
        assert!(!page.contains("{{STYLES}}"));
        assert!(!page.contains("{{SCRIPT}}"));
    }

    #[test]
    fn test_model_is_escaped() {
        let page = render_form_page("<script>");
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_cdn_scripts_are_pinned() {
        let page = render_form_page("gpt-4o");
        assert!(page.contains("npm/marked@12.0.2/"));
        assert!(page.contains("npm/dompurify@3.1.6/"));
        assert!(!page.contains("npm/marked/"));
        assert!(!page.contains("npm/dompurify/"));
    }
}

//! HTML page templating.
//!
//! Every generated page is the bundled template with three placeholders
//! substituted: `${title}`, `${css}` and `${content}`. This is literal,
//! single-pass token replacement — not a templating language. Values come
//! from the filesystem and the document itself, so nothing is escaped.

/// Bundled page template. Contains each placeholder exactly once.
pub const PAGE_TEMPLATE: &str = include_str!("../static/file-template.html");

/// Substitute the three placeholders into a template.
///
/// Each substitution is a plain string replacement; placeholders absent
/// from the template are silently left out of the result.
pub fn render(template: &str, title: &str, css_relative_path: &str, content_html: &str) -> String {
    template
        .replace("${title}", title)
        .replace("${css}", css_relative_path)
        .replace("${content}", content_html)
}

//! Markdown conversion.
//!
//! A thin wrapper around [`pulldown_cmark`]: documents come in as text and
//! leave as HTML fragments for the template to wrap. Parser extensions are
//! opt-in by name through an explicit table — the full set of recognized
//! names is fixed, and an unknown name is a configuration error before any
//! file is processed.

use pulldown_cmark::{Options, Parser, html};

use crate::config::ConfigError;

/// Recognized extension names and the parser capability each enables.
pub const EXTENSIONS: &[(&str, Options)] = &[
    ("tables", Options::ENABLE_TABLES),
    ("footnotes", Options::ENABLE_FOOTNOTES),
    ("strikethrough", Options::ENABLE_STRIKETHROUGH),
    ("tasklists", Options::ENABLE_TASKLISTS),
    ("smart-punctuation", Options::ENABLE_SMART_PUNCTUATION),
    ("heading-attributes", Options::ENABLE_HEADING_ATTRIBUTES),
    ("math", Options::ENABLE_MATH),
    ("gfm", Options::ENABLE_GFM),
    ("definition-lists", Options::ENABLE_DEFINITION_LIST),
];

/// Resolve configured extension names into a parser option set.
///
/// Fails on the first unrecognized name; an empty list yields the plain
/// CommonMark parser.
pub fn parser_options(names: &[String]) -> Result<Options, ConfigError> {
    let mut options = Options::empty();
    for name in names {
        match EXTENSIONS.iter().find(|(known, _)| known == name) {
            Some((_, flag)) => options |= *flag,
            None => return Err(ConfigError::UnknownExtension(name.clone())),
        }
    }
    Ok(options)
}

/// Convert a markdown document into an HTML fragment.
pub fn to_html(markdown: &str, options: Options) -> String {
    let parser = Parser::new_ext(markdown, options);
    let mut fragment = String::new();
    html::push_html(&mut fragment, parser);
    fragment
}

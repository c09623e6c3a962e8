//! Document title extraction.
//!
//! Every generated page gets a `<title>` pulled from its markdown source.
//! The heuristic is deliberately small: the first non-blank line is the
//! title candidate. A leading `"# "` (a level-1 ATX header, and only
//! level 1 — `##` and deeper are plain text here) is stripped; anything
//! else is returned trimmed. A `"# "` header with nothing after the marker
//! is treated as malformed and yields [`FALLBACK_TITLE`] rather than
//! falling through to later lines.

/// Title used when a document has no usable first line.
pub const FALLBACK_TITLE: &str = "No Title";

/// Extract a human-readable title from a markdown document.
///
/// - `"# The Title"` → `"The Title"`
/// - `"Some text"` → `"Some text"` (no marker required)
/// - leading blank lines are skipped
/// - `"# "` with no trailing text, or an all-blank document → `"No Title"`
pub fn extract_title(document: &str) -> String {
    for line in document.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // Marker must sit at the very start of the line; an indented
        // "# ..." is returned as plain text.
        if let Some(rest) = line.strip_prefix("# ") {
            let rest = rest.trim();
            if rest.is_empty() {
                return FALLBACK_TITLE.to_string();
            }
            return rest.to_string();
        }
        return line.trim().to_string();
    }
    FALLBACK_TITLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atx_header_is_stripped() {
        assert_eq!(extract_title("# The Title"), "The Title");
    }

    #[test]
    fn plain_first_line_is_the_title() {
        assert_eq!(extract_title("Some text"), "Some text");
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        assert_eq!(extract_title("\n\nThe Title"), "The Title");
        assert_eq!(extract_title("   \n\t\nThe Title\nbody"), "The Title");
    }

    #[test]
    fn empty_document_falls_back() {
        assert_eq!(extract_title(""), FALLBACK_TITLE);
        assert_eq!(extract_title("\n \n\t\n"), FALLBACK_TITLE);
    }

    #[test]
    fn bare_marker_falls_back() {
        assert_eq!(extract_title("# "), FALLBACK_TITLE);
        assert_eq!(extract_title("#   "), FALLBACK_TITLE);
    }

    #[test]
    fn bare_marker_does_not_fall_through_to_later_lines() {
        // Malformed-header policy: the blank header wins over the line
        // that follows it.
        assert_eq!(extract_title("# \nActual content"), FALLBACK_TITLE);
    }

    #[test]
    fn deeper_headers_are_plain_text() {
        assert_eq!(extract_title("## Section"), "## Section");
        assert_eq!(extract_title("### Deep"), "### Deep");
    }

    #[test]
    fn indented_marker_is_plain_text() {
        assert_eq!(extract_title("  # Not A Header"), "# Not A Header");
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(extract_title("#   Spaced Out   "), "Spaced Out");
        assert_eq!(extract_title("# Title  \nbody"), "Title");
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(extract_title("# The Title\r\nbody\r\n"), "The Title");
    }

    #[test]
    fn only_the_first_line_matters() {
        assert_eq!(extract_title("Intro line\n# Later Header"), "Intro line");
    }
}

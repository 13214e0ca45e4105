// src/formatting/markup.rs
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Removes every `<...>` run from `text` and trims the result.
///
/// This is a textual strip, not an HTML parser: entities stay encoded and a
/// `>` inside an attribute value ends the tag early.
pub fn strip_markup(text: &str) -> String {
    TAG.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_tags() {
        assert_eq!(strip_markup("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(strip_markup("\n  <p>Excerpt text</p>\n"), "Excerpt text");
    }

    #[test]
    fn leaves_entities_encoded() {
        assert_eq!(
            strip_markup("<p>Fish &amp; Chips&#8230;</p>"),
            "Fish &amp; Chips&#8230;"
        );
    }

    #[test]
    fn stray_angle_bracket_runs_to_next_close() {
        assert_eq!(strip_markup("a < b and <i>c</i>"), "a c");
    }

    #[test]
    fn angle_bracket_in_attribute_ends_tag_early() {
        assert_eq!(strip_markup(r#"<a title="x>y">link</a>"#), r#"y">link"#);
    }
}

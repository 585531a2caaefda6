//! Comment and whitespace normalization applied to source text before scoring.
//!
//! Comment detection is a plain substring scan for two fixed markers, not a
//! lexer: a marker inside a string literal still cuts the line.

pub mod lines;

pub use lines::split_lines;

const COMMENT_MARKERS: [&str; 2] = ["//", ";"];

/// Whitespace as far as trimming and stripping are concerned: Unicode
/// whitespace plus the ASCII information separators.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Truncate `line` at the earliest comment marker, if any.
pub fn strip_comment(line: &str) -> &str {
    let cut = COMMENT_MARKERS
        .iter()
        .filter_map(|marker| line.find(marker))
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

/// Split `text` into lines, drop comments, trim, and discard empty lines.
pub fn clean_lines(text: &str) -> Vec<String> {
    split_lines(text)
        .into_iter()
        .map(|line| strip_comment(line).trim_matches(is_space))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove every whitespace character, not only the surrounding ones.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !is_space(*c)).collect()
}

/// Cleaned lines concatenated without separator, with all whitespace removed.
pub fn token_string(text: &str) -> String {
    strip_whitespace(&clean_lines(text).concat())
}

/// Cleaned lines with their internal whitespace removed, order preserved.
pub fn normalized_lines(text: &str) -> Vec<String> {
    clean_lines(text)
        .iter()
        .map(|line| strip_whitespace(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_lines_strips_comments_and_blank_lines() {
        let cleaned = clean_lines("x = 1 // comment\ny = 2 ; note\n\n   \n");
        assert_eq!(cleaned, vec!["x = 1", "y = 2"]);
    }

    #[test]
    fn test_earliest_marker_wins() {
        assert_eq!(strip_comment("a; b // c"), "a");
        assert_eq!(strip_comment("a // b; c"), "a ");
        assert_eq!(strip_comment("no comment"), "no comment");
    }

    #[test]
    fn test_marker_inside_string_literal_still_truncates() {
        let cleaned = clean_lines("let url = \"http://example.com\";");
        assert_eq!(cleaned, vec!["let url = \"http:"]);
    }

    #[test]
    fn test_comment_only_lines_are_dropped() {
        assert!(clean_lines("// header\n;; lisp style\n   // indented\n").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let cleaned = clean_lines("c\n\nb // x\na\n");
        assert_eq!(cleaned, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_clean_lines_is_idempotent() {
        let text = "  fn main() { // entry\n\tlet x = 1; \n\n ; gone\n}\n";
        let once = clean_lines(text);
        let twice = clean_lines(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_whitespace_removes_internal_whitespace() {
        assert_eq!(strip_whitespace(" a \t b\u{a0}c\u{2003}d "), "abcd");
        assert_eq!(strip_whitespace("x\x1fy"), "xy");
    }

    #[test]
    fn test_token_string_concatenates_without_separator() {
        assert_eq!(token_string("a = 1\nb = 2 // two\n"), "a=1b=2");
        assert_eq!(token_string(""), "");
        assert_eq!(token_string("// only a comment\n"), "");
    }

    #[test]
    fn test_normalized_lines() {
        assert_eq!(
            normalized_lines("let  x = 1;\n\n  y  =  x + 1 // bump\n"),
            vec!["letx=1", "y=x+1"]
        );
    }
}

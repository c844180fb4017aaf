//! List-boundary preprocessor.
//!
//! CommonMark only lets a list interrupt a paragraph in limited cases, while
//! GitHub renders a list that directly follows a line of text. The
//! preprocessor inserts a blank line before such list starts so the parser
//! sees a list. Fenced code is passed through untouched.

mod fence;

use fence::FenceTracker;

/// Preprocessor that separates list starts from a preceding paragraph line.
///
/// Every input line is kept byte-for-byte; the only change is an extra empty
/// line before a line that starts a list when the previous line is non-blank
/// and is not itself a list item.
///
/// # Example
///
/// ```
/// use grip_renderer::ListBoundaryPreprocessor;
///
/// let mut preprocessor = ListBoundaryPreprocessor::new();
/// let output = preprocessor.process("Some text.\n- Item 1\n- Item 2");
///
/// assert_eq!(output, "Some text.\n\n- Item 1\n- Item 2");
/// assert_eq!(preprocessor.insertions(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ListBoundaryPreprocessor {
    fence: FenceTracker,
    insertions: usize,
}

impl ListBoundaryPreprocessor {
    /// Create a new preprocessor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blank lines inserted so far.
    #[must_use]
    pub fn insertions(&self) -> usize {
        self.insertions
    }

    /// Process markdown text and return the normalized output.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len() + 16);
        let mut previous: Option<&str> = None;

        for (idx, line) in input.split('\n').enumerate() {
            if idx > 0 {
                output.push('\n');
            }

            if self.needs_blank_line(line, previous) {
                output.push('\n');
                self.insertions += 1;
            }

            output.push_str(line);
            previous = Some(line);
        }

        output
    }

    /// Decide whether a blank line goes before `line`, updating fence state.
    fn needs_blank_line(&mut self, line: &str, previous: Option<&str>) -> bool {
        // Delimiter lines and fenced content never trigger an insertion
        if self.fence.update(line) || self.fence.in_fence() {
            return false;
        }

        let Some(previous) = previous else {
            return false;
        };

        let previous = previous.trim();
        !previous.is_empty() && is_list_start(line.trim()) && !is_list_start(previous)
    }
}

/// Normalize list boundaries in a single call.
///
/// Shorthand for [`ListBoundaryPreprocessor::process`] on a fresh preprocessor.
#[must_use]
pub fn preprocess(input: &str) -> String {
    ListBoundaryPreprocessor::new().process(input)
}

/// Check if a trimmed line starts a list item (ordered or unordered).
///
/// Leading block-quote markers are stripped first so that lists nested in
/// block quotes are recognized.
///
/// ```
/// use grip_renderer::is_list_start;
///
/// assert!(is_list_start("- Item"));
/// assert!(is_list_start("> 1. Item"));
/// assert!(!is_list_start("Version 1.5 released"));
/// ```
#[must_use]
pub fn is_list_start(line: &str) -> bool {
    let mut rest = line;
    while let Some(stripped) = rest.strip_prefix('>') {
        rest = stripped.trim_start_matches([' ', '\t']);
    }

    let bytes = rest.as_bytes();
    match bytes {
        [] => false,
        [b'-' | b'*' | b'+', b' ', ..] => true,
        _ => is_ordered_marker(bytes),
    }
}

/// Digits followed by `.` or `)` and a space.
fn is_ordered_marker(bytes: &[u8]) -> bool {
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }

    matches!(bytes.get(digits..digits + 2), Some([b'.' | b')', b' ']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_list_start_truth_table() {
        let cases = [
            ("- Item", true),
            ("* Item", true),
            ("+ Item", true),
            ("1. Item", true),
            ("1) Item", true),
            ("123. Item", true),
            ("> - Item", true),
            ("> 1. Item", true),
            ("-Item", false),
            ("-", false),
            ("Regular text", false),
            ("", false),
            ("This - is text", false),
            ("Version 1.5 released", false),
        ];

        for (line, expected) in cases {
            assert_eq!(is_list_start(line), expected, "is_list_start({line:?})");
        }
    }

    #[test]
    fn test_is_list_start_only_quote_markers() {
        assert!(!is_list_start(">"));
        assert!(!is_list_start("> >"));
    }

    #[test]
    fn test_is_list_start_nested_quotes() {
        assert!(is_list_start(">> - Item"));
        assert!(is_list_start("> > 2) Item"));
    }

    #[test]
    fn test_is_list_start_digits_without_space() {
        assert!(!is_list_start("1."));
        assert!(!is_list_start("1.Item"));
        assert!(!is_list_start("12"));
    }

    #[test]
    fn test_blank_line_before_unordered_list() {
        let output = preprocess("Some text.\n- Item 1\n- Item 2");
        assert_eq!(output, "Some text.\n\n- Item 1\n- Item 2");
    }

    #[test]
    fn test_blank_line_before_ordered_list() {
        let output = preprocess("Some text.\n1. Item 1\n2. Item 2");
        assert_eq!(output, "Some text.\n\n1. Item 1\n2. Item 2");
    }

    #[test]
    fn test_existing_blank_line_preserved() {
        let input = "Some text.\n\n- Item 1\n- Item 2";
        assert_eq!(preprocess(input), input);
    }

    #[test]
    fn test_no_blank_line_between_items() {
        let input = "- Item 1\n- Item 2\n- Item 3";
        assert_eq!(preprocess(input), input);
    }

    #[test]
    fn test_code_block_preserved() {
        let input = "```\nText\n- Not a list\n```";
        assert_eq!(preprocess(input), input);
    }

    #[test]
    fn test_list_after_code_block() {
        let output = preprocess("```\ncode\n```\n- Item 1");
        assert_eq!(output, "```\ncode\n```\n\n- Item 1");
    }

    #[test]
    fn test_blockquote_with_list() {
        let output = preprocess("> Text\n> - Item 1\n> - Item 2");
        assert_eq!(output, "> Text\n\n> - Item 1\n> - Item 2");
    }

    #[test]
    fn test_only_list_after_fence_gets_blank_line() {
        let input = "```\nText\n- Not a list\n1. Not a list\n```\nText\n- Real list";
        let output = preprocess(input);
        assert_eq!(
            output,
            "```\nText\n- Not a list\n1. Not a list\n```\nText\n\n- Real list"
        );
    }

    #[test]
    fn test_tilde_fence_preserved() {
        let input = "~~~\nText\n* Not a list\n~~~";
        assert_eq!(preprocess(input), input);
    }

    #[test]
    fn test_first_line_never_triggers() {
        let input = "- Item";
        assert_eq!(preprocess(input), input);
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let output = preprocess("Text\n- Item\n");
        assert_eq!(output, "Text\n\n- Item\n");
    }

    #[test]
    fn test_crlf_lines_kept_intact() {
        let output = preprocess("Text\r\n- Item\r\n");
        assert_eq!(output, "Text\r\n\n- Item\r\n");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Some text.\n- Item 1\n- Item 2",
            "```\nText\n- Not a list\n```\nText\n- Real list",
            "> Text\n> - Item 1\n\nPara\n1. one\n2. two",
            "",
        ];

        for input in inputs {
            let once = preprocess(input);
            assert_eq!(preprocess(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_insertion_count() {
        let mut preprocessor = ListBoundaryPreprocessor::new();
        let _ = preprocessor.process("A\n- one\n\nB\n1. two\n```\nC\n- three\n```");
        assert_eq!(preprocessor.insertions(), 2);
    }
}

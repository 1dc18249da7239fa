//! Line splitting and per-line mapping.
//!
//! `process` turns raw multi-line text into a [`ResultSet`]: carriage returns
//! are removed, the text is split on '\n', and every line (empty ones
//! included) is paired with its mapped word.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::mapper::map_line;
use crate::settings::settings;

/// One input line and the word derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultLine {
    pub source: String,
    pub word: String,
}

impl ResultLine {
    /// Build a line; `word` is always derived from `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let word = map_line(&source);
        Self { source, word }
    }

    /// Source text for display, or the configured placeholder when empty.
    pub fn source_label(&self) -> &str {
        if self.source.is_empty() {
            &settings().display.empty_source_label
        } else {
            &self.source
        }
    }

    /// Word for display, or the configured placeholder when no digit mapped.
    pub fn word_label(&self) -> &str {
        if self.word.is_empty() {
            &settings().display.empty_word_label
        } else {
            &self.word
        }
    }
}

/// Ordered results, one entry per input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    lines: Vec<ResultLine>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResultLine> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultLine> {
        self.lines.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.word.as_str())
    }

    pub fn as_slice(&self) -> &[ResultLine] {
        &self.lines
    }
}

impl FromIterator<ResultLine> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultLine;
    type IntoIter = std::vec::IntoIter<ResultLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultLine;
    type IntoIter = std::slice::Iter<'a, ResultLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Split raw text into lines after removing every '\r'.
///
/// Always yields at least one line; a trailing '\n' yields a trailing empty line.
pub fn split_lines(raw_text: &str) -> Vec<String> {
    let normalized: String = raw_text.chars().filter(|&c| c != '\r').collect();
    normalized.split('\n').map(str::to_string).collect()
}

/// Map every line of `raw_text`.
pub fn process(raw_text: &str) -> ResultSet {
    let _span = debug_span!("process", bytes = raw_text.len()).entered();
    let results: ResultSet = split_lines(raw_text)
        .into_iter()
        .map(ResultLine::new)
        .collect();
    debug!(line_count = results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(rs: &ResultSet) -> Vec<(&str, &str)> {
        rs.iter()
            .map(|l| (l.source.as_str(), l.word.as_str()))
            .collect()
    }

    #[test]
    fn test_two_lines() {
        let rs = process("12\n34");
        assert_eq!(pairs(&rs), vec![("12", "BI"), ("34", "NA")]);
    }

    #[test]
    fn test_crlf_matches_lf() {
        assert_eq!(process("a\r\nb"), process("a\nb"));
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_lone_cr_is_removed_not_split() {
        assert_eq!(split_lines("1\r2"), vec!["12"]);
        assert_eq!(process("1\r2").get(0).unwrap().word, "BI");
    }

    #[test]
    fn test_empty_input_yields_one_empty_line() {
        let rs = process("");
        assert_eq!(rs.len(), 1);
        assert_eq!(pairs(&rs), vec![("", "")]);
    }

    #[test]
    fn test_leading_and_trailing_empty_lines_kept() {
        let rs = process("\n5\n");
        assert_eq!(pairs(&rs), vec![("", ""), ("5", "S"), ("", "")]);
    }

    #[test]
    fn test_line_without_digits() {
        let rs = process("hello\n7");
        assert_eq!(pairs(&rs), vec![("hello", ""), ("7", "O")]);
    }

    #[test]
    fn test_labels_fall_back_to_placeholders() {
        let rs = process("\nabc\n12");
        assert_eq!(rs.get(0).unwrap().source_label(), "(empty)");
        assert_eq!(rs.get(1).unwrap().source_label(), "abc");
        assert_eq!(rs.get(1).unwrap().word_label(), "(no digits)");
        assert_eq!(rs.get(2).unwrap().word_label(), "BI");
    }

    #[test]
    fn test_words_iterator() {
        let rs = process("1\n\n2");
        assert_eq!(rs.words().collect::<Vec<_>>(), vec!["B", "", "I"]);
    }

    proptest! {
        #[test]
        fn line_count_matches_newlines(t in any::<String>()) {
            let expected = t.replace('\r', "").matches('\n').count() + 1;
            prop_assert_eq!(process(&t).len(), expected);
        }

        #[test]
        fn process_is_idempotent(t in any::<String>()) {
            prop_assert_eq!(process(&t), process(&t));
        }

        #[test]
        fn every_word_is_mapped_source(t in "[0-9a-z\r\n]{0,40}") {
            for line in &process(&t) {
                prop_assert_eq!(&line.word, &map_line(&line.source));
                prop_assert!(!line.source.contains('\r'));
            }
        }
    }
}

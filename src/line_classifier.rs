//! # Line Classifier
//!
//! Splits raw multi-line recipe text into semantic lines before parsing.
//! A line is either a *group header* ("For the sauce:", "Topping:") that
//! updates the group in effect for all following lines, or a *content
//! line* handed to the ingredient or step parser. Blank lines are filtered
//! out entirely; they never reset the current group and never produce
//! records.
//!
//! Both parsers consume this module's output as a left-fold, threading
//! `(current_group, emitted_records)` through the classified lines, which
//! keeps them pure functions of their input text.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

// A group header is optional "for"/"the" prefixes, any non-empty text,
// then a trailing colon with nothing but whitespace after it.
pub const GROUP_HEADER_PATTERN: &str = r"^(?i)(?:for\s+)?(?:the\s+)?(.+?)\s*:\s*$";

lazy_static! {
    static ref GROUP_HEADER_REGEX: Regex =
        Regex::new(GROUP_HEADER_PATTERN).expect("Group header pattern should be valid");
}

/// Outcome of classifying one trimmed, non-empty line.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedLine<'a> {
    /// The line names an ingredient/step group; the captured text (with
    /// "for"/"the" prefixes and the colon stripped) is the group name.
    /// Header lines never also produce a record.
    GroupHeader(String),
    /// An ordinary content line.
    Content(&'a str),
}

/// Classify a single trimmed, non-empty line.
pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    if let Some(captures) = GROUP_HEADER_REGEX.captures(line) {
        let group = captures[1].trim().to_string();
        trace!("Classified group header: {:?}", group);
        ClassifiedLine::GroupHeader(group)
    } else {
        ClassifiedLine::Content(line)
    }
}

/// Classify every meaningful line of a raw multi-line input.
///
/// Lines are trimmed first; blank lines are dropped before classification.
pub fn classified_lines(text: &str) -> impl Iterator<Item = ClassifiedLine<'_>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
}

//! # Step Parser
//!
//! Parses freeform instruction text into structured step records. Leading
//! ordinal markers ("1. ", "2) ") and bullets ("-", "*", "•") are
//! stripped, since numbering is implied by line order; "optional" markers
//! are detected and stripped the same way the ingredient parser does.
//!
//! Unlike ingredients, a step whose instruction text is empty after
//! stripping is silently dropped. Step numbers are 1-based and restart at
//! 1 whenever a new group header is encountered.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::line_classifier::{classified_lines, ClassifiedLine};

/// Regex patterns applied to each content line
static STEP_PATTERNS: LazyLock<StepPatterns> = LazyLock::new(StepPatterns::new);

/// One instruction line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedStep {
    /// 1-based position, reset to 1 at the start of each new group
    pub step_number: usize,
    /// Instruction text with ordinal/bullet/optional markers stripped
    pub instruction: String,
    /// Most recently seen group header applying to this line
    pub group_name: Option<String>,
    /// True if the line carried an "optional" or "garnish" marker
    pub is_optional: bool,
}

/// Compiled regex patterns for step line cleanup
struct StepPatterns {
    /// Matches "optional"/"garnish" anywhere, on word boundaries
    optional_marker: Regex,
    /// Matches an exact trailing marker: "(optional)", "optional",
    /// "(garnish)", "garnish", with surrounding whitespace
    trailing_optional: Regex,
    /// Matches one leading ordinal marker: "1. ", "2) "
    ordinal: Regex,
    /// Matches one leading bullet character
    bullet: Regex,
}

impl StepPatterns {
    fn new() -> Self {
        Self {
            optional_marker: Regex::new(r"(?i)\b(?:optional|garnish)\b").unwrap(),
            trailing_optional: Regex::new(
                r"(?i)\s*(?:\(\s*(?:optional|garnish)\s*\)|optional|garnish)\s*$",
            )
            .unwrap(),
            ordinal: Regex::new(r"^\d+[.)]\s*").unwrap(),
            bullet: Regex::new(r"^[-*•]\s*").unwrap(),
        }
    }
}

/// Parse a full step list from raw form text.
///
/// Group headers update the group applied to subsequent steps and reset
/// the step counter to 1. Lines that reduce to empty instruction text are
/// dropped without consuming a step number.
pub fn parse_step_list(text: &str) -> Vec<ParsedStep> {
    let (_, _, steps) = classified_lines(text).fold(
        (None::<String>, 0usize, Vec::new()),
        |(current_group, number, mut steps), line| match line {
            ClassifiedLine::GroupHeader(group) => (Some(group), 0, steps),
            ClassifiedLine::Content(content) => {
                match parse_step_line(content, current_group.as_deref(), number + 1) {
                    Some(step) => {
                        steps.push(step);
                        (current_group, number + 1, steps)
                    }
                    None => (current_group, number, steps),
                }
            }
        },
    );
    debug!("Parsed {} steps", steps.len());
    steps
}

/// Parse a single content line into a step record.
///
/// Returns `None` when the line reduces to empty instruction text.
pub fn parse_step_line(
    line: &str,
    group_name: Option<&str>,
    step_number: usize,
) -> Option<ParsedStep> {
    let patterns = &*STEP_PATTERNS;

    let is_optional = patterns.optional_marker.is_match(line);
    let working = patterns.trailing_optional.replace(line, "");
    let working = patterns.ordinal.replace(&working, "");
    let working = patterns.bullet.replace(&working, "");
    let instruction = working.trim();

    if instruction.is_empty() {
        return None;
    }

    Some(ParsedStep {
        step_number,
        instruction: instruction.to_string(),
        group_name: group_name.map(str::to_string),
        is_optional,
    })
}

//! # Ingredient Parser
//!
//! This module parses freeform ingredient text, as typed into a recipe
//! form, into structured ingredient records. It handles quantities,
//! fractions, a closed unit vocabulary, parenthesized notes, optionality
//! markers, and group headers.
//!
//! ## Features
//!
//! - One record per content line, in input order
//! - Amount extraction for numeric, fraction, and range tokens ("2",
//!   "1/2", "2-3", "1.5")
//! - Unit recognition against the shared vocabulary in [`crate::units`]
//! - Notes pulled from the first parenthesized group
//! - "optional" / "garnish" markers detected and stripped
//! - Group headers ("For the sauce:") applied to subsequent records
//!
//! Parsing never fails: a line that cannot be decomposed keeps its full
//! original text as the ingredient name.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_text::ingredient_parser::parse_ingredient_list;
//!
//! let text = "2 cups flour\n1 tbsp salt\n1/2 tsp pepper";
//! for ingredient in parse_ingredient_list(text) {
//!     println!("{}", ingredient.name);
//! }
//! ```

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::line_classifier::{classified_lines, ClassifiedLine};
use crate::units;

/// Regex patterns applied to each content line
static INGREDIENT_PATTERNS: LazyLock<IngredientPatterns> = LazyLock::new(IngredientPatterns::new);

/// One line of ingredient input, flattened form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Raw amount text, unparsed (e.g. "1/2", "2-3", "1.5")
    pub amount: Option<String>,
    /// Canonical lowercase unit token, or None if absent/unrecognized
    pub unit: Option<String>,
    /// Remaining ingredient name; never empty
    pub name: String,
    /// Text originally enclosed in parentheses, stripped from the name
    pub notes: Option<String>,
    /// Most recently seen group header applying to this line
    pub group_name: Option<String>,
    /// True if the line carried an "optional" or "garnish" marker
    pub is_optional: bool,
    /// Zero-based position among all parsed ingredients (never reset per group)
    pub display_order: usize,
}

/// Compiled regex patterns for ingredient line decomposition
struct IngredientPatterns {
    /// Matches "optional"/"garnish" anywhere, on word boundaries
    optional_marker: Regex,
    /// Matches an exact trailing marker: "(optional)", "optional",
    /// "(garnish)", "garnish", with surrounding whitespace
    trailing_optional: Regex,
    /// Matches one parenthesized group
    parenthetical: Regex,
    /// Matches a numeric-shaped token: digits with '/', '-', '.' only
    amount_token: Regex,
}

impl IngredientPatterns {
    fn new() -> Self {
        Self {
            optional_marker: Regex::new(r"(?i)\b(?:optional|garnish)\b").unwrap(),
            trailing_optional: Regex::new(
                r"(?i)\s*(?:\(\s*(?:optional|garnish)\s*\)|optional|garnish)\s*$",
            )
            .unwrap(),
            parenthetical: Regex::new(r"\(([^)]*)\)").unwrap(),
            amount_token: Regex::new(r"^[\d/.\-]*\d[\d/.\-]*$").unwrap(),
        }
    }
}

/// Parse a full ingredient list from raw form text.
///
/// Lines are processed in order; group headers update the group applied to
/// subsequent records and never produce a record themselves. Blank lines
/// are skipped. Every content line yields exactly one record.
pub fn parse_ingredient_list(text: &str) -> Vec<ParsedIngredient> {
    let (_, ingredients) = classified_lines(text).fold(
        (None::<String>, Vec::new()),
        |(current_group, mut ingredients), line| match line {
            ClassifiedLine::GroupHeader(group) => (Some(group), ingredients),
            ClassifiedLine::Content(content) => {
                let order = ingredients.len();
                ingredients.push(parse_ingredient_line(content, current_group.as_deref(), order));
                (current_group, ingredients)
            }
        },
    );
    debug!("Parsed {} ingredients", ingredients.len());
    ingredients
}

/// Parse a single content line into an ingredient record.
///
/// `group_name` is the group in effect at this line and `display_order`
/// the record's position in the overall list; [`parse_ingredient_list`]
/// supplies both when walking a full input.
pub fn parse_ingredient_line(
    line: &str,
    group_name: Option<&str>,
    display_order: usize,
) -> ParsedIngredient {
    let patterns = &*INGREDIENT_PATTERNS;
    let original = line.trim();

    // 1. Optionality: detect anywhere, strip only an exact trailing marker
    let is_optional = patterns.optional_marker.is_match(original);
    let working = patterns.trailing_optional.replace(original, "").to_string();

    // 2. Notes: first parenthesized group wins, all groups are stripped
    let notes = patterns
        .parenthetical
        .captures(&working)
        .map(|captures| captures[1].trim().to_string())
        .filter(|notes| !notes.is_empty());
    let working = patterns.parenthetical.replace_all(&working, " ");
    let working = working.split_whitespace().collect::<Vec<_>>().join(" ");

    // 3. Amount and unit from the first two tokens
    let tokens: Vec<&str> = working.split_whitespace().collect();
    let (amount, unit, name) = if tokens.len() >= 2 && patterns.amount_token.is_match(tokens[0]) {
        match units::canonical_unit(tokens[1]) {
            Some(unit) => (
                Some(tokens[0].to_string()),
                Some(unit.to_string()),
                tokens[2..].join(" "),
            ),
            None => (Some(tokens[0].to_string()), None, tokens[1..].join(" ")),
        }
    } else {
        (None, None, working.clone())
    };

    // Never emit an empty name: fall back to the unmodified input line
    let name = if name.trim().is_empty() {
        trace!("Falling back to original line as name: {:?}", original);
        original.to_string()
    } else {
        name.trim().to_string()
    };

    ParsedIngredient {
        amount,
        unit,
        name,
        notes,
        group_name: group_name.map(str::to_string),
        is_optional,
        display_order,
    }
}

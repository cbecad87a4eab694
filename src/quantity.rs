//! # Quantity Model
//!
//! Parses raw amount strings ("1/2", "2 1/4", "1.5") into numeric values
//! and formats numeric values back into human-friendly fraction or decimal
//! strings. Used by the recipe scaling controls: amounts that parse are
//! multiplied and reformatted, everything else ("2-3", "to taste") is
//! displayed verbatim.
//!
//! `format_amount` is a display formatter, not an exact serializer: values
//! near a common cooking fraction snap to its Unicode glyph, and large
//! values round for readability.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::ingredient_parser::ParsedIngredient;

/// Tolerance used when snapping a value to a common fraction or integer.
const EPSILON: f64 = 0.01;

/// Fraction glyphs offered by the display formatter. Cooking amounts round
/// to eighths, quarters, and thirds; fifths and finer are not rendered.
const COMMON_FRACTIONS: &[(f64, &str)] = &[
    (1.0 / 8.0, "⅛"),
    (1.0 / 4.0, "¼"),
    (1.0 / 3.0, "⅓"),
    (1.0 / 2.0, "½"),
    (2.0 / 3.0, "⅔"),
    (3.0 / 4.0, "¾"),
];

/// Compiled regex patterns for the amount shapes that scale
struct AmountPatterns {
    /// Matches pure fractions: "1/2", "3/4"
    fraction: Regex,
    /// Matches mixed numbers: "1 1/2", "2 3/4"
    mixed: Regex,
}

static AMOUNT_PATTERNS: LazyLock<AmountPatterns> = LazyLock::new(|| AmountPatterns {
    fraction: Regex::new(r"^(\d+)\s*/\s*(\d+)$").unwrap(),
    mixed: Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)$").unwrap(),
});

/// Parse an amount string into a numeric value.
///
/// Understands pure fractions ("1/2"), mixed numbers ("1 1/2"), and plain
/// decimals or integers. Anything else (ranges like "2-3", descriptive
/// text like "to taste") returns `None`, which callers treat as "do not
/// scale, display verbatim".
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();

    if let Some(captures) = AMOUNT_PATTERNS.mixed.captures(text) {
        let whole: f64 = captures[1].parse().ok()?;
        let numerator: f64 = captures[2].parse().ok()?;
        let denominator: f64 = captures[3].parse().ok()?;
        let value = whole + numerator / denominator;
        return value.is_finite().then_some(value);
    }

    if let Some(captures) = AMOUNT_PATTERNS.fraction.captures(text) {
        let numerator: f64 = captures[1].parse().ok()?;
        let denominator: f64 = captures[2].parse().ok()?;
        let value = numerator / denominator;
        return value.is_finite().then_some(value);
    }

    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format a numeric amount for display.
///
/// Values within epsilon of a common cooking fraction render as the glyph
/// ("⅓"), optionally behind a whole part ("2 ½"). Near-integers render
/// without decimals. Everything else renders as a decimal: one decimal
/// place under 10, whole numbers above.
pub fn format_amount(value: f64) -> String {
    for &(fraction, glyph) in COMMON_FRACTIONS {
        if (value - fraction).abs() < EPSILON {
            return glyph.to_string();
        }
    }

    let whole = value.trunc();
    let remainder = value - whole;
    if whole >= 1.0 {
        for &(fraction, glyph) in COMMON_FRACTIONS {
            if (remainder - fraction).abs() < EPSILON {
                return format!("{} {}", whole as i64, glyph);
            }
        }
    }

    if (value - value.round()).abs() < EPSILON {
        return format!("{}", value.round() as i64);
    }

    if value < 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// Scale an amount string by a factor, formatting the result for display.
///
/// Amounts that do not parse pass through unchanged.
pub fn scale_amount(original: &str, factor: f64) -> String {
    match parse_amount(original) {
        Some(value) => format_amount(value * factor),
        None => {
            trace!("Amount {:?} does not scale, passing through", original);
            original.to_string()
        }
    }
}

/// Scale every amount in a parsed ingredient list.
///
/// Returns new records with scaled amount strings; records without an
/// amount, or with an amount that does not parse, are returned unchanged.
pub fn scale_ingredients(ingredients: &[ParsedIngredient], factor: f64) -> Vec<ParsedIngredient> {
    ingredients
        .iter()
        .map(|ingredient| {
            let mut scaled = ingredient.clone();
            if let Some(amount) = &ingredient.amount {
                scaled.amount = Some(scale_amount(amount, factor));
            }
            scaled
        })
        .collect()
}

//! # Structured-to-Text Serializers
//!
//! Inverse of the parsers: regenerates editable plain text from structured
//! ingredient and step records, re-inserting group headers at group
//! transitions. The output is lossy relative to arbitrary original
//! phrasing, but reparsing the serializer's own output yields the same
//! records back, which is what keeps edit round-trips stable.

use log::debug;

use crate::ingredient_parser::ParsedIngredient;
use crate::measurement::{select_measurement, MeasurementSystem, RichIngredient};
use crate::step_parser::ParsedStep;

/// Regenerate editable ingredient text from parsed records.
///
/// Records are emitted in their given order (already sorted by
/// `display_order`). A group transition to a non-null group emits a blank
/// line and a "For the {group}:" header before the record's own line.
pub fn serialize_ingredients(ingredients: &[ParsedIngredient]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_group: Option<&str> = None;

    for ingredient in ingredients {
        push_group_transition(&mut lines, &mut current_group, ingredient.group_name.as_deref());
        lines.push(ingredient_line(ingredient));
    }

    debug!("Serialized {} ingredients", ingredients.len());
    lines.join("\n")
}

/// Regenerate editable step text from parsed records.
///
/// Step numbers are not re-emitted; they are implicit from line order on
/// the next parse.
pub fn serialize_steps(steps: &[ParsedStep]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_group: Option<&str> = None;

    for step in steps {
        push_group_transition(&mut lines, &mut current_group, step.group_name.as_deref());
        let mut line = step.instruction.clone();
        if step.is_optional {
            line.push_str(" (optional)");
        }
        lines.push(line);
    }

    debug!("Serialized {} steps", steps.len());
    lines.join("\n")
}

/// Regenerate editable text from measurement-aware records, degrading each
/// to the single measurement matching the preferred system.
pub fn serialize_rich_ingredients(
    ingredients: &[RichIngredient],
    preferred: MeasurementSystem,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_group: Option<&str> = None;

    for ingredient in ingredients {
        push_group_transition(&mut lines, &mut current_group, ingredient.group_name.as_deref());
        lines.push(rich_ingredient_line(ingredient, preferred));
    }

    lines.join("\n")
}

/// Emit a blank line and group header when the group changes to a
/// non-null value. A leading blank line is suppressed at the very start
/// of the output.
fn push_group_transition<'a>(
    lines: &mut Vec<String>,
    current_group: &mut Option<&'a str>,
    group: Option<&'a str>,
) {
    if group != *current_group {
        if let Some(name) = group {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("For the {}:", name));
        }
        *current_group = group;
    }
}

fn ingredient_line(ingredient: &ParsedIngredient) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(amount) = &ingredient.amount {
        parts.push(amount);
    }
    if let Some(unit) = &ingredient.unit {
        parts.push(unit);
    }
    parts.push(&ingredient.name);

    let mut line = parts.join(" ");
    if let Some(notes) = &ingredient.notes {
        line.push_str(&format!(" ({})", notes));
    }
    if ingredient.is_optional {
        line.push_str(" (optional)");
    }
    line
}

fn rich_ingredient_line(ingredient: &RichIngredient, preferred: MeasurementSystem) -> String {
    let selected = select_measurement(&ingredient.measurements, preferred);

    let mut parts: Vec<&str> = Vec::new();
    if let Some(measurement) = selected {
        if !measurement.amount.is_empty() {
            parts.push(&measurement.amount);
        }
        if !measurement.unit.is_empty() {
            parts.push(&measurement.unit);
        }
    }
    if let Some(size) = &ingredient.size {
        parts.push(size);
    }
    parts.push(&ingredient.name);

    let mut line = parts.join(" ");
    if let Some(preparation) = &ingredient.preparation {
        line.push_str(&format!(", {}", preparation));
    }
    if let Some(notes) = &ingredient.notes {
        line.push_str(&format!(" ({})", notes));
    }
    if ingredient.is_optional {
        line.push_str(" (optional)");
    }
    line
}

//! # Measurement Systems
//!
//! Types for the measurement-system-aware ingredient shape used at render
//! and edit time, where a single flat amount/unit pair becomes a list of
//! per-system measurements, and the selector that picks the entry to show
//! for a requested system.

use serde::{Deserialize, Serialize};

use crate::ingredient_parser::ParsedIngredient;
use crate::units;

/// Which family of units a measurement is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MeasurementSystem {
    /// US customary units: cup, tbsp, tsp, oz, lb, ...
    Imperial,
    /// Metric units: g, kg, ml, l, ...
    Metric,
    /// System-agnostic units: clove, pinch, can, ... and unrecognized ones
    Other,
}

impl MeasurementSystem {
    /// Classify a canonical unit token into its system bucket.
    pub fn for_unit(unit: &str) -> Self {
        if units::is_imperial(unit) {
            MeasurementSystem::Imperial
        } else if units::is_metric(unit) {
            MeasurementSystem::Metric
        } else {
            MeasurementSystem::Other
        }
    }
}

/// One amount/unit pair tagged with its system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub system: MeasurementSystem,
    pub amount: String,
    pub unit: String,
}

/// The measurement-aware ingredient shape consumed at render/edit time.
///
/// Produced by a one-way upgrade from [`ParsedIngredient`]; the serializer
/// degrades it back to a single chosen measurement per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichIngredient {
    pub name: String,
    pub measurements: Vec<Measurement>,
    /// Size descriptor prefixed before the name when serialized ("large")
    pub size: Option<String>,
    /// Preparation appended after the name with a comma ("diced")
    pub preparation: Option<String>,
    pub notes: Option<String>,
    pub group_name: Option<String>,
    pub is_optional: bool,
    pub display_order: usize,
}

/// Pick the measurement to display for a requested system.
///
/// Resolution order: exact system match, then a system-agnostic `Other`
/// entry, then the first entry regardless of system. An ingredient that
/// only makes sense in one form (a clove of garlic) is therefore never
/// hidden by toggling systems. Returns `None` only for an empty list.
pub fn select_measurement(
    measurements: &[Measurement],
    requested: MeasurementSystem,
) -> Option<&Measurement> {
    measurements
        .iter()
        .find(|m| m.system == requested)
        .or_else(|| {
            measurements
                .iter()
                .find(|m| m.system == MeasurementSystem::Other)
        })
        .or_else(|| measurements.first())
}

/// Upgrade a flat parsed ingredient into the measurement-aware shape.
///
/// The flat amount/unit pair becomes a single classified measurement;
/// `size` and `preparation` have no legacy counterpart and start empty.
pub fn upgrade_ingredient(flat: &ParsedIngredient) -> RichIngredient {
    let mut measurements = Vec::new();
    if flat.amount.is_some() || flat.unit.is_some() {
        let unit = flat.unit.clone().unwrap_or_default();
        measurements.push(Measurement {
            system: MeasurementSystem::for_unit(&unit),
            amount: flat.amount.clone().unwrap_or_default(),
            unit,
        });
    }

    RichIngredient {
        name: flat.name.clone(),
        measurements,
        size: None,
        preparation: None,
        notes: flat.notes.clone(),
        group_name: flat.group_name.clone(),
        is_optional: flat.is_optional,
        display_order: flat.display_order,
    }
}

/// Upgrade a whole parsed list into the measurement-aware shape.
pub fn upgrade_ingredients(flat: &[ParsedIngredient]) -> Vec<RichIngredient> {
    flat.iter().map(upgrade_ingredient).collect()
}

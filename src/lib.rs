//! # Recipe Text
//!
//! Text-processing core of a recipe-sharing application: parses freeform
//! ingredient and step text into structured records, regenerates editable
//! text from those records, and scales and formats quantities for display.
//!
//! All functions are pure and total: malformed input degrades to a
//! best-effort record or a pass-through string, never an error.

pub mod ingredient_parser;
pub mod line_classifier;
pub mod measurement;
pub mod quantity;
pub mod serializer;
pub mod step_parser;
pub mod units;

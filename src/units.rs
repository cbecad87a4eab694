//! # Unit Vocabulary
//!
//! The single closed vocabulary of measurement units shared by the
//! ingredient parser and the unit-to-system classifier. Surface spellings
//! (plurals, abbreviations, trailing periods) all normalize to one
//! canonical lowercase token per unit, which is what parsed records store
//! and what the serializer re-emits.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Spelling variations mapped to their canonical unit token.
static UNIT_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    map.insert("tsp", "tsp");
    map.insert("teaspoon", "tsp");
    map.insert("teaspoons", "tsp");
    map.insert("tbsp", "tbsp");
    map.insert("tbs", "tbsp");
    map.insert("tablespoon", "tbsp");
    map.insert("tablespoons", "tbsp");
    map.insert("cup", "cup");
    map.insert("cups", "cup");
    map.insert("c", "cup");
    map.insert("pint", "pint");
    map.insert("pints", "pint");
    map.insert("pt", "pint");
    map.insert("quart", "quart");
    map.insert("quarts", "quart");
    map.insert("qt", "quart");
    map.insert("gallon", "gallon");
    map.insert("gallons", "gallon");
    map.insert("gal", "gallon");
    map.insert("ml", "ml");
    map.insert("milliliter", "ml");
    map.insert("milliliters", "ml");
    map.insert("millilitre", "ml");
    map.insert("millilitres", "ml");
    map.insert("cl", "cl");
    map.insert("dl", "dl");
    map.insert("l", "l");
    map.insert("liter", "l");
    map.insert("liters", "l");
    map.insert("litre", "l");
    map.insert("litres", "l");

    // Weight units
    map.insert("oz", "oz");
    map.insert("ounce", "oz");
    map.insert("ounces", "oz");
    map.insert("lb", "lb");
    map.insert("lbs", "lb");
    map.insert("pound", "lb");
    map.insert("pounds", "lb");
    map.insert("mg", "mg");
    map.insert("g", "g");
    map.insert("gram", "g");
    map.insert("grams", "g");
    map.insert("kg", "kg");
    map.insert("kilogram", "kg");
    map.insert("kilograms", "kg");

    // Count and container units
    map.insert("piece", "piece");
    map.insert("pieces", "piece");
    map.insert("pc", "piece");
    map.insert("pcs", "piece");
    map.insert("clove", "clove");
    map.insert("cloves", "clove");
    map.insert("pinch", "pinch");
    map.insert("pinches", "pinch");
    map.insert("dash", "dash");
    map.insert("dashes", "dash");
    map.insert("handful", "handful");
    map.insert("handfuls", "handful");
    map.insert("slice", "slice");
    map.insert("slices", "slice");
    map.insert("stick", "stick");
    map.insert("sticks", "stick");
    map.insert("bunch", "bunch");
    map.insert("bunches", "bunch");
    map.insert("sprig", "sprig");
    map.insert("sprigs", "sprig");
    map.insert("can", "can");
    map.insert("cans", "can");
    map.insert("jar", "jar");
    map.insert("jars", "jar");
    map.insert("package", "package");
    map.insert("packages", "package");
    map.insert("pkg", "package");
    map.insert("packet", "package");
    map.insert("packets", "package");
    map.insert("bottle", "bottle");
    map.insert("bottles", "bottle");
    map.insert("head", "head");
    map.insert("heads", "head");
    map.insert("stalk", "stalk");
    map.insert("stalks", "stalk");

    map
});

/// Canonical tokens measured in US customary amounts.
static IMPERIAL_UNITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["tsp", "tbsp", "cup", "pint", "quart", "gallon", "oz", "lb", "stick"]
        .into_iter()
        .collect()
});

/// Canonical tokens measured in metric amounts.
static METRIC_UNITS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["ml", "cl", "dl", "l", "mg", "g", "kg"].into_iter().collect());

/// Normalize a token to its canonical unit, if it is a recognized unit.
///
/// Lookup is case-insensitive and tolerates a trailing period ("tbsp.").
/// Unknown tokens return `None` and are left to the caller, which folds
/// them into the ingredient name.
pub fn canonical_unit(token: &str) -> Option<&'static str> {
    let token = token.trim().trim_end_matches('.').to_lowercase();
    UNIT_CANONICAL.get(token.as_str()).copied()
}

/// Whether a canonical token is a US customary unit.
pub fn is_imperial(unit: &str) -> bool {
    IMPERIAL_UNITS.contains(unit)
}

/// Whether a canonical token is a metric unit.
pub fn is_metric(unit: &str) -> bool {
    METRIC_UNITS.contains(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalizes_plurals() {
        assert_eq!(canonical_unit("cups"), Some("cup"));
        assert_eq!(canonical_unit("tablespoons"), Some("tbsp"));
        assert_eq!(canonical_unit("pinches"), Some("pinch"));
    }

    #[test]
    fn test_canonicalizes_abbreviations() {
        assert_eq!(canonical_unit("tbsp."), Some("tbsp"));
        assert_eq!(canonical_unit("lbs"), Some("lb"));
        assert_eq!(canonical_unit("c"), Some("cup"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(canonical_unit("Cups"), Some("cup"));
        assert_eq!(canonical_unit("TSP"), Some("tsp"));
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(canonical_unit("smidgen"), None);
        assert_eq!(canonical_unit("flour"), None);
        assert_eq!(canonical_unit(""), None);
    }

    #[test]
    fn test_system_partition() {
        assert!(is_imperial("cup"));
        assert!(is_imperial("lb"));
        assert!(!is_imperial("g"));

        assert!(is_metric("g"));
        assert!(is_metric("ml"));
        assert!(!is_metric("cup"));

        // Count units belong to neither system
        assert!(!is_imperial("clove"));
        assert!(!is_metric("clove"));
    }
}

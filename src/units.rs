//! Quantity-to-grams conversion.
//!
//! Mass units convert exactly. Volume units go through millilitres and a
//! density picked by the item name, falling back to water. A missing or
//! unknown unit means the quantity is already in grams.

/// Converts a quantity in some unit into grams
pub trait UnitConverter: Send + Sync {
    /// Never fails: unknown units and zero quantities are valid input
    fn to_grams(&self, quantity: f64, unit: &str, item_hint: &str) -> f64;
}

/// Table-driven converter used by default
#[derive(Debug, Clone)]
pub struct StandardUnitConverter {
    /// `(item keyword, grams per millilitre)`, first match wins
    densities: Vec<(String, f64)>,
}

const GRAMS_PER_OUNCE: f64 = 28.349_523_125;
const GRAMS_PER_POUND: f64 = 453.592_37;

// Ordered so that more specific keywords are tried first
const DENSITIES: &[(&str, f64)] = &[
    ("peanut butter", 1.09),
    ("brown sugar", 0.93),
    ("powdered sugar", 0.56),
    ("icing sugar", 0.56),
    ("coconut milk", 0.97),
    ("soy sauce", 1.15),
    ("flour", 0.53),
    ("cocoa", 0.42),
    ("oats", 0.41),
    ("sugar", 0.85),
    ("butter", 0.96),
    ("oil", 0.92),
    ("honey", 1.42),
    ("syrup", 1.33),
    ("rice", 0.85),
    ("lentil", 0.81),
    ("beans", 0.77),
    ("chickpea", 0.69),
    ("milk", 1.03),
    ("cream", 1.01),
    ("yogurt", 1.03),
    ("salt", 1.22),
    ("cheese", 0.45),
    ("chocolate chips", 0.72),
];

impl StandardUnitConverter {
    pub fn new(densities: Vec<(String, f64)>) -> Self {
        Self { densities }
    }

    fn density_for(&self, item_hint: &str) -> f64 {
        let hint = item_hint.to_lowercase();
        self.densities
            .iter()
            .find(|(keyword, _)| hint.contains(keyword.as_str()))
            .map(|(_, density)| *density)
            .unwrap_or(1.0)
    }
}

impl Default for StandardUnitConverter {
    fn default() -> Self {
        Self::new(
            DENSITIES
                .iter()
                .map(|(keyword, density)| (keyword.to_string(), *density))
                .collect(),
        )
    }
}

/// Millilitres per unit for volume units
fn millilitres_per_unit(unit: &str) -> Option<f64> {
    match unit {
        "ml" => Some(1.0),
        "l" => Some(1000.0),
        "tsp" => Some(4.928_92),
        "tbsp" => Some(14.786_76),
        "cup" => Some(236.588),
        "fl oz" => Some(29.573_53),
        _ => None,
    }
}

/// Grams per unit for mass units
fn grams_per_unit(unit: &str) -> Option<f64> {
    match unit {
        "g" => Some(1.0),
        "kg" => Some(1000.0),
        "mg" => Some(0.001),
        "oz" => Some(GRAMS_PER_OUNCE),
        "lb" => Some(GRAMS_PER_POUND),
        _ => None,
    }
}

impl UnitConverter for StandardUnitConverter {
    fn to_grams(&self, quantity: f64, unit: &str, item_hint: &str) -> f64 {
        if !quantity.is_finite() || quantity <= 0.0 {
            return 0.0;
        }

        let unit = unit.trim().to_lowercase();
        if let Some(factor) = grams_per_unit(&unit) {
            return quantity * factor;
        }
        if let Some(ml) = millilitres_per_unit(&unit) {
            return quantity * ml * self.density_for(item_hint);
        }

        // Empty or unrecognised unit
        quantity
    }
}

//! Per-serving nutrition from matched ingredients.

use crate::model::{IngredientRecord, Nutrient, NutrientTotals, ParsedIngredientLine};
use crate::units::UnitConverter;

/// An ingredient line with the record it resolved to, if any
pub type MatchedLine<'a> = (&'a ParsedIngredientLine, Option<&'a IngredientRecord>);

/// Sums nutrients over all lines without dividing by servings.
///
/// A line contributes `grams / 100 * per-100g value` for each nutrient.
/// Unmatched lines and lines without a quantity contribute nothing. A
/// missing unit is passed to the converter as grams.
pub fn total_nutrients(lines: &[MatchedLine<'_>], converter: &dyn UnitConverter) -> NutrientTotals {
    let mut totals = NutrientTotals::zeroed();

    for (line, record) in lines {
        let Some(record) = record else {
            continue;
        };

        let grams = converter.to_grams(
            line.quantity.unwrap_or(0.0),
            line.unit.as_deref().unwrap_or("g"),
            &line.item,
        );
        let multiplier = grams / 100.0;

        for nutrient in Nutrient::ALL {
            totals.add(nutrient, record.nutrient(nutrient) * multiplier);
        }
    }

    totals
}

/// Totals divided by `max(1, servings)` and rounded to one decimal.
pub fn aggregate_nutrition(
    lines: &[MatchedLine<'_>],
    servings: u32,
    converter: &dyn UnitConverter,
) -> NutrientTotals {
    total_nutrients(lines, converter).per_serving(servings)
}

//! Human-readable summary and improvement suggestions.

use crate::config::SuggestionThresholds;
use crate::model::{AnalyzeResult, Nutrient, NutrientTotals};
use std::collections::BTreeSet;

pub const HIGH_CALORIE_WARNING: &str =
    "High in calories per serving; consider smaller portions or lighter ingredients.";
pub const HIGH_SODIUM_WARNING: &str =
    "High in sodium; reduce added salt or use low-sodium alternatives.";
pub const ADD_PROTEIN_TIP: &str =
    "Low in protein; consider adding beans, lentils, tofu, eggs or lean meat.";
pub const HIGH_SUGAR_WARNING: &str = "High in sugars; consider cutting back on added sugar.";
pub const BALANCE_SPICE_TIP: &str =
    "Quite spicy; serve with yogurt, cucumber or rice to balance the heat.";

const SEPARATOR: &str = " · ";

/// Fills `summary` and `suggestions` from the rest of the result.
///
/// Nutrient threshold checks only run when the result has ingredients, so an
/// empty recipe gets no add-protein tip for its zeroed nutrition.
pub fn annotate(result: &mut AnalyzeResult, thresholds: &SuggestionThresholds) {
    result.summary = summarize(
        &result.title,
        result.servings,
        result.ingredients.len(),
        &result.inferred.diets,
    );
    result.suggestions = suggest(
        &result.nutrition_per_serving,
        &result.inferred.taste,
        !result.ingredients.is_empty(),
        thresholds,
    );
}

/// `"Title" · serves 4 · 6 ingredients. Suitable for vegan diets.`
pub fn summarize(
    title: &str,
    servings: u32,
    ingredient_count: usize,
    diets: &BTreeSet<String>,
) -> String {
    let mut parts = Vec::new();
    if !title.trim().is_empty() {
        parts.push(format!("\"{}\"", title.trim()));
    }
    if servings > 0 {
        parts.push(format!("serves {}", servings));
    }
    match ingredient_count {
        0 => {}
        1 => parts.push("1 ingredient".to_string()),
        n => parts.push(format!("{} ingredients", n)),
    }

    let mut summary = format!("{}.", parts.join(SEPARATOR));
    if !diets.is_empty() {
        let labels: Vec<String> = diets.iter().map(|d| diet_label(d)).collect();
        summary.push_str(&format!(" Suitable for {} diets.", labels.join(", ")));
    }
    summary
}

fn diet_label(code: &str) -> String {
    code.replace('_', "-")
}

/// Runs each threshold check in a fixed order; any subset may fire.
///
/// Nutrient checks are skipped when the recipe has no ingredients, since
/// there is nothing to advise on.
pub fn suggest(
    nutrition: &NutrientTotals,
    taste: &BTreeSet<String>,
    has_ingredients: bool,
    thresholds: &SuggestionThresholds,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if has_ingredients {
        if nutrition.get(Nutrient::Calories) > thresholds.high_calories {
            suggestions.push(HIGH_CALORIE_WARNING.to_string());
        }
        if nutrition.get(Nutrient::Sodium) > thresholds.high_sodium {
            suggestions.push(HIGH_SODIUM_WARNING.to_string());
        }
        if nutrition.get(Nutrient::Protein) < thresholds.low_protein {
            suggestions.push(ADD_PROTEIN_TIP.to_string());
        }
        if nutrition.get(Nutrient::Sugars) > thresholds.high_sugars {
            suggestions.push(HIGH_SUGAR_WARNING.to_string());
        }
    }

    if taste.contains("spicy") && !taste.contains("cooling") {
        suggestions.push(BALANCE_SPICE_TIP.to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrition(values: &[(Nutrient, f64)]) -> NutrientTotals {
        let mut totals = NutrientTotals::zeroed();
        for (nutrient, value) in values {
            totals.add(*nutrient, *value);
        }
        totals
    }

    fn tags(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_summary_full() {
        let summary = summarize("Pancakes", 4, 5, &tags(&["vegetarian", "gluten_free"]));
        assert_eq!(
            summary,
            "\"Pancakes\" · serves 4 · 5 ingredients. Suitable for gluten-free, vegetarian diets."
        );
    }

    #[test]
    fn test_summary_without_ingredients_or_diets() {
        assert_eq!(summarize("Untitled", 1, 0, &BTreeSet::new()), "\"Untitled\" · serves 1.");
        assert_eq!(summarize("", 2, 1, &BTreeSet::new()), "serves 2 · 1 ingredient.");
    }

    #[test]
    fn test_high_calorie_warning() {
        let thresholds = SuggestionThresholds::default();
        let heavy = nutrition(&[(Nutrient::Calories, 900.0), (Nutrient::Protein, 30.0)]);
        let light = nutrition(&[(Nutrient::Calories, 400.0), (Nutrient::Protein, 30.0)]);

        assert!(suggest(&heavy, &BTreeSet::new(), true, &thresholds)
            .contains(&HIGH_CALORIE_WARNING.to_string()));
        assert!(!suggest(&light, &BTreeSet::new(), true, &thresholds)
            .contains(&HIGH_CALORIE_WARNING.to_string()));
    }

    #[test]
    fn test_fixed_order() {
        let thresholds = SuggestionThresholds::default();
        let everything = nutrition(&[
            (Nutrient::Calories, 1200.0),
            (Nutrient::Sodium, 1500.0),
            (Nutrient::Sugars, 80.0),
        ]);
        let suggestions = suggest(&everything, &tags(&["spicy"]), true, &thresholds);
        assert_eq!(
            suggestions,
            vec![
                HIGH_CALORIE_WARNING,
                HIGH_SODIUM_WARNING,
                ADD_PROTEIN_TIP,
                HIGH_SUGAR_WARNING,
                BALANCE_SPICE_TIP
            ]
        );
    }

    #[test]
    fn test_cooling_balances_spice() {
        let thresholds = SuggestionThresholds::default();
        let fine = nutrition(&[(Nutrient::Protein, 25.0)]);
        assert!(suggest(&fine, &tags(&["spicy", "cooling"]), true, &thresholds).is_empty());
    }

    #[test]
    fn test_no_nutrient_advice_without_ingredients() {
        let thresholds = SuggestionThresholds::default();
        assert!(suggest(&NutrientTotals::zeroed(), &BTreeSet::new(), false, &thresholds).is_empty());
    }
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Recipe split into its raw sections, before any ingredient parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecipe {
    pub title: String,
    /// Always at least 1
    pub servings: u32,
    pub ingredient_lines: Vec<String>,
    pub step_lines: Vec<String>,
}

impl Default for ParsedRecipe {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            servings: 1,
            ingredient_lines: Vec::new(),
            step_lines: Vec::new(),
        }
    }
}

/// One ingredient line broken into `[quantity] [unit] item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredientLine {
    /// Absent when no quantity could be read (never defaulted to zero)
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Lowercase short form, e.g. `cup`, `tbsp`, `g`
    #[serde(default)]
    pub unit: Option<String>,
    pub item: String,
}

impl ParsedIngredientLine {
    pub fn item_only(item: impl Into<String>) -> Self {
        Self {
            quantity: None,
            unit: None,
            item: item.into(),
        }
    }
}

/// Nutrients tracked by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Sodium,
    Sugars,
    Fiber,
    Potassium,
    Iron,
    Calcium,
    VitaminD,
}

impl Nutrient {
    pub const ALL: [Nutrient; 11] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Sodium,
        Nutrient::Sugars,
        Nutrient::Fiber,
        Nutrient::Potassium,
        Nutrient::Iron,
        Nutrient::Calcium,
        Nutrient::VitaminD,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Sodium => "sodium",
            Nutrient::Sugars => "sugars",
            Nutrient::Fiber => "fiber",
            Nutrient::Potassium => "potassium",
            Nutrient::Iron => "iron",
            Nutrient::Calcium => "calcium",
            Nutrient::VitaminD => "vitaminD",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A knowledge base entry. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientRecord {
    pub name: String,
    pub aliases: Vec<String>,
    pub nutrients_per_100g: BTreeMap<Nutrient, f64>,
}

impl IngredientRecord {
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nutrients_per_100g.get(&nutrient).copied().unwrap_or(0.0)
    }
}

/// Nutrient amounts keyed by nutrient. Values are never negative.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientTotals(BTreeMap<Nutrient, f64>);

impl NutrientTotals {
    /// Every tracked nutrient present with a value of 0.
    pub fn zeroed() -> Self {
        Self(Nutrient::ALL.iter().map(|n| (*n, 0.0)).collect())
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Adds `amount`, ignoring negative and non-finite contributions.
    pub fn add(&mut self, nutrient: Nutrient, amount: f64) {
        if !amount.is_finite() || amount <= 0.0 {
            self.0.entry(nutrient).or_insert(0.0);
            return;
        }
        *self.0.entry(nutrient).or_insert(0.0) += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(n, v)| (*n, *v))
    }

    /// Divides every value by `divisor` (at least 1) and rounds to one decimal.
    pub fn per_serving(&self, divisor: u32) -> Self {
        let divisor = f64::from(divisor.max(1));
        Self(
            self.0
                .iter()
                .map(|(n, v)| (*n, round_one_decimal(v / divisor)))
                .collect(),
        )
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Tags derived from ingredient text by the inference engines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InferredAttributes {
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    #[serde(default)]
    pub diets: BTreeSet<String>,
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
    #[serde(default)]
    pub taste: BTreeSet<String>,
}

/// Result of analysing one recipe, whether produced remotely or locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    pub title: String,
    pub servings: u32,
    pub ingredients: Vec<ParsedIngredientLine>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub inferred: InferredAttributes,
    pub nutrition_per_serving: NutrientTotals,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

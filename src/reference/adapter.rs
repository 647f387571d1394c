//! Normalises loosely shaped JSON reference data into the strict types.
//!
//! Knowledge base exports come from different tools and disagree on field
//! names (`name` vs `title`, `aliases` vs `synonyms`, `kcal` vs `calories`).
//! Everything is resolved here so the pipeline only sees `IngredientRecord`.

use crate::error::AnalyzeError;
use crate::inference::TasteTable;
use crate::model::{IngredientRecord, Nutrient};
use log::warn;
use serde_json::Value;
use std::collections::BTreeMap;

const NAME_FIELDS: &[&str] = &["name", "title", "ingredient"];
const ALIAS_FIELDS: &[&str] = &["aliases", "synonyms", "altNames", "alt_names"];
const NUTRIENT_FIELDS: &[&str] = &["nutrientsPer100g", "nutrients_per_100g", "nutrients", "per100g", "nutrition"];
const LIST_FIELDS: &[&str] = &["ingredients", "records", "items"];

/// Parses a knowledge base: an array of records, or an object wrapping one.
pub fn parse_knowledge_base(json: &str) -> Result<Vec<IngredientRecord>, AnalyzeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| AnalyzeError::ReferenceFormat(e.to_string()))?;

    let entries = match &value {
        Value::Array(entries) => entries,
        Value::Object(map) => LIST_FIELDS
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_array))
            .ok_or_else(|| {
                AnalyzeError::ReferenceFormat("expected an array of ingredient records".to_string())
            })?,
        _ => {
            return Err(AnalyzeError::ReferenceFormat(
                "expected an array of ingredient records".to_string(),
            ))
        }
    };

    Ok(entries.iter().filter_map(normalize_record).collect())
}

/// Converts one raw record, skipping entries without a usable name.
pub fn normalize_record(value: &Value) -> Option<IngredientRecord> {
    let name = first_field(value, NAME_FIELDS)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let Some(name) = name else {
        warn!("Skipping ingredient record without a name: {}", value);
        return None;
    };

    let aliases = first_field(value, ALIAS_FIELDS)
        .map(string_list)
        .unwrap_or_default();

    let mut nutrients_per_100g = BTreeMap::new();
    if let Some(Value::Object(map)) = first_field(value, NUTRIENT_FIELDS) {
        for (key, raw) in map {
            match (nutrient_from_key(key), number(raw)) {
                (Some(nutrient), Some(amount)) if amount >= 0.0 => {
                    nutrients_per_100g.insert(nutrient, amount);
                }
                (Some(_), _) => warn!("Ignoring invalid {} value for {}: {}", key, name, raw),
                (None, _) => {}
            }
        }
    }

    Some(IngredientRecord {
        name: name.to_string(),
        aliases,
        nutrients_per_100g,
    })
}

/// Parses a taste table: `{"chili": ["spicy"], "mint": "cooling"}`.
pub fn parse_taste_table(json: &str) -> Result<TasteTable, AnalyzeError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| AnalyzeError::ReferenceFormat(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(AnalyzeError::ReferenceFormat(
            "taste table must be an object of keyword to tags".to_string(),
        ));
    };

    let entries = map
        .iter()
        .map(|(keyword, tags)| (keyword.trim().to_lowercase(), string_list(tags)))
        .filter(|(keyword, tags)| !keyword.is_empty() && !tags.is_empty())
        .collect();

    Ok(TasteTable::new(entries))
}

/// Maps the many spellings of nutrient names onto `Nutrient`.
pub fn nutrient_from_key(key: &str) -> Option<Nutrient> {
    let key: String = key
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    match key.as_str() {
        "calories" | "calorie" | "kcal" | "energy" | "energykcal" => Some(Nutrient::Calories),
        "protein" | "proteins" => Some(Nutrient::Protein),
        "carbs" | "carb" | "carbohydrate" | "carbohydrates" => Some(Nutrient::Carbs),
        "fat" | "fats" | "totalfat" => Some(Nutrient::Fat),
        "sodium" => Some(Nutrient::Sodium),
        "sugar" | "sugars" | "totalsugars" => Some(Nutrient::Sugars),
        "fiber" | "fibre" | "dietaryfiber" => Some(Nutrient::Fiber),
        "potassium" => Some(Nutrient::Potassium),
        "iron" => Some(Nutrient::Iron),
        "calcium" => Some(Nutrient::Calcium),
        "vitamind" | "vitd" | "vitamind3" => Some(Nutrient::VitaminD),
        _ => None,
    }
}

fn first_field<'a>(value: &'a Value, fields: &[&str]) -> Option<&'a Value> {
    fields.iter().find_map(|field| value.get(*field))
}

/// Accepts an array of strings or a single comma-separated string
fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Accepts numbers and strings such as `"12.5"` or `"12.5 g"`
fn number(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.split_whitespace().next()?.parse::<f64>().ok(),
        _ => None,
    };
    amount.filter(|n| n.is_finite())
}

//! Rule engines deriving tags from ingredient names.
//!
//! The engines are independent of each other and take their keyword tables
//! as arguments, so callers can swap in their own reference data.

mod allergens;
mod cuisine;
mod diets;
mod taste;

pub use allergens::{detect_allergens, AllergenTable};
pub use cuisine::{infer_cuisines, CuisineRule, CuisineTable};
pub use diets::{infer_diets, DietRule, DietRules};
pub use taste::{profile_taste, TasteTable};

use crate::model::{InferredAttributes, ParsedIngredientLine};
use crate::reference::ReferenceData;

/// Lowercased item names joined by a single space
pub fn ingredient_text(ingredients: &[ParsedIngredientLine]) -> String {
    ingredients
        .iter()
        .map(|i| i.item.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs all engines over the parsed ingredients.
pub fn infer_attributes(
    ingredients: &[ParsedIngredientLine],
    reference: &ReferenceData,
) -> InferredAttributes {
    if ingredients.is_empty() {
        return InferredAttributes::default();
    }

    let text = ingredient_text(ingredients);
    InferredAttributes {
        allergens: detect_allergens(&text, &reference.allergens),
        diets: infer_diets(&text, &reference.diets),
        cuisines: infer_cuisines(&text, &reference.cuisines),
        taste: profile_taste(ingredients.iter().map(|i| i.item.as_str()), &reference.taste),
    }
}

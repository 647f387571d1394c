//! Recipe text to nutrition analysis.
//!
//! Recipe text (typed, pasted, fetched from a page or built from an
//! ingredient list) is segmented into title, servings, ingredients and
//! steps; each ingredient is parsed, matched against a knowledge base and
//! converted to grams; nutrients are aggregated per serving; allergens,
//! diets, cuisines and taste are inferred; and a summary with suggestions
//! is written. An optional remote service is tried first, with the local
//! pipeline as the fallback.

pub mod analyzer;
pub mod builder;
pub mod config;
pub mod error;
pub mod inference;
pub mod ingredient_parser;
pub mod matcher;
pub mod model;
pub mod nutrition;
pub mod pipelines;
pub mod reference;
pub mod remote;
pub mod segmenter;
pub mod summary;
pub mod units;
pub mod url_to_text;

pub use analyzer::{Analyzer, Stage};
pub use builder::{InputSource, RecipeAnalyzer, RecipeAnalyzerBuilder};
pub use config::AnalyzerConfig;
pub use error::{AnalyzeError, RemoteError};
pub use model::{
    AnalyzeResult, InferredAttributes, IngredientRecord, Nutrient, NutrientTotals,
    ParsedIngredientLine, ParsedRecipe,
};
pub use pipelines::local::LocalPipeline;
pub use reference::{KnowledgeBase, ReferenceData};
pub use remote::{HttpRemoteAnalyzer, RemoteAnalyzer};
pub use units::{StandardUnitConverter, UnitConverter};

/// Analyze recipe text with the built-in reference data, without any
/// network access.
///
/// # Example
/// ```
/// let result = recipe_analyzer::analyze_text("Toast\n2 slices bread\n1 tbsp butter");
/// assert_eq!(result.title, "Toast");
/// assert_eq!(result.ingredients.len(), 2);
/// ```
pub fn analyze_text(text: &str) -> AnalyzeResult {
    LocalPipeline::default().analyze(text)
}

/// Fetch a recipe page and analyze it locally
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_analyzer::AnalyzeError> {
/// let result = recipe_analyzer::analyze_url("https://example.com/recipe").await?;
/// println!("{}", result.summary);
/// # Ok(())
/// # }
/// ```
pub async fn analyze_url(url: &str) -> Result<AnalyzeResult, AnalyzeError> {
    let text = pipelines::url::process(url, None).await?;
    Ok(analyze_text(&text))
}

use crate::config::SuggestionThresholds;
use crate::inference::infer_attributes;
use crate::ingredient_parser::parse_ingredient_line;
use crate::matcher::match_ingredient;
use crate::model::{AnalyzeResult, ParsedIngredientLine};
use crate::nutrition::{aggregate_nutrition, MatchedLine};
use crate::reference::ReferenceData;
use crate::segmenter::segment_recipe;
use crate::summary;
use crate::units::{StandardUnitConverter, UnitConverter};
use log::debug;
use std::sync::Arc;

/// Text to `AnalyzeResult` without any network access.
///
/// Holds only shared read-only data, so one instance can serve concurrent
/// callers. The same text always yields the same result.
#[derive(Clone)]
pub struct LocalPipeline {
    reference: Arc<ReferenceData>,
    converter: Arc<dyn UnitConverter>,
    thresholds: SuggestionThresholds,
}

impl LocalPipeline {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            reference,
            converter: Arc::new(StandardUnitConverter::default()),
            thresholds: SuggestionThresholds::default(),
        }
    }

    pub fn with_converter(mut self, converter: Arc<dyn UnitConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_thresholds(mut self, thresholds: SuggestionThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Segments, parses, matches, aggregates, infers and summarises.
    pub fn analyze(&self, text: &str) -> AnalyzeResult {
        let recipe = segment_recipe(text);
        debug!(
            "Segmented '{}': {} ingredient lines, {} steps, serves {}",
            recipe.title,
            recipe.ingredient_lines.len(),
            recipe.step_lines.len(),
            recipe.servings
        );

        let ingredients: Vec<ParsedIngredientLine> = recipe
            .ingredient_lines
            .iter()
            .map(|line| parse_ingredient_line(line))
            .collect();

        let matched: Vec<MatchedLine<'_>> = ingredients
            .iter()
            .map(|line| {
                let record = match_ingredient(&line.item, &self.reference.knowledge_base);
                match record {
                    Some(record) => debug!("'{}' matched '{}'", line.item, record.name),
                    None => debug!("'{}' has no knowledge base match", line.item),
                }
                (line, record)
            })
            .collect();

        let nutrition_per_serving =
            aggregate_nutrition(&matched, recipe.servings, self.converter.as_ref());
        let inferred = infer_attributes(&ingredients, &self.reference);

        let mut result = AnalyzeResult {
            title: recipe.title,
            servings: recipe.servings,
            ingredients,
            steps: recipe.step_lines,
            inferred,
            nutrition_per_serving,
            summary: String::new(),
            suggestions: Vec::new(),
        };
        summary::annotate(&mut result, &self.thresholds);
        result
    }
}

impl Default for LocalPipeline {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceData::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Nutrient, NutrientTotals};

    #[test]
    fn test_empty_input() {
        let result = LocalPipeline::default().analyze("");
        assert_eq!(result.title, "Untitled");
        assert_eq!(result.servings, 1);
        assert!(result.ingredients.is_empty());
        assert!(result.steps.is_empty());
        assert_eq!(result.nutrition_per_serving, NutrientTotals::zeroed());
        assert!(result.inferred.allergens.is_empty());
        assert!(result.inferred.diets.is_empty());
        assert!(result.inferred.cuisines.is_empty());
        assert!(result.inferred.taste.is_empty());
    }

    #[test]
    fn test_simple_recipe() {
        let text = "Rice Bowl\nServings: 2\nIngredients\n200 g rice\n100 g tofu\n\nSteps\n1. Cook rice\n2. Add tofu";
        let result = LocalPipeline::default().analyze(text);

        assert_eq!(result.title, "Rice Bowl");
        assert_eq!(result.servings, 2);
        assert_eq!(result.ingredients.len(), 2);
        assert_eq!(result.steps, vec!["Cook rice", "Add tofu"]);
        // (200 * 3.65 + 100 * 0.76) / 2
        assert_eq!(result.nutrition_per_serving.get(Nutrient::Calories), 403.0);
        assert!(result.inferred.diets.contains("vegan"));
        assert!(result.inferred.allergens.contains("soy"));
        assert!(result.summary.starts_with("\"Rice Bowl\" · serves 2 · 2 ingredients."));
    }

    #[test]
    fn test_custom_converter_is_used() {
        struct Fixed;
        impl UnitConverter for Fixed {
            fn to_grams(&self, _: f64, _: &str, _: &str) -> f64 {
                100.0
            }
        }

        let pipeline = LocalPipeline::default().with_converter(Arc::new(Fixed));
        let result = pipeline.analyze("Toast\n1 slice bread");
        assert_eq!(result.nutrition_per_serving.get(Nutrient::Calories), 265.0);
    }
}

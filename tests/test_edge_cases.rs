use recipe_analyzer::{
    analyze_text, AnalyzeError, AnalyzerConfig, IngredientRecord, LocalPipeline, Nutrient,
    NutrientTotals, RecipeAnalyzer, ReferenceData,
};
use std::sync::Arc;

#[test]
fn test_empty_input_is_a_result() {
    for text in ["", "   ", "\n\r\n\t\n"] {
        let result = analyze_text(text);
        assert_eq!(result.title, "Untitled");
        assert_eq!(result.servings, 1);
        assert!(result.ingredients.is_empty());
        assert!(result.steps.is_empty());
        assert_eq!(result.nutrition_per_serving, NutrientTotals::zeroed());
        assert!(result.inferred.allergens.is_empty());
        assert!(result.inferred.diets.is_empty());
        assert!(result.inferred.cuisines.is_empty());
        assert!(result.inferred.taste.is_empty());
        assert!(result.suggestions.is_empty());
    }
}

#[test]
fn test_malformed_fraction_has_no_quantity() {
    let result = analyze_text("Syrup\nIngredients\n1/0 cup sugar");
    assert_eq!(result.ingredients.len(), 1);
    assert_eq!(result.ingredients[0].quantity, None);
    assert_eq!(result.ingredients[0].item, "1/0 cup sugar");
    assert_eq!(result.nutrition_per_serving.get(Nutrient::Calories), 0.0);
}

#[test]
fn test_unmatched_ingredient_contributes_nothing() {
    let result = analyze_text("Mystery\nIngredients\n100 g unobtainium\n100 g flour");
    assert_eq!(result.ingredients.len(), 2);
    assert_eq!(result.nutrition_per_serving.get(Nutrient::Calories), 364.0);
}

#[test]
fn test_servings_line_inside_ingredients() {
    let result = analyze_text("Cookies\nIngredients\n2 cups flour\nMakes 24\n1 cup sugar");
    assert_eq!(result.servings, 24);
    let items: Vec<&str> = result.ingredients.iter().map(|i| i.item.as_str()).collect();
    assert_eq!(items, vec!["flour", "sugar"]);
}

#[test]
fn test_nutrition_never_negative() {
    let result = analyze_text("Odd\n-5 g butter\n0 cups milk\n0.5 kg potatoes");
    for (_, value) in result.nutrition_per_serving.iter() {
        assert!(value >= 0.0);
    }
}

#[test]
fn test_unit_less_quantity_counts_as_grams() {
    // "2 eggs" is 2 g of egg
    let result = analyze_text("Eggs\n2 eggs");
    assert_eq!(result.nutrition_per_serving.get(Nutrient::Calories), 2.9);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_pipeline_across_tasks() {
    let pipeline = LocalPipeline::default();
    let text = "Stew\nServings: 3\n500 g ground beef\n2 potatoes\n1 l water";
    let expected = pipeline.analyze(text);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pipeline = pipeline.clone();
            tokio::spawn(async move { pipeline.analyze(text) })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_builder_without_source() {
    let result = RecipeAnalyzer::builder().local_only().build().await;
    assert!(matches!(result, Err(AnalyzeError::BuilderError(_))));
}

#[tokio::test]
async fn test_builder_uses_supplied_reference() {
    let reference = ReferenceData::builtin().with_knowledge_base(vec![IngredientRecord {
        name: "seitan".to_string(),
        aliases: vec![],
        nutrients_per_100g: [(Nutrient::Protein, 75.0)].into_iter().collect(),
    }]);

    let result = RecipeAnalyzer::builder()
        .text("Seitan Stir Fry\n100 g seitan\n100 g flour")
        .config(AnalyzerConfig::default())
        .reference(Arc::new(reference))
        .local_only()
        .build()
        .await
        .unwrap();

    assert_eq!(result.nutrition_per_serving.get(Nutrient::Protein), 75.0);
    // flour is not in the supplied knowledge base
    assert_eq!(result.nutrition_per_serving.get(Nutrient::Calories), 0.0);
}

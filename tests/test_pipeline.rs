use recipe_analyzer::ingredient_parser::parse_ingredient_line;
use recipe_analyzer::model::round_one_decimal;
use recipe_analyzer::summary::HIGH_CALORIE_WARNING;
use recipe_analyzer::{analyze_text, AnalyzerConfig, LocalPipeline, Nutrient, RecipeAnalyzer};

async fn analyze_ingredients(lines: &[&str]) -> recipe_analyzer::AnalyzeResult {
    RecipeAnalyzer::builder()
        .ingredients(lines.iter().copied())
        .config(AnalyzerConfig::default())
        .local_only()
        .build()
        .await
        .unwrap()
}

#[test]
fn test_calories_divided_by_servings() {
    // 100 g flour (364 kcal) + 50 g sugar (193.5 kcal)
    let total = 557.5;
    for servings in 1..=7u32 {
        let text = format!(
            "Sweet Dough\nServings: {}\nIngredients\n100 g flour\n50 g sugar",
            servings
        );
        let result = analyze_text(&text);
        assert_eq!(result.servings, servings);
        assert_eq!(
            result.nutrition_per_serving.get(Nutrient::Calories),
            round_one_decimal(total / f64::from(servings)),
            "servings = {}",
            servings
        );
    }
}

#[test]
fn test_servings_at_least_one() {
    assert_eq!(analyze_text("Soup\nserves 0\n1 cup water").servings, 1);
    assert_eq!(analyze_text("Soup\n1 cup water").servings, 1);
    assert_eq!(analyze_text("").servings, 1);
}

#[test]
fn test_makes_in_ingredient_and_step_keeps_servings() {
    let text = "Muffins\nServings: 12\nIngredients\n2 cups flour\n1 cup water (makes 2 cups batter)\nSteps\n1. Mix the batter\n2. Bake 20 minutes; this makes 3 trays\n3. Cool";
    let result = analyze_text(text);

    assert_eq!(result.servings, 12);
    let items: Vec<&str> = result.ingredients.iter().map(|i| i.item.as_str()).collect();
    assert_eq!(items, vec!["flour", "water (makes 2 cups batter)"]);
    assert_eq!(
        result.steps,
        vec!["Mix the batter", "Bake 20 minutes; this makes 3 trays", "Cool"]
    );
}

#[test]
fn test_idempotent() {
    let text = "Curry\nServings: 3\nIngredients\n1 cup lentils\n1 tbsp chili flakes\n200 ml coconut milk\n\nSteps\n1. Simmer";
    let pipeline = LocalPipeline::default();
    let first = serde_json::to_string(&pipeline.analyze(text)).unwrap();
    let second = serde_json::to_string(&pipeline.analyze(text)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_line_parsing() {
    let flour = parse_ingredient_line("2 cups flour");
    assert_eq!(flour.quantity, Some(2.0));
    assert_eq!(flour.unit.as_deref(), Some("cup"));
    assert_eq!(flour.item, "flour");

    let sugar = parse_ingredient_line("1 1/2 tbsp sugar");
    assert_eq!(sugar.quantity, Some(1.5));
    assert_eq!(sugar.unit.as_deref(), Some("tbsp"));
    assert_eq!(sugar.item, "sugar");

    let salt = parse_ingredient_line("a pinch of salt");
    assert_eq!(salt.quantity, None);
    assert_eq!(salt.unit, None);
    assert_eq!(salt.item, "a pinch of salt");
}

#[tokio::test]
async fn test_milk_and_flour_allergens() {
    let result = analyze_ingredients(&["2 cups milk", "1 cup flour"]).await;
    assert!(result.inferred.allergens.contains("milk"));
    assert!(result.inferred.allergens.contains("wheat"));
    assert!(!result.inferred.diets.contains("vegan"));
    assert!(!result.inferred.diets.contains("gluten_free"));
}

#[tokio::test]
async fn test_rice_and_beans_diets() {
    let result = analyze_ingredients(&["1 cup rice", "1 cup beans"]).await;
    for diet in ["vegan", "vegetarian", "gluten_free"] {
        assert!(result.inferred.diets.contains(diet), "missing {}", diet);
    }
    assert!(result.inferred.allergens.is_empty());
}

#[test]
fn test_high_calorie_suggestion() {
    // 250 g butter, one serving: 1792.5 kcal
    let heavy = analyze_text("Butter Block\nServings: 1\n250 g butter");
    assert!(heavy.nutrition_per_serving.get(Nutrient::Calories) > 800.0);
    assert!(heavy.suggestions.contains(&HIGH_CALORIE_WARNING.to_string()));

    let light = analyze_text("Flatbread\n100 g flour");
    assert_eq!(light.nutrition_per_serving.get(Nutrient::Calories), 364.0);
    assert!(!light.suggestions.contains(&HIGH_CALORIE_WARNING.to_string()));
}

#[test]
fn test_full_recipe() {
    let text = "\
Spicy Chicken Rice
Servings: 2

Ingredients:
- 300 g chicken breast
- 1 cup rice
- 1 tbsp soy sauce
- 1 chili

Instructions:
1. Cook the rice.
2. Fry the chicken with chili and soy sauce.
";
    let result = analyze_text(text);

    assert_eq!(result.title, "Spicy Chicken Rice");
    assert_eq!(result.servings, 2);
    assert_eq!(result.ingredients.len(), 4);
    assert_eq!(result.steps.len(), 2);
    assert!(result.inferred.allergens.contains("soy"));
    assert!(result.inferred.diets.contains("gluten_free"));
    assert!(!result.inferred.diets.contains("vegetarian"));
    assert!(result.inferred.taste.contains("spicy"));
    assert!(result.nutrition_per_serving.get(Nutrient::Protein) > 40.0);
    assert!(result
        .summary
        .starts_with("\"Spicy Chicken Rice\" · serves 2 · 4 ingredients."));
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.contains("spicy")));
}

use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

/// The parts of a schema.org Recipe the analyzer needs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedRecipe {
    pub name: String,
    pub servings: Option<u32>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl ExtractedRecipe {
    /// Renders the recipe in the plain text layout the segmenter reads.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push(self.name.clone());
        if let Some(servings) = self.servings {
            lines.push(format!("Servings: {}", servings));
        }
        lines.push(String::new());
        lines.push("Ingredients".to_string());
        lines.extend(self.ingredients.iter().cloned());
        lines.push(String::new());
        lines.push("Instructions".to_string());
        lines.extend(
            self.steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, step)),
        );
        lines.join("\n")
    }
}

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "recipeIngredient", alias = "ingredients", default)]
    recipe_ingredient: Option<RecipeIngredients>,
    #[serde(rename = "recipeInstructions", default)]
    recipe_instructions: Option<RecipeInstructions>,
    #[serde(rename = "recipeYield", alias = "yield", default)]
    recipe_yield: Option<RecipeYield>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeIngredients {
    Strings(Vec<String>),
    Single(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Items(Vec<InstructionItem>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstructionItem {
    Text(String),
    Nested(Vec<InstructionItem>),
    Section(HowToSection),
    Step(HowToStep),
}

#[derive(Debug, Deserialize)]
struct HowToSection {
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<InstructionItem>,
}

#[derive(Debug, Deserialize)]
struct HowToStep {
    text: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeYield {
    Number(f64),
    String(String),
    Array(Vec<RecipeYield>),
}

impl RecipeYield {
    fn servings(&self) -> Option<u32> {
        match self {
            RecipeYield::Number(n) if *n >= 1.0 => Some(n.round() as u32),
            RecipeYield::Number(_) => None,
            RecipeYield::String(s) => {
                let digits: String = s
                    .chars()
                    .skip_while(|c| !c.is_ascii_digit())
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse().ok().filter(|n| *n >= 1)
            }
            RecipeYield::Array(items) => items.iter().find_map(RecipeYield::servings),
        }
    }
}

impl InstructionItem {
    fn collect_steps(self, steps: &mut Vec<String>) {
        match self {
            InstructionItem::Text(text) => steps.extend(split_lines(&text)),
            InstructionItem::Step(step) => {
                if let Some(text) = step.text.or(step.name) {
                    steps.extend(split_lines(&text));
                }
            }
            InstructionItem::Section(section) => {
                for item in section.item_list_element {
                    item.collect_steps(steps);
                }
            }
            InstructionItem::Nested(items) => {
                for item in items {
                    item.collect_steps(steps);
                }
            }
        }
    }
}

/// Finds the first schema.org Recipe in the page's JSON-LD scripts.
pub fn extract_json_ld(html: &str) -> Option<ExtractedRecipe> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("script[type='application/ld+json']") else {
        return None;
    };

    for (index, script) in document.select(&selector).enumerate() {
        let raw_json = script.inner_html();
        let json_ld = match serde_json::from_str::<Value>(raw_json.trim()) {
            Ok(json_ld) => json_ld,
            Err(e) => {
                debug!("JSON-LD script {} is not valid JSON: {}", index, e);
                continue;
            }
        };

        let Some(recipe_json) = find_recipe(&json_ld) else {
            debug!("JSON-LD script {} has no Recipe", index);
            continue;
        };

        match serde_json::from_value::<JsonLdRecipe>(recipe_json.clone()) {
            Ok(recipe) => return Some(convert(recipe)),
            Err(e) => debug!("JSON-LD Recipe in script {} has an unexpected shape: {}", index, e),
        }
    }

    None
}

fn convert(recipe: JsonLdRecipe) -> ExtractedRecipe {
    let ingredients = match recipe.recipe_ingredient {
        Some(RecipeIngredients::Strings(items)) => items
            .iter()
            .map(|i| decode_html_symbols(i).trim().to_string())
            .filter(|i| !i.is_empty())
            .collect(),
        Some(RecipeIngredients::Single(text)) => split_lines(&text),
        None => Vec::new(),
    };

    let mut steps = Vec::new();
    match recipe.recipe_instructions {
        Some(RecipeInstructions::String(text)) => steps.extend(split_lines(&text)),
        Some(RecipeInstructions::Items(items)) => {
            for item in items {
                item.collect_steps(&mut steps);
            }
        }
        None => {}
    }

    ExtractedRecipe {
        name: recipe
            .name
            .map(|n| decode_html_symbols(&n).trim().to_string())
            .unwrap_or_default(),
        servings: recipe.recipe_yield.as_ref().and_then(RecipeYield::servings),
        ingredients,
        steps,
    }
}

fn find_recipe(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.iter().find_map(find_recipe),
        Value::Object(map) => {
            if is_recipe_type(value) {
                Some(value)
            } else {
                map.get("@graph").and_then(find_recipe)
            }
        }
        _ => None,
    }
}

fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(t)) => t.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

fn split_lines(text: &str) -> Vec<String> {
    decode_html_symbols(text)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn decode_html_symbols(text: &str) -> String {
    // some sites double-encode entities
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

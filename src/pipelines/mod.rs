pub mod local;
pub mod url;

/// Renders a bare ingredient list as recipe text under an `Ingredients`
/// header, e.g. for a product's label ingredients.
pub fn ingredient_list_text<S: AsRef<str>>(ingredients: &[S]) -> String {
    let mut text = String::from("Ingredients\n");
    for ingredient in ingredients {
        let ingredient = ingredient.as_ref().trim();
        if !ingredient.is_empty() {
            text.push_str("- ");
            text.push_str(ingredient);
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment_recipe;

    #[test]
    fn test_ingredient_list_text() {
        let text = ingredient_list_text(&["200g oats", " ", "1 tbsp honey"]);
        assert_eq!(text, "Ingredients\n- 200g oats\n- 1 tbsp honey\n");

        let recipe = segment_recipe(&text);
        assert_eq!(recipe.title, "Untitled");
        assert_eq!(recipe.ingredient_lines, vec!["200g oats", "1 tbsp honey"]);
    }
}

use std::collections::BTreeSet;

/// Allergen codes with the keywords that trigger them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllergenTable {
    entries: Vec<(String, Vec<String>)>,
}

impl AllergenTable {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

/// Returns every allergen with at least one keyword inside `text`.
///
/// `text` is expected to be the lowercased, concatenated ingredient names.
pub fn detect_allergens(text: &str, table: &AllergenTable) -> BTreeSet<String> {
    table
        .entries
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
        .map(|(code, _)| code.clone())
        .collect()
}

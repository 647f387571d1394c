use std::collections::BTreeSet;

/// Keyword to taste tags, e.g. `chili -> [spicy]`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TasteTable {
    entries: Vec<(String, Vec<String>)>,
}

impl TasteTable {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Unions the tags of every keyword found in any single ingredient name.
pub fn profile_taste<'a, I>(items: I, table: &TasteTable) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tags = BTreeSet::new();
    for item in items {
        let item = item.to_lowercase();
        for (keyword, keyword_tags) in &table.entries {
            if item.contains(keyword.as_str()) {
                tags.extend(keyword_tags.iter().cloned());
            }
        }
    }
    tags
}

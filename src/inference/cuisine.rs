use std::collections::BTreeSet;

/// Keywords typical for a cuisine and how many must appear
#[derive(Debug, Clone, PartialEq)]
pub struct CuisineRule {
    pub cuisine: String,
    pub keywords: Vec<String>,
    pub min_matches: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CuisineTable {
    rules: Vec<CuisineRule>,
}

impl CuisineTable {
    pub fn new(rules: Vec<CuisineRule>) -> Self {
        Self { rules }
    }
}

/// Includes a cuisine when enough of its distinct keywords occur in `text`.
pub fn infer_cuisines(text: &str, table: &CuisineTable) -> BTreeSet<String> {
    table
        .rules
        .iter()
        .filter(|rule| {
            let hits = rule
                .keywords
                .iter()
                .filter(|k| text.contains(k.as_str()))
                .count();
            hits >= rule.min_matches.max(1)
        })
        .map(|rule| rule.cuisine.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::builtin;

    #[test]
    fn test_italian() {
        let found = infer_cuisines("spaghetti tomato basil parmesan", &builtin::cuisine_table());
        assert!(found.contains("italian"));
    }

    #[test]
    fn test_single_keyword_is_not_enough() {
        let found = infer_cuisines("tomato rice", &builtin::cuisine_table());
        assert!(!found.contains("italian"));
    }

    #[test]
    fn test_zero_min_matches_still_needs_one_hit() {
        let table = CuisineTable::new(vec![CuisineRule {
            cuisine: "nordic".to_string(),
            keywords: vec!["dill".to_string()],
            min_matches: 0,
        }]);
        assert!(infer_cuisines("rice", &table).is_empty());
        assert!(infer_cuisines("fresh dill", &table).contains("nordic"));
    }
}

use std::collections::BTreeSet;

/// A diet that holds unless one of its excluding keywords appears
#[derive(Debug, Clone, PartialEq)]
pub struct DietRule {
    pub code: String,
    pub excluded_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DietRules {
    rules: Vec<DietRule>,
}

impl DietRules {
    pub fn new(rules: Vec<DietRule>) -> Self {
        Self { rules }
    }

    pub fn rule(&self, code: &str) -> Option<&DietRule> {
        self.rules.iter().find(|r| r.code == code)
    }
}

/// Each rule is evaluated on its own; any combination of diets may hold.
pub fn infer_diets(text: &str, rules: &DietRules) -> BTreeSet<String> {
    rules
        .rules
        .iter()
        .filter(|rule| !rule.excluded_by.iter().any(|k| text.contains(k.as_str())))
        .map(|rule| rule.code.clone())
        .collect()
}

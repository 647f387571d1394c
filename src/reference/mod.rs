//! Read-only reference data shared by every analysis.

mod adapter;
pub mod builtin;

pub use adapter::{nutrient_from_key, parse_knowledge_base, parse_taste_table};

use crate::config::ReferenceConfig;
use crate::error::AnalyzeError;
use crate::inference::{AllergenTable, CuisineTable, DietRules, TasteTable};
use crate::model::IngredientRecord;
use log::info;
use std::path::Path;

/// Ingredient records in lookup order, with lowercased names cached
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    records: Vec<IngredientRecord>,
    names: Vec<String>,
    aliases: Vec<Vec<String>>,
}

impl KnowledgeBase {
    pub fn new(records: Vec<IngredientRecord>) -> Self {
        let names = records.iter().map(|r| r.name.to_lowercase()).collect();
        let aliases = records
            .iter()
            .map(|r| r.aliases.iter().map(|a| a.to_lowercase()).collect())
            .collect();
        Self {
            records,
            names,
            aliases,
        }
    }

    pub fn records(&self) -> &[IngredientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(record, lowercased name, lowercased aliases)` in knowledge base order
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&IngredientRecord, &str, &[String])> {
        self.records
            .iter()
            .zip(self.names.iter())
            .zip(self.aliases.iter())
            .map(|((record, name), aliases)| (record, name.as_str(), aliases.as_slice()))
    }
}

/// Every table the pipeline consults
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub knowledge_base: KnowledgeBase,
    pub allergens: AllergenTable,
    pub diets: DietRules,
    pub cuisines: CuisineTable,
    pub taste: TasteTable,
}

impl ReferenceData {
    /// Tables compiled into the crate
    pub fn builtin() -> Self {
        Self {
            knowledge_base: KnowledgeBase::new(builtin::knowledge_base()),
            allergens: builtin::allergen_table(),
            diets: builtin::diet_rules(),
            cuisines: builtin::cuisine_table(),
            taste: builtin::taste_table(),
        }
    }

    /// Built-in tables, with the knowledge base and taste table replaced by
    /// the configured files when present
    pub fn load(config: &ReferenceConfig) -> Result<Self, AnalyzeError> {
        let mut data = Self::builtin();

        if let Some(path) = &config.knowledge_base {
            let records = parse_knowledge_base(&read_file(path)?)?;
            info!("Loaded {} ingredient records from {}", records.len(), path.display());
            data.knowledge_base = KnowledgeBase::new(records);
        }

        if let Some(path) = &config.taste_table {
            data.taste = parse_taste_table(&read_file(path)?)?;
            info!("Loaded {} taste keywords from {}", data.taste.len(), path.display());
        }

        Ok(data)
    }

    pub fn with_knowledge_base(mut self, records: Vec<IngredientRecord>) -> Self {
        self.knowledge_base = KnowledgeBase::new(records);
        self
    }

    pub fn with_taste_table(mut self, taste: TasteTable) -> Self {
        self.taste = taste;
        self
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_file(path: &Path) -> Result<String, AnalyzeError> {
    std::fs::read_to_string(path).map_err(|source| AnalyzeError::ReferenceIo {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_without_files_is_builtin() {
        let data = ReferenceData::load(&ReferenceConfig::default()).unwrap();
        assert_eq!(data.knowledge_base.len(), builtin::knowledge_base().len());
    }

    #[test]
    fn test_load_from_files() {
        let dir = std::env::temp_dir().join(format!("recipe-analyzer-ref-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let kb_path = dir.join("kb.json");
        let taste_path = dir.join("taste.json");
        std::fs::write(&kb_path, r#"[{"name": "seitan", "nutrients": {"protein": 75}}]"#).unwrap();
        std::fs::write(&taste_path, r#"{"harissa": ["spicy"]}"#).unwrap();

        let config = ReferenceConfig {
            knowledge_base: Some(kb_path),
            taste_table: Some(taste_path),
        };
        let data = ReferenceData::load(&config).unwrap();
        assert_eq!(data.knowledge_base.len(), 1);
        assert_eq!(data.knowledge_base.records()[0].name, "seitan");
        assert_eq!(data.taste.len(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_reported() {
        let config = ReferenceConfig {
            knowledge_base: Some(PathBuf::from("/nonexistent/kb.json")),
            taste_table: None,
        };
        let err = ReferenceData::load(&config).unwrap_err();
        assert!(matches!(err, AnalyzeError::ReferenceIo { .. }));
    }
}

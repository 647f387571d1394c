use crate::model::IngredientRecord;
use crate::reference::KnowledgeBase;

/// Finds the knowledge base record for an item name.
///
/// Tried in order, case-insensitively, each over the whole knowledge base:
/// exact name, name and query containing one another, alias contained in
/// the query. The first record in knowledge base order wins within a tier.
/// Ambiguous names are not disambiguated.
///
/// This differs from a single first-record-wins pass: with `butter` listed
/// before `peanut butter`, the query "peanut butter" still resolves to
/// `peanut butter` because its exact match outranks the containment match.
pub fn match_ingredient<'a>(item: &str, knowledge_base: &'a KnowledgeBase) -> Option<&'a IngredientRecord> {
    let query = item.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    knowledge_base
        .entries()
        .find(|(_, name, _)| *name == query)
        .or_else(|| {
            knowledge_base.entries().find(|(_, name, _)| {
                !name.is_empty() && (query.contains(*name) || name.contains(query.as_str()))
            })
        })
        .or_else(|| {
            knowledge_base.entries().find(|(_, _, aliases)| {
                aliases
                    .iter()
                    .any(|alias| !alias.is_empty() && query.contains(alias.as_str()))
            })
        })
        .map(|(record, _, _)| record)
}

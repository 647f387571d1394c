//! Turning recipe web pages into plain recipe text.

mod fetcher;
mod json_ld;

pub use fetcher::RequestFetcher;
pub use json_ld::{extract_json_ld, ExtractedRecipe};

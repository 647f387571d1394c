use crate::error::AnalyzeError;
use crate::url_to_text::{extract_json_ld, RequestFetcher};
use log::{debug, info};
use scraper::{Html, Selector};
use std::time::Duration;

/// Fetches a recipe page and turns it into recipe text
///
/// This pipeline:
/// 1. Fetches HTML using RequestFetcher
/// 2. Renders the page's schema.org Recipe JSON-LD, if any
/// 3. Falls back to the visible body text, one line per text block
pub async fn process(url: &str, timeout: Option<Duration>) -> Result<String, AnalyzeError> {
    let fetcher = RequestFetcher::new(timeout)?;
    let html = fetcher.fetch(url).await?;

    if let Some(recipe) = extract_json_ld(&html) {
        info!("Found JSON-LD recipe '{}' at {}", recipe.name, url);
        return Ok(recipe.to_text());
    }

    debug!("No JSON-LD recipe at {}, using page text", url);
    let text = extract_text_from_html(&html);
    if text.trim().is_empty() {
        return Err(AnalyzeError::NoRecipeText(url.to_string()));
    }
    Ok(text)
}

/// Visible text of the `<body>`, skipping scripts and styles
fn extract_text_from_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };

    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };

    body.descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|p| p.value().as_element())
                .is_some_and(|e| matches!(e.name(), "script" | "style" | "noscript"));
            (!hidden).then(|| text.trim())
        })
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

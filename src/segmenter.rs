//! Splits raw recipe text into title, servings, ingredient lines and steps.

use crate::model::ParsedRecipe;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Unknown,
    Ingredients,
    Steps,
}

const SERVINGS_KEYWORDS: &[&str] = &["servings", "serves", "makes"];
const INGREDIENT_HEADERS: &[&str] = &["ingredients"];
const STEP_HEADERS: &[&str] = &["instructions", "steps", "directions", "method"];
const MEASUREMENT_WORDS: &[&str] = &[
    "cup", "cups", "tsp", "tbsp", "oz", "lb", "lbs", "g", "kg", "ml", "l",
];
const BULLETS: &[char] = &['-', '*', '•'];

/// Segments recipe text line by line.
///
/// The first non-empty line is the title. `Ingredients` and
/// `Instructions`/`Steps` headers switch sections; outside the ingredients
/// section, lines that look like ingredients (leading digit, measurement
/// word, bullet) are still captured, and numbered lines start the steps.
/// A line that is a servings statement (`Serves 4`) is consumed in any
/// section.
pub fn segment_recipe(text: &str) -> ParsedRecipe {
    let mut recipe = ParsedRecipe::default();
    let mut title: Option<String> = None;
    let mut section = Section::Title;

    for raw in text.split('\n') {
        let line = raw.trim_end_matches('\r').trim();

        if let Some(servings) = servings_count(line) {
            recipe.servings = servings.max(1);
            continue;
        }

        if let Some(header) = header_section(line) {
            section = header;
            continue;
        }

        if section == Section::Title {
            if title.is_none() {
                if !line.is_empty() {
                    title = Some(line.trim_start_matches('#').trim().to_string());
                }
                continue;
            }
            section = Section::Unknown;
        }

        if line.is_empty() {
            continue;
        }

        if section == Section::Steps {
            push_non_empty(
                &mut recipe.step_lines,
                strip_step_number(line).unwrap_or_else(|| strip_bullet(line)),
            );
        } else if let Some(step) = strip_step_number(line) {
            section = Section::Steps;
            push_non_empty(&mut recipe.step_lines, step);
        } else if section == Section::Ingredients || looks_like_ingredient(line) {
            push_non_empty(&mut recipe.ingredient_lines, strip_bullet(line));
        } else {
            debug!("Discarding unclassified line: {}", line);
        }
    }

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        recipe.title = title;
    }
    recipe
}

fn push_non_empty(lines: &mut Vec<String>, line: &str) {
    if !line.is_empty() {
        lines.push(line.to_string());
    }
}

/// Words allowed after the count, e.g. `Makes 12 muffins`
const MAX_TRAILING_WORDS: usize = 2;

/// A line that states the servings: `Servings: 4`, `serves 4 people`,
/// `- Makes 12 muffins`. The keyword must open the line; a sentence that
/// merely mentions "makes 2" is not a servings statement.
fn servings_count(line: &str) -> Option<u32> {
    let lower = line
        .trim_start_matches(|c: char| c == '#' || BULLETS.contains(&c))
        .trim()
        .to_lowercase();

    let rest = SERVINGS_KEYWORDS
        .iter()
        .find_map(|keyword| lower.strip_prefix(keyword))?;
    if rest.starts_with(char::is_alphanumeric) {
        return None;
    }

    let rest = rest.trim_start();
    let rest = rest.strip_prefix(':').unwrap_or(rest).trim_start();
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let trailing = rest[digits..].trim().trim_end_matches('.');
    let is_statement = trailing.is_empty()
        || (trailing.split_whitespace().count() <= MAX_TRAILING_WORDS
            && trailing.chars().all(|c| c.is_alphabetic() || c.is_whitespace()));
    if !is_statement {
        return None;
    }
    rest[..digits].parse().ok()
}

fn header_section(line: &str) -> Option<Section> {
    let header = line.trim_start_matches('#').trim();
    let header = header.strip_suffix(':').unwrap_or(header).trim().to_lowercase();

    if INGREDIENT_HEADERS.contains(&header.as_str()) {
        Some(Section::Ingredients)
    } else if STEP_HEADERS.contains(&header.as_str()) {
        Some(Section::Steps)
    } else {
        None
    }
}

fn looks_like_ingredient(line: &str) -> bool {
    let starts_with_amount = line
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || crate::ingredient_parser::vulgar_fraction(c).is_some());
    if starts_with_amount || line.starts_with(BULLETS) {
        return true;
    }

    line.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| MEASUREMENT_WORDS.contains(&word))
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(BULLETS).trim()
}

/// `1. Mix` or `2) Bake` without the number
fn strip_step_number(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

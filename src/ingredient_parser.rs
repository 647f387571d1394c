//! Parses a single ingredient line into quantity, unit and item name.
//!
//! ## Supported quantities
//!
//! - Decimals: "2", "1.5", ".5"
//! - Fractions: "3/4", "½"
//! - Mixed numbers: "1 1/2", "1 ½", "1½"
//! - Attached units: "200g", "1.5kg"
//!
//! A line without a readable quantity keeps its full text as the item name.

use crate::model::ParsedIngredientLine;

/// Parses `[quantity] [unit] item`.
pub fn parse_ingredient_line(line: &str) -> ParsedIngredientLine {
    let line = line.trim();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some(quantity) = parse_quantity(&tokens) else {
        return ParsedIngredientLine::item_only(line);
    };

    let mut rest = &tokens[quantity.consumed..];
    let mut unit = quantity.attached_unit;

    if unit.is_none() {
        if let Some((found, used)) = unit_at_start(rest) {
            unit = Some(found);
            rest = &rest[used..];
        }
    }

    if unit.is_some() && rest.first().is_some_and(|t| t.eq_ignore_ascii_case("of")) {
        rest = &rest[1..];
    }

    ParsedIngredientLine {
        quantity: Some(quantity.value),
        unit: unit.map(str::to_string),
        item: rest.join(" "),
    }
}

struct Quantity {
    value: f64,
    consumed: usize,
    attached_unit: Option<&'static str>,
}

enum Fraction {
    Valid(f64),
    /// Shaped like `n/d` but not usable, e.g. a zero denominator
    Malformed,
    NotAFraction,
}

fn parse_quantity(tokens: &[&str]) -> Option<Quantity> {
    let first = *tokens.first()?;

    match fraction(first) {
        Fraction::Valid(value) => {
            return Some(Quantity {
                value,
                consumed: 1,
                attached_unit: None,
            })
        }
        Fraction::Malformed => return None,
        Fraction::NotAFraction => {}
    }

    let split = first
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(first.len());
    let (number, suffix) = first.split_at(split);
    let whole = decimal(number)?;

    if suffix.is_empty() {
        // Mixed number: "1 1/2"
        if let Some(next) = tokens.get(1) {
            match fraction(next) {
                Fraction::Valid(part) if is_integer(number) => {
                    return Some(Quantity {
                        value: whole + part,
                        consumed: 2,
                        attached_unit: None,
                    })
                }
                Fraction::Malformed => return None,
                _ => {}
            }
        }
        return Some(Quantity {
            value: whole,
            consumed: 1,
            attached_unit: None,
        });
    }

    // "1½"
    if is_integer(number) {
        if let Fraction::Valid(part) = fraction(suffix) {
            return Some(Quantity {
                value: whole + part,
                consumed: 1,
                attached_unit: None,
            });
        }
    }

    // "200g"
    let unit = normalize_unit(suffix)?;
    Some(Quantity {
        value: whole,
        consumed: 1,
        attached_unit: Some(unit),
    })
}

fn fraction(token: &str) -> Fraction {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(value) = vulgar_fraction(c) {
            return Fraction::Valid(value);
        }
    }

    let Some((numerator, denominator)) = token.split_once('/') else {
        return Fraction::NotAFraction;
    };
    if !is_integer(numerator) || !is_integer(denominator) {
        return Fraction::NotAFraction;
    }

    match (numerator.parse::<f64>(), denominator.parse::<f64>()) {
        (Ok(n), Ok(d)) if d != 0.0 => Fraction::Valid(n / d),
        _ => Fraction::Malformed,
    }
}

/// Value of a single unicode vulgar fraction character
pub fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '½' => 0.5,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 0.25,
        '¾' => 0.75,
        '⅛' => 0.125,
        '⅜' => 0.375,
        '⅝' => 0.625,
        '⅞' => 0.875,
        _ => return None,
    };
    Some(value)
}

fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn decimal(s: &str) -> Option<f64> {
    let digits = s.bytes().filter(|b| b.is_ascii_digit()).count();
    let dots = s.bytes().filter(|b| *b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != s.len() {
        return None;
    }
    s.parse().ok()
}

/// Unit at the start of `tokens` and how many tokens it spans
fn unit_at_start(tokens: &[&str]) -> Option<(&'static str, usize)> {
    let first = tokens.first()?;
    if first.eq_ignore_ascii_case("fl") || first.eq_ignore_ascii_case("fl.") {
        if let Some("oz") = tokens.get(1).and_then(|t| normalize_unit(t)) {
            return Some(("fl oz", 2));
        }
    }
    normalize_unit(first).map(|unit| (unit, 1))
}

/// Maps a unit spelling to its lowercase short form
pub fn normalize_unit(token: &str) -> Option<&'static str> {
    let token = token.trim_end_matches('.').to_lowercase();
    let unit = match token.as_str() {
        "cup" | "cups" => "cup",
        "tbsp" | "tbsps" | "tbs" | "tablespoon" | "tablespoons" => "tbsp",
        "tsp" | "tsps" | "teaspoon" | "teaspoons" => "tsp",
        "g" | "gr" | "gram" | "grams" => "g",
        "kg" | "kgs" | "kilogram" | "kilograms" => "kg",
        "mg" | "milligram" | "milligrams" => "mg",
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => "ml",
        "l" | "liter" | "liters" | "litre" | "litres" => "l",
        "oz" | "ounce" | "ounces" => "oz",
        "lb" | "lbs" | "pound" | "pounds" => "lb",
        _ => return None,
    };
    Some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(quantity: Option<f64>, unit: Option<&str>, item: &str) -> ParsedIngredientLine {
        ParsedIngredientLine {
            quantity,
            unit: unit.map(str::to_string),
            item: item.to_string(),
        }
    }

    #[test]
    fn test_quantity_unit_item() {
        assert_eq!(
            parse_ingredient_line("2 cups flour"),
            parsed(Some(2.0), Some("cup"), "flour")
        );
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(
            parse_ingredient_line("1 1/2 tbsp sugar"),
            parsed(Some(1.5), Some("tbsp"), "sugar")
        );
        assert_eq!(
            parse_ingredient_line("2 ½ cups milk"),
            parsed(Some(2.5), Some("cup"), "milk")
        );
        assert_eq!(
            parse_ingredient_line("1½ tsp salt"),
            parsed(Some(1.5), Some("tsp"), "salt")
        );
    }

    #[test]
    fn test_simple_fraction() {
        assert_eq!(
            parse_ingredient_line("3/4 cup Butter"),
            parsed(Some(0.75), Some("cup"), "Butter")
        );
        assert_eq!(parse_ingredient_line("¼ onion"), parsed(Some(0.25), None, "onion"));
    }

    #[test]
    fn test_no_quantity_keeps_full_line() {
        assert_eq!(
            parse_ingredient_line("a pinch of salt"),
            parsed(None, None, "a pinch of salt")
        );
        assert_eq!(
            parse_ingredient_line("  salt to taste "),
            parsed(None, None, "salt to taste")
        );
    }

    #[test]
    fn test_zero_denominator_is_unparseable() {
        assert_eq!(
            parse_ingredient_line("1/0 cup sugar"),
            parsed(None, None, "1/0 cup sugar")
        );
        assert_eq!(
            parse_ingredient_line("1 3/0 cup sugar"),
            parsed(None, None, "1 3/0 cup sugar")
        );
    }

    #[test]
    fn test_count_without_unit() {
        assert_eq!(parse_ingredient_line("2 eggs"), parsed(Some(2.0), None, "eggs"));
    }

    #[test]
    fn test_attached_unit() {
        assert_eq!(
            parse_ingredient_line("200g dark chocolate"),
            parsed(Some(200.0), Some("g"), "dark chocolate")
        );
        assert_eq!(
            parse_ingredient_line("1.5KG potatoes"),
            parsed(Some(1.5), Some("kg"), "potatoes")
        );
    }

    #[test]
    fn test_unknown_suffix_is_unparseable() {
        assert_eq!(
            parse_ingredient_line("2-3 cloves garlic"),
            parsed(None, None, "2-3 cloves garlic")
        );
    }

    #[test]
    fn test_long_unit_names_and_of() {
        assert_eq!(
            parse_ingredient_line("2 Tablespoons of olive oil"),
            parsed(Some(2.0), Some("tbsp"), "olive oil")
        );
        assert_eq!(
            parse_ingredient_line("1 lbs. ground beef"),
            parsed(Some(1.0), Some("lb"), "ground beef")
        );
        assert_eq!(
            parse_ingredient_line("8 fl oz cream"),
            parsed(Some(8.0), Some("fl oz"), "cream")
        );
    }

    #[test]
    fn test_decimal() {
        assert_eq!(
            parse_ingredient_line("0.5 l milk"),
            parsed(Some(0.5), Some("l"), "milk")
        );
        assert_eq!(decimal("1.2.3"), None);
        assert_eq!(decimal("."), None);
        assert_eq!(decimal(".5"), Some(0.5));
    }

    #[test]
    fn test_quantity_only() {
        assert_eq!(parse_ingredient_line("3 cups"), parsed(Some(3.0), Some("cup"), ""));
    }
}

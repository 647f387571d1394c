//! Reference tables compiled into the crate.

use crate::inference::{AllergenTable, CuisineRule, CuisineTable, DietRule, DietRules, TasteTable};
use crate::model::{IngredientRecord, Nutrient};

// Per 100 g: calories, protein g, carbs g, fat g, sodium mg, sugars g, fiber g,
// potassium mg, iron mg, calcium mg, vitamin D µg
type Per100g = [f64; 11];

const INGREDIENTS: &[(&str, &[&str], Per100g)] = &[
    ("flour", &["all-purpose flour", "plain flour", "wheat flour"], [364.0, 10.3, 76.3, 1.0, 2.0, 0.3, 2.7, 107.0, 4.6, 15.0, 0.0]),
    ("sugar", &["granulated sugar", "white sugar", "caster sugar"], [387.0, 0.0, 100.0, 0.0, 1.0, 100.0, 0.0, 2.0, 0.1, 1.0, 0.0]),
    ("brown sugar", &[], [380.0, 0.1, 98.1, 0.0, 28.0, 97.0, 0.0, 133.0, 0.7, 83.0, 0.0]),
    ("butter", &["unsalted butter", "salted butter"], [717.0, 0.9, 0.1, 81.1, 11.0, 0.1, 0.0, 24.0, 0.0, 24.0, 1.5]),
    ("milk", &["whole milk", "skim milk"], [61.0, 3.2, 4.8, 3.3, 43.0, 5.1, 0.0, 132.0, 0.0, 113.0, 1.3]),
    ("egg", &["eggs", "large egg"], [143.0, 12.6, 0.7, 9.5, 142.0, 0.4, 0.0, 138.0, 1.8, 56.0, 2.0]),
    ("rice", &["white rice", "basmati", "jasmine"], [365.0, 7.1, 80.0, 0.7, 5.0, 0.1, 1.3, 115.0, 0.8, 28.0, 0.0]),
    ("beans", &["black beans", "kidney beans", "pinto beans"], [127.0, 8.7, 22.8, 0.5, 1.0, 0.3, 6.4, 405.0, 2.2, 35.0, 0.0]),
    ("chicken breast", &["chicken"], [165.0, 31.0, 0.0, 3.6, 74.0, 0.0, 0.0, 256.0, 1.0, 15.0, 0.1]),
    ("ground beef", &["beef", "minced beef"], [254.0, 17.2, 0.0, 20.0, 66.0, 0.0, 0.0, 270.0, 1.9, 18.0, 0.1]),
    ("salmon", &[], [208.0, 20.0, 0.0, 13.4, 59.0, 0.0, 0.0, 363.0, 0.3, 9.0, 11.0]),
    ("shrimp", &["prawn"], [99.0, 24.0, 0.2, 0.3, 111.0, 0.0, 0.0, 259.0, 0.5, 70.0, 0.0]),
    ("olive oil", &["oil"], [884.0, 0.0, 0.0, 100.0, 2.0, 0.0, 0.0, 1.0, 0.6, 1.0, 0.0]),
    ("salt", &["sea salt", "kosher salt"], [0.0, 0.0, 0.0, 0.0, 38758.0, 0.0, 0.0, 8.0, 0.3, 24.0, 0.0]),
    ("tomato", &["tomatoes"], [18.0, 0.9, 3.9, 0.2, 5.0, 2.6, 1.2, 237.0, 0.3, 10.0, 0.0]),
    ("onion", &["shallot"], [40.0, 1.1, 9.3, 0.1, 4.0, 4.2, 1.7, 146.0, 0.2, 23.0, 0.0]),
    ("garlic", &[], [149.0, 6.4, 33.1, 0.5, 17.0, 1.0, 2.1, 401.0, 1.7, 181.0, 0.0]),
    ("cheddar cheese", &["cheddar", "cheese"], [403.0, 24.9, 1.3, 33.1, 621.0, 0.5, 0.0, 98.0, 0.7, 721.0, 0.6]),
    ("parmesan", &["parmigiano"], [431.0, 38.0, 4.1, 29.0, 1529.0, 0.9, 0.0, 92.0, 0.8, 1184.0, 0.5]),
    ("pasta", &["spaghetti", "penne", "macaroni", "noodles"], [371.0, 13.0, 74.7, 1.5, 6.0, 2.7, 3.2, 223.0, 3.3, 21.0, 0.0]),
    ("bread", &["sourdough", "baguette"], [265.0, 9.0, 49.0, 3.2, 491.0, 5.0, 2.7, 115.0, 3.6, 260.0, 0.0]),
    ("potato", &["potatoes"], [77.0, 2.0, 17.0, 0.1, 6.0, 0.8, 2.2, 425.0, 0.8, 12.0, 0.0]),
    ("carrot", &[], [41.0, 0.9, 9.6, 0.2, 69.0, 4.7, 2.8, 320.0, 0.3, 33.0, 0.0]),
    ("spinach", &[], [23.0, 2.9, 3.6, 0.4, 79.0, 0.4, 2.2, 558.0, 2.7, 99.0, 0.0]),
    ("tofu", &[], [76.0, 8.0, 1.9, 4.8, 7.0, 0.6, 0.3, 121.0, 5.4, 350.0, 0.0]),
    ("honey", &[], [304.0, 0.3, 82.4, 0.0, 4.0, 82.1, 0.2, 52.0, 0.4, 6.0, 0.0]),
    ("yogurt", &["yoghurt"], [59.0, 10.0, 3.6, 0.4, 36.0, 3.2, 0.0, 141.0, 0.1, 110.0, 0.0]),
    ("heavy cream", &["cream"], [340.0, 2.8, 2.7, 36.0, 27.0, 2.9, 0.0, 95.0, 0.0, 66.0, 1.6]),
    ("soy sauce", &["tamari", "shoyu"], [53.0, 8.1, 4.9, 0.6, 5493.0, 0.4, 0.8, 435.0, 1.5, 33.0, 0.0]),
    ("peanut butter", &[], [588.0, 25.1, 20.0, 50.4, 459.0, 9.2, 6.0, 649.0, 1.9, 43.0, 0.0]),
    ("lentils", &["lentil"], [116.0, 9.0, 20.1, 0.4, 2.0, 1.8, 7.9, 369.0, 3.3, 19.0, 0.0]),
    ("chickpeas", &["chickpea", "garbanzo"], [164.0, 8.9, 27.4, 2.6, 7.0, 4.8, 7.6, 291.0, 2.9, 49.0, 0.0]),
    ("banana", &[], [89.0, 1.1, 22.8, 0.3, 1.0, 12.2, 2.6, 358.0, 0.3, 5.0, 0.0]),
    ("apple", &[], [52.0, 0.3, 13.8, 0.2, 1.0, 10.4, 2.4, 107.0, 0.1, 6.0, 0.0]),
    ("chocolate chips", &["chocolate"], [546.0, 4.9, 61.0, 31.0, 24.0, 48.0, 7.0, 559.0, 8.0, 73.0, 0.0]),
    ("coconut milk", &[], [230.0, 2.3, 6.0, 23.8, 15.0, 3.3, 2.2, 263.0, 1.6, 16.0, 0.0]),
    ("avocado", &[], [160.0, 2.0, 8.5, 14.7, 7.0, 0.7, 6.7, 485.0, 0.6, 12.0, 0.0]),
    ("bell pepper", &["red pepper", "green pepper"], [31.0, 1.0, 6.0, 0.3, 4.0, 4.2, 2.1, 211.0, 0.4, 7.0, 0.0]),
    ("mushroom", &[], [22.0, 3.1, 3.3, 0.3, 5.0, 2.0, 1.0, 318.0, 0.5, 3.0, 0.2]),
    ("oats", &["rolled oats", "oatmeal"], [389.0, 16.9, 66.3, 6.9, 2.0, 0.0, 10.6, 429.0, 4.7, 54.0, 0.0]),
    ("water", &[], [0.0; 11]),
];

pub fn knowledge_base() -> Vec<IngredientRecord> {
    INGREDIENTS
        .iter()
        .map(|(name, aliases, values)| IngredientRecord {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            nutrients_per_100g: Nutrient::ALL.iter().copied().zip(values.iter().copied()).collect(),
        })
        .collect()
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn keyword_table(entries: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    entries
        .iter()
        .map(|(key, values)| (key.to_string(), strings(values)))
        .collect()
}

pub fn allergen_table() -> AllergenTable {
    AllergenTable::new(keyword_table(&[
        ("milk", &["milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "dairy", "parmesan", "mozzarella", "ghee", "whey"]),
        ("egg", &["egg", "mayonnaise", "meringue"]),
        ("fish", &["fish", "salmon", "tuna", "anchov", "sardine", "trout", "halibut"]),
        ("crustacean_shellfish", &["shrimp", "prawn", "crab", "lobster", "crayfish", "langoustine"]),
        ("tree_nuts", &["almond", "walnut", "pecan", "cashew", "pistachio", "hazelnut", "macadamia"]),
        ("peanuts", &["peanut"]),
        ("wheat", &["wheat", "flour", "bread", "pasta", "spaghetti", "noodle", "semolina", "couscous", "breadcrumb", "cracker"]),
        ("soy", &["soy", "tofu", "edamame", "tempeh", "miso", "tamari"]),
        ("sesame", &["sesame", "tahini"]),
    ]))
}

const MEAT_AND_FISH: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "bacon", "sausage", "turkey", "duck", "veal", "meat",
    "prosciutto", "pancetta", "chorizo", "salami", "pepperoni", "gelatin", "fish", "salmon",
    "tuna", "anchov", "shrimp", "prawn", "crab", "lobster",
];

const ANIMAL_PRODUCTS: &[&str] = &[
    "milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "parmesan", "mozzarella", "ghee",
    "whey", "egg", "mayonnaise", "honey",
];

const GLUTEN: &[&str] = &[
    "wheat", "flour", "bread", "pasta", "spaghetti", "noodle", "barley", "rye", "semolina",
    "couscous", "seitan", "malt", "gluten", "cracker",
];

pub fn diet_rules() -> DietRules {
    let mut vegan = strings(MEAT_AND_FISH);
    vegan.extend(strings(ANIMAL_PRODUCTS));

    DietRules::new(vec![
        DietRule {
            code: "vegan".to_string(),
            excluded_by: vegan,
        },
        DietRule {
            code: "vegetarian".to_string(),
            excluded_by: strings(MEAT_AND_FISH),
        },
        DietRule {
            code: "gluten_free".to_string(),
            excluded_by: strings(GLUTEN),
        },
    ])
}

pub fn cuisine_table() -> CuisineTable {
    let rule = |cuisine: &str, keywords: &[&str]| CuisineRule {
        cuisine: cuisine.to_string(),
        keywords: strings(keywords),
        min_matches: 2,
    };

    CuisineTable::new(vec![
        rule("italian", &["pasta", "spaghetti", "parmesan", "mozzarella", "basil", "oregano", "tomato", "olive oil", "prosciutto", "risotto"]),
        rule("mexican", &["tortilla", "jalapeno", "cumin", "salsa", "cilantro", "black beans", "avocado", "chipotle", "lime"]),
        rule("indian", &["garam masala", "turmeric", "cumin", "ghee", "paneer", "cardamom", "curry", "lentil", "basmati"]),
        rule("japanese", &["miso", "soy sauce", "mirin", "nori", "sake", "wasabi", "dashi", "sushi rice"]),
        rule("chinese", &["soy sauce", "ginger", "sesame oil", "hoisin", "five spice", "bok choy", "rice vinegar", "scallion"]),
        rule("thai", &["fish sauce", "lemongrass", "coconut milk", "thai basil", "galangal", "lime", "kaffir"]),
    ])
}

pub fn taste_table() -> TasteTable {
    TasteTable::new(keyword_table(&[
        ("chili", &["spicy"]),
        ("chilli", &["spicy"]),
        ("jalapeno", &["spicy"]),
        ("cayenne", &["spicy"]),
        ("sriracha", &["spicy"]),
        ("habanero", &["spicy"]),
        ("chipotle", &["spicy", "smoky"]),
        ("gochujang", &["spicy", "umami"]),
        ("wasabi", &["spicy"]),
        ("yogurt", &["cooling", "tangy"]),
        ("cucumber", &["cooling", "fresh"]),
        ("mint", &["cooling", "fresh"]),
        ("coconut milk", &["cooling", "creamy"]),
        ("lemon", &["sour", "fresh"]),
        ("lime", &["sour", "fresh"]),
        ("vinegar", &["sour"]),
        ("sugar", &["sweet"]),
        ("honey", &["sweet"]),
        ("syrup", &["sweet"]),
        ("chocolate", &["sweet", "bitter"]),
        ("cocoa", &["bitter"]),
        ("coffee", &["bitter"]),
        ("salt", &["salty"]),
        ("soy sauce", &["salty", "umami"]),
        ("miso", &["salty", "umami"]),
        ("parmesan", &["salty", "umami"]),
        ("fish sauce", &["salty", "umami"]),
        ("mushroom", &["umami"]),
        ("tomato", &["umami"]),
        ("paprika", &["smoky"]),
        ("bacon", &["smoky", "salty"]),
        ("ginger", &["warming"]),
        ("cinnamon", &["warming", "sweet"]),
        ("garlic", &["savory"]),
        ("onion", &["savory"]),
    ]))
}

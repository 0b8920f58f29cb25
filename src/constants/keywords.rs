// ABOUTME: Static keyword tables driving meal scoring and allergen resolution
// ABOUTME: Food-category keywords, the allergen category map, and bonus keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # Keyword Tables
//!
//! Keyword matching over a meal's normalized search text is the only signal
//! scoring has: upstream recipe APIs do not reliably expose structured
//! allergen or diet metadata. These tables trade precision for availability.
//!
//! All entries are lowercase; callers are expected to match against text that
//! has already been lowercased (see `MealCandidate::search_text`).

/// Meat keywords (red meat, poultry, and processed meats)
pub const MEAT_KEYWORDS: &[&str] = &[
    "beef", "chicken", "pork", "lamb", "bacon", "ham", "sausage", "steak", "turkey", "duck",
    "veal", "meat",
];

/// Seafood keywords (fish and shellfish)
pub const SEAFOOD_KEYWORDS: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "anchovy", "sardine", "shrimp", "prawn", "crab", "lobster",
    "oyster", "mussel", "clam", "scallop", "squid", "seafood",
];

/// Dairy keywords
pub const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "ghee", "dairy",
];

/// Egg keywords
pub const EGG_KEYWORDS: &[&str] = &["egg", "eggs", "mayonnaise", "mayo", "meringue"];

/// Gluten keywords (wheat and other gluten grains, common vehicles)
pub const GLUTEN_KEYWORDS: &[&str] = &[
    "wheat",
    "flour",
    "bread",
    "breadcrumb",
    "pasta",
    "noodle",
    "barley",
    "rye",
    "soy sauce",
    "gluten",
];

/// Tree-nut keywords
pub const TREE_NUT_KEYWORDS: &[&str] = &[
    "almond",
    "walnut",
    "cashew",
    "pecan",
    "hazelnut",
    "pistachio",
    "macadamia",
    "nut",
];

/// Peanut keywords
pub const PEANUT_KEYWORDS: &[&str] = &["peanut", "peanuts", "groundnut"];

/// Shellfish keywords
pub const SHELLFISH_KEYWORDS: &[&str] = &[
    "shrimp", "prawn", "crab", "lobster", "oyster", "mussel", "clam", "scallop",
];

/// Fish keywords (fin fish only, distinct from shellfish)
pub const FISH_KEYWORDS: &[&str] = &["fish", "salmon", "tuna", "cod", "anchovy", "sardine"];

/// Soy keywords
pub const SOY_KEYWORDS: &[&str] = &["soy", "soya", "tofu", "edamame", "tempeh", "soy sauce"];

/// Keywords marking a dessert or sweet dish
pub const SWEET_KEYWORDS: &[&str] = &["dessert", "sweet"];

/// Keywords earning a weight-loss goal bonus
pub const WEIGHT_LOSS_KEYWORDS: &[&str] = &["salad", "light", "healthy"];

/// Keywords earning a heart-health goal bonus
pub const HEART_HEALTH_KEYWORDS: &[&str] = &["salmon", "avocado", "oats"];

/// Resolve an allergy identifier to its keyword list.
///
/// Returns `None` for an unrecognized identifier; per the degradation policy
/// the caller then treats the literal identifier itself as the sole keyword.
/// An allergy of "sesame" only matches meal text containing "sesame".
#[must_use]
pub fn allergen_keywords(allergy: &str) -> Option<&'static [&'static str]> {
    match allergy {
        "peanut" | "peanuts" => Some(PEANUT_KEYWORDS),
        "tree nut" | "tree nuts" | "nuts" => Some(TREE_NUT_KEYWORDS),
        "dairy" | "milk" | "lactose" => Some(DAIRY_KEYWORDS),
        "egg" | "eggs" => Some(EGG_KEYWORDS),
        "gluten" | "wheat" => Some(GLUTEN_KEYWORDS),
        "shellfish" => Some(SHELLFISH_KEYWORDS),
        "fish" => Some(FISH_KEYWORDS),
        "soy" | "soya" => Some(SOY_KEYWORDS),
        _ => None,
    }
}

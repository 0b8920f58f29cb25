// ABOUTME: Fallback browse-category hints derived from the health profile
// ABOUTME: Used to re-query the recipe source when filtering leaves nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use crate::models::HealthProfile;

/// Default categories suggested when no profile rule fires
const DEFAULT_CATEGORIES: [&str; 3] = ["Breakfast", "Chicken", "Beef"];

/// Derive suggested browse categories from the profile.
///
/// Total and deterministic; the output order is the fixed rule evaluation
/// order below and each category is added at most once. Never returns an
/// empty list: with nothing to go on, a generic default set is suggested.
#[must_use]
pub fn recommended_categories(profile: &HealthProfile) -> Vec<String> {
    let mut categories = Vec::new();

    let plant_based = profile.dietary.vegetarian || profile.dietary.vegan;
    if plant_based {
        categories.push("Vegetarian".into());
    }
    if profile.preferences.seafood && !plant_based {
        categories.push("Seafood".into());
    }
    if profile.preferences.sweets {
        categories.push("Dessert".into());
    }
    if profile.health_goals.weight_loss {
        categories.push("Side".into());
    }

    if categories.is_empty() {
        return DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect();
    }
    categories
}

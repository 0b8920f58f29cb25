// ABOUTME: Ingredient models - raw declarations, nutrition facts, enriched breakdowns
// ABOUTME: IngredientInfo is rebuilt per meal-detail view and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use serde::{Deserialize, Serialize};

/// An ingredient exactly as declared on a meal: a name plus a free-text
/// quantity/unit string such as "2 tbsp" or "125g".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIngredient {
    /// Ingredient name
    pub name: String,
    /// Free-text quantity/unit string
    pub measure: String,
}

impl RawIngredient {
    /// Create a raw ingredient declaration
    #[must_use]
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }
}

/// Per-ingredient nutrient totals. Each field is zero when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Fat in grams
    pub fat: f64,
    /// Sugars in grams
    pub sugars: f64,
    /// Sodium in milligrams
    pub sodium: f64,
}

impl NutritionFacts {
    /// The zero-fill sentinel substituted when a nutrition lookup fails
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        fat: 0.0,
        sugars: 0.0,
        sodium: 0.0,
    };
}

/// One entry of a meal's per-ingredient breakdown, produced by the
/// enrichment join. Recomputed on every meal-detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientInfo {
    /// Ingredient name as declared on the meal
    pub name: String,
    /// Free-text quantity/unit string as declared on the meal
    pub measure: String,
    /// Nutrient totals, zero-filled when the lookup failed
    pub nutrition: NutritionFacts,
    /// Allergen tags such as "en:gluten", empty when unknown
    pub allergens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sentinel_matches_default() {
        assert_eq!(NutritionFacts::ZERO, NutritionFacts::default());
    }
}

// ABOUTME: Ingredient enrichment join - concurrent nutrition and allergen lookups
// ABOUTME: Per-ingredient failures degrade to sentinel values, never to errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use futures_util::future::join_all;
use tracing::warn;

use crate::models::{IngredientInfo, NutritionFacts, RawIngredient};
use crate::providers::{AllergenLookup, NutritionLookup};

/// Build a per-ingredient breakdown for a meal-detail view.
///
/// For each raw ingredient the nutrition and allergen lookups are issued
/// concurrently, and all ingredients' lookups are in flight simultaneously.
/// The join waits for every outstanding lookup before producing the result,
/// and the output order always matches the input order regardless of
/// completion order.
///
/// A failed lookup is final for that render: the affected ingredient gets
/// [`NutritionFacts::ZERO`] and/or an empty allergen list, other ingredients
/// are unaffected, and no error ever reaches the caller. Every input
/// ingredient produces exactly one output entry even under total lookup
/// failure. Timeouts are the lookup implementations' responsibility.
pub async fn enrich_ingredients(
    nutrition: &dyn NutritionLookup,
    allergens: &dyn AllergenLookup,
    raw_list: &[RawIngredient],
) -> Vec<IngredientInfo> {
    let lookups = raw_list.iter().map(|ingredient| async move {
        let (nutrition_result, allergen_result) = tokio::join!(
            nutrition.lookup_nutrition(&ingredient.name),
            allergens.lookup_allergens(&ingredient.name),
        );

        let nutrition = nutrition_result.unwrap_or_else(|err| {
            warn!(ingredient = %ingredient.name, error = %err, "nutrition lookup failed, zero-filling");
            NutritionFacts::ZERO
        });
        let allergens = allergen_result.unwrap_or_else(|err| {
            warn!(ingredient = %ingredient.name, error = %err, "allergen lookup failed, assuming none");
            Vec::new()
        });

        IngredientInfo {
            name: ingredient.name.clone(),
            measure: ingredient.measure.clone(),
            nutrition,
            allergens,
        }
    });

    join_all(lookups).await
}

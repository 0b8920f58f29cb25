// ABOUTME: Collaborator trait seams - recipe sources, nutrition/allergen lookups, profile storage
// ABOUTME: Implementations live in the embedding application; the core only consumes these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # External Collaborators
//!
//! The core performs no I/O of its own. Everything it needs from the outside
//! world arrives through these traits: candidate meals from a recipe source,
//! per-ingredient facts from nutrition/allergen databases, and the health
//! profile from whatever storage the client uses. Timeouts, retries, and
//! caching are the implementor's responsibility.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{HealthProfile, MealCandidate, NutritionFacts};

/// Selection criteria for fetching candidate meals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealCriteria {
    /// Browse by category label, e.g. "Seafood"
    Category(String),
    /// Free-text search query
    Query(String),
}

/// Per-ingredient nutrient lookup, e.g. a USDA `FoodData` Central client.
///
/// Expected to fail with a not-found style error when no match exists; the
/// enrichment join converts any failure into [`NutritionFacts::ZERO`].
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Resolve nutrient totals for a single ingredient name
    async fn lookup_nutrition(&self, ingredient_name: &str) -> AppResult<NutritionFacts>;
}

/// Per-ingredient allergen tag lookup, e.g. an Open Food Facts client.
///
/// Tags use the upstream taxonomy form such as `"en:gluten"`. An empty list
/// means no known allergens; failures are converted to an empty list by the
/// enrichment join.
#[async_trait]
pub trait AllergenLookup: Send + Sync {
    /// Resolve allergen tags for a single ingredient name
    async fn lookup_allergens(&self, ingredient_name: &str) -> AppResult<Vec<String>>;
}

/// Category- or query-based external recipe source
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Fetch candidate meals matching the criteria
    async fn fetch_candidate_meals(&self, criteria: &MealCriteria)
        -> AppResult<Vec<MealCandidate>>;
}

/// Whole-object health profile storage. Last writer wins; there is no
/// partial-field merge.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the profile for a user, or a first-use default if none exists
    async fn load_profile(&self, user_id: Uuid) -> AppResult<HealthProfile>;

    /// Replace the stored profile wholesale
    async fn save_profile(&self, profile: &HealthProfile) -> AppResult<()>;
}

// ABOUTME: Mealwise recommendation core - profile-aware meal scoring, ranking, and enrichment
// ABOUTME: Library entry point re-exporting the public API surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # Mealwise Recommendation Core
//!
//! Personalization engine for a food/nutrition app. Given a user's
//! [`HealthProfile`](models::HealthProfile), this crate scores and ranks
//! candidate meals fetched from external recipe sources, suggests fallback
//! browse categories when nothing survives filtering, and decorates a meal's
//! ingredient list with nutrition and allergen data.
//!
//! Everything upstream and downstream of the core is a collaborator behind a
//! trait in [`providers`]: recipe sources, the nutrition/allergen databases,
//! and profile storage. The core itself never performs I/O except through
//! those seams.
//!
//! ## Design principles
//!
//! - Scoring reads only the meal's normalized search text. Recipe APIs do not
//!   expose structured allergen/diet metadata reliably, so structured flags
//!   are never trusted even when present.
//! - Penalties before bonuses, allergies weighted heaviest: allergy safety >
//!   dietary compliance > taste preference > aspirational bonus.
//! - Lookup failures degrade to sentinel values, never to errors. A meal
//!   detail view must always render something.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod providers;
pub mod recommendation;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    DietaryFlags, FoodPreferences, HealthGoals, HealthProfile, IngredientInfo, MealCandidate,
    NutritionFacts, RawIngredient,
};
pub use recommendation::{
    enrich_ingredients, filter_and_rank, recommended_categories, score_meal, RecommendationEngine,
};

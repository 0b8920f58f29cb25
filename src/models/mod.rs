// ABOUTME: Domain models for profiles, candidate meals, and ingredient data
// ABOUTME: Serde-serializable types shared with the embedding application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! Domain models
//!
//! The data the core operates on: the user's [`HealthProfile`], candidate
//! meals in their two upstream shapes, and per-ingredient nutrition/allergen
//! breakdowns produced by the enrichment join.

mod ingredient;
mod meal;
mod profile;

pub use ingredient::{IngredientInfo, NutritionFacts, RawIngredient};
pub use meal::MealCandidate;
pub use profile::{DietaryFlags, FoodPreferences, HealthGoals, HealthProfile};

// ABOUTME: Recommendation core - scoring, filter-and-rank, category hints, enrichment
// ABOUTME: Pure computation except the enrichment join, which gathers collaborator lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # Recommendation Core
//!
//! The scoring and filtering pipeline that turns a candidate meal set plus a
//! health profile into a ranked recommendation list, the category fallback
//! used when nothing survives filtering, and the per-ingredient enrichment
//! join used by the meal-detail view.

mod categories;
mod enrichment;
mod pipeline;
mod scoring;

pub use categories::recommended_categories;
pub use enrichment::enrich_ingredients;
pub use pipeline::{filter_and_rank, RecommendationEngine};
pub use scoring::score_meal;

// ABOUTME: Filter-and-rank pipeline applying the scoring engine across a candidate set
// ABOUTME: Inclusive threshold, stable descending sort, scores kept internal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use tracing::debug;

use super::categories::recommended_categories;
use super::scoring::score_meal;
use crate::config::RecommendationConfig;
use crate::models::{HealthProfile, MealCandidate};

/// Score every candidate, keep those at or above `min_score`, and return them
/// in descending score order.
///
/// Every candidate is scored; there is no early exit. The threshold is
/// inclusive. The sort is stable with no secondary key, so candidates with
/// equal scores keep their original relative order. Scores are an internal
/// side channel only (logged at debug level), never part of the result.
///
/// Running the pipeline on its own output with the same threshold returns
/// the same sequence unchanged.
#[must_use]
pub fn filter_and_rank(
    meals: &[MealCandidate],
    profile: &HealthProfile,
    min_score: i32,
) -> Vec<MealCandidate> {
    let mut scored: Vec<(i32, &MealCandidate)> = meals
        .iter()
        .map(|meal| {
            let score = score_meal(meal, profile);
            debug!(meal = %meal.name(), score, "scored candidate");
            (score, meal)
        })
        .collect();

    scored.retain(|(score, _)| *score >= min_score);
    // Vec::sort_by is stable: ties keep input order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    debug!(
        candidates = meals.len(),
        recommended = scored.len(),
        min_score,
        "filter-and-rank complete"
    );

    scored.into_iter().map(|(_, meal)| meal.clone()).collect()
}

/// Pipeline wrapper carrying configuration.
///
/// Thin convenience over [`filter_and_rank`] and
/// [`recommended_categories`] for callers that want the configured
/// threshold instead of passing one explicitly.
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RecommendationConfig::global().clone(),
        }
    }

    /// Create an engine with explicit configuration
    #[must_use]
    pub fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Filter and rank candidates with the configured threshold
    #[must_use]
    pub fn recommend(
        &self,
        meals: &[MealCandidate],
        profile: &HealthProfile,
    ) -> Vec<MealCandidate> {
        filter_and_rank(meals, profile, self.config.min_score)
    }

    /// Fallback browse categories for when [`Self::recommend`] comes back
    /// empty and the client needs something to re-query with
    #[must_use]
    pub fn fallback_categories(&self, profile: &HealthProfile) -> Vec<String> {
        recommended_categories(profile)
    }
}

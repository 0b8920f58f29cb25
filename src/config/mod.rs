// ABOUTME: Recommendation configuration with environment overrides
// ABOUTME: Process-wide global initialized once, following the OnceLock pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! Recommendation configuration
//!
//! Tunables for the filter-and-rank pipeline. Loaded once per process from
//! the environment; the rest of the crate reads the immutable global.

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use tracing::warn;

/// Default minimum score a candidate must reach to be recommended
pub const DEFAULT_MIN_SCORE: i32 = 50;

/// Pipeline tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Candidates scoring below this (exclusive) are discarded
    pub min_score: i32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

static RECOMMENDATION_CONFIG: OnceLock<RecommendationConfig> = OnceLock::new();

impl RecommendationConfig {
    /// Get the process-wide configuration, initializing from the environment
    /// on first access
    #[must_use]
    pub fn global() -> &'static Self {
        RECOMMENDATION_CONFIG.get_or_init(Self::from_env)
    }

    /// Build configuration from environment variables, falling back to
    /// defaults on missing or unparseable values
    #[must_use]
    pub fn from_env() -> Self {
        let min_score = env::var("MEALWISE_MIN_SCORE")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(value = %raw, "MEALWISE_MIN_SCORE is not an integer, using default");
                    None
                }
            })
            .unwrap_or(DEFAULT_MIN_SCORE);

        Self { min_score }
    }
}

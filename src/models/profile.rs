// ABOUTME: Health profile model - dietary flags, allergies, preferences, goals
// ABOUTME: Read and written wholesale by the owning client; last writer wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalized user dietary/allergy/preference/goal state.
///
/// Created with defaults on first use and replaced wholesale on every save;
/// there is no partial-field merge or concurrency control. `restrictions` is
/// reserved for custom restriction strings and is not read by scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Owning user
    pub user_id: Uuid,
    /// Dietary restriction flags; independent, several may be set at once
    pub dietary: DietaryFlags,
    /// Free-text allergen identifiers, lowercase; duplicates are idempotent
    pub allergies: Vec<String>,
    /// Food-type affinity flags (opt-out model, default true)
    pub preferences: FoodPreferences,
    /// Health goal flags
    pub health_goals: HealthGoals,
    /// Custom restriction strings, reserved for future scoring use
    pub restrictions: Vec<String>,
    /// Last wholesale write
    pub updated_at: DateTime<Utc>,
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            dietary: DietaryFlags::default(),
            allergies: Vec::new(),
            preferences: FoodPreferences::default(),
            health_goals: HealthGoals::default(),
            restrictions: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

impl HealthProfile {
    /// Create a fresh first-use profile for a user
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }
}

/// Dietary restriction flags. No mutual exclusion is enforced; a profile may
/// be simultaneously vegan and gluten-free, and the scoring penalties stack.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryFlags {
    /// No meat or seafood
    pub vegetarian: bool,
    /// No animal products
    pub vegan: bool,
    /// No gluten grains
    pub gluten_free: bool,
    /// No dairy
    pub dairy_free: bool,
    /// Ketogenic diet
    pub ketogenic: bool,
    /// Paleo diet
    pub paleo: bool,
    /// Low-carbohydrate diet
    pub low_carb: bool,
    /// Low-sodium diet
    pub low_sodium: bool,
}

/// Food-type affinity flags. Opt-out model: everything defaults to true and
/// scoring only penalizes when a flag has been switched off.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPreferences {
    /// Spicy dishes (reserved, not yet read by scoring)
    pub spicy_foods: bool,
    /// Fish and shellfish
    pub seafood: bool,
    /// Meat dishes
    pub meat: bool,
    /// Desserts and sweets
    pub sweets: bool,
}

impl Default for FoodPreferences {
    fn default() -> Self {
        Self {
            spicy_foods: true,
            seafood: true,
            meat: true,
            sweets: true,
        }
    }
}

/// Health goal flags
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthGoals {
    /// Losing weight
    pub weight_loss: bool,
    /// Building muscle (reserved, not yet read by scoring)
    pub muscle_gain: bool,
    /// Cardiovascular health
    pub heart_health: bool,
    /// Diabetes-friendly eating (reserved, not yet read by scoring)
    pub diabetic_friendly: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_defaults() {
        let profile = HealthProfile::default();
        assert!(!profile.dietary.vegetarian);
        assert!(!profile.health_goals.weight_loss);
        assert!(profile.preferences.seafood);
        assert!(profile.preferences.sweets);
        assert!(profile.allergies.is_empty());
        assert!(profile.restrictions.is_empty());
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let mut profile = HealthProfile::new(Uuid::new_v4());
        profile.dietary.vegan = true;
        profile.allergies.push("peanut".into());

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"glutenFree\""));
        let back: HealthProfile = serde_json::from_str(&json).unwrap();
        assert!(back.dietary.vegan);
        assert_eq!(back.allergies, vec!["peanut"]);
    }
}

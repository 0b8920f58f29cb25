// ABOUTME: Suitability scoring for a single meal against a health profile
// ABOUTME: Keyword matching over normalized search text; penalties before bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use std::collections::BTreeSet;

use crate::constants::keywords;
use crate::models::{HealthProfile, MealCandidate};

/// Compute the suitability score of one meal for one profile.
///
/// Pure and deterministic: no I/O, no mutation of inputs. The score starts at
/// 100 and accumulates penalties and bonuses in a fixed order; every step is
/// always evaluated because later bonuses can still apply after an early
/// disqualification. The result is clamped at 0 from below only. There is no
/// upper clamp: a strongly matching meal can score above 100, which is
/// intentional.
///
/// Severity ranking encoded in the weights: allergy safety (-100 each) >
/// dietary compliance (-40..-60) > taste preference (-15..-20) > aspirational
/// bonuses (+15..+20).
#[must_use]
pub fn score_meal(meal: &MealCandidate, profile: &HealthProfile) -> i32 {
    let text = meal.search_text();
    let has_any = |table: &[&str]| table.iter().any(|kw| text.contains(kw));

    let meat = has_any(keywords::MEAT_KEYWORDS);
    let seafood = has_any(keywords::SEAFOOD_KEYWORDS);
    let dairy = has_any(keywords::DAIRY_KEYWORDS);
    let egg = has_any(keywords::EGG_KEYWORDS);
    let gluten = has_any(keywords::GLUTEN_KEYWORDS);

    let mut score = 100_i32;

    // Dietary-restriction penalties, each checked independently
    if profile.dietary.vegetarian && (meat || seafood) {
        score -= 50;
    }
    if profile.dietary.vegan && (meat || seafood || dairy || egg) {
        score -= 60;
    }
    if profile.dietary.gluten_free && gluten {
        score -= 40;
    }
    if profile.dietary.dairy_free && dairy {
        score -= 40;
    }

    // Allergy penalties: disqualifying, not merely discouraged. Duplicate
    // allergy entries are idempotent, so resolve over the deduplicated set.
    let distinct: BTreeSet<String> = profile
        .allergies
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();
    for allergy in &distinct {
        let matched = keywords::allergen_keywords(allergy).map_or_else(
            // Unrecognized identifiers degrade to a literal substring match
            || text.contains(allergy.as_str()),
            |table| table.iter().any(|kw| text.contains(kw)),
        );
        if matched {
            score -= 100;
        }
    }

    // Preference penalties apply only when the user opted out
    if !profile.preferences.seafood && seafood {
        score -= 20;
    }
    if !profile.preferences.meat && meat {
        score -= 20;
    }
    if !profile.preferences.sweets && has_any(keywords::SWEET_KEYWORDS) {
        score -= 15;
    }

    // Diet-label bonuses: +20 per matching label, additive
    let labels = [
        (profile.dietary.vegetarian, "vegetarian"),
        (profile.dietary.vegan, "vegan"),
        (profile.dietary.gluten_free, "gluten free"),
        (profile.dietary.dairy_free, "dairy free"),
        (profile.dietary.ketogenic, "keto"),
        (profile.dietary.paleo, "paleo"),
        (profile.dietary.low_sodium, "low sodium"),
    ];
    for (flag, label) in labels {
        if flag && text.contains(label) {
            score += 20;
        }
    }

    // Health-goal bonuses
    if profile.health_goals.weight_loss && has_any(keywords::WEIGHT_LOSS_KEYWORDS) {
        score += 15;
    }
    if profile.health_goals.heart_health && has_any(keywords::HEART_HEALTH_KEYWORDS) {
        score += 15;
    }

    score.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietaryFlags;

    fn remote(name: &str, category: Option<&str>) -> MealCandidate {
        MealCandidate::Remote {
            name: name.into(),
            category: category.map(Into::into),
            tags: None,
            instructions: None,
        }
    }

    #[test]
    fn test_neutral_meal_keeps_base_score() {
        let profile = HealthProfile::default();
        assert_eq!(score_meal(&remote("Plain Rice", None), &profile), 100);
    }

    #[test]
    fn test_vegetarian_and_vegan_penalties_stack() {
        let profile = HealthProfile {
            dietary: DietaryFlags {
                vegetarian: true,
                vegan: true,
                ..DietaryFlags::default()
            },
            ..HealthProfile::default()
        };
        // meat keyword trips both: 100 - 50 - 60 = -10 -> clamped
        assert_eq!(score_meal(&remote("Beef Stew", None), &profile), 0);
    }

    #[test]
    fn test_duplicate_allergies_penalized_once() {
        let profile = HealthProfile {
            allergies: vec!["peanut".into(), "peanut".into(), "Peanut ".into()],
            ..HealthProfile::default()
        };
        let meal = remote("Peanut Noodle Bowl", None);
        // one -100 despite three entries
        assert_eq!(score_meal(&meal, &profile), 0);
    }

    #[test]
    fn test_unknown_allergy_matches_literally() {
        let profile = HealthProfile {
            allergies: vec!["sesame".into()],
            ..HealthProfile::default()
        };
        assert_eq!(score_meal(&remote("Sesame Chicken", None), &profile), 0);
        assert_eq!(score_meal(&remote("Plain Rice", None), &profile), 100);
    }
}

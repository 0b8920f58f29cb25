// ABOUTME: Scoring engine tests - penalty/bonus arithmetic, clamping, allergy dominance
// ABOUTME: Pins the fixed evaluation order and the lower-clamp-only contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use mealwise::models::{
    DietaryFlags, FoodPreferences, HealthGoals, HealthProfile, MealCandidate,
};
use mealwise::score_meal;

fn remote(name: &str, category: Option<&str>, instructions: Option<&str>) -> MealCandidate {
    MealCandidate::Remote {
        name: name.into(),
        category: category.map(Into::into),
        tags: None,
        instructions: instructions.map(Into::into),
    }
}

#[test]
fn test_score_is_deterministic() {
    let profile = HealthProfile {
        dietary: DietaryFlags {
            vegetarian: true,
            ..DietaryFlags::default()
        },
        allergies: vec!["peanut".into()],
        ..HealthProfile::default()
    };
    let meal = remote("Pad Thai", Some("Thai"), Some("Toss with crushed peanuts."));

    let first = score_meal(&meal, &profile);
    for _ in 0..10 {
        assert_eq!(score_meal(&meal, &profile), first);
    }
}

#[test]
fn test_score_never_negative() {
    // vegan + vegetarian + two allergy hits pile far below zero
    let profile = HealthProfile {
        dietary: DietaryFlags {
            vegetarian: true,
            vegan: true,
            gluten_free: true,
            dairy_free: true,
            ..DietaryFlags::default()
        },
        allergies: vec!["dairy".into(), "gluten".into(), "shellfish".into()],
        ..HealthProfile::default()
    };
    let meal = remote(
        "Shrimp Alfredo",
        Some("Pasta"),
        Some("Simmer shrimp in cream, toss with pasta and cheese."),
    );
    assert_eq!(score_meal(&meal, &profile), 0);
}

#[test]
fn test_allergy_dominates_dietary_penalty() {
    // 100 - 60 (vegan, dairy keyword) - 100 (dairy allergy) = -60 -> 0
    let profile = HealthProfile {
        dietary: DietaryFlags {
            vegan: true,
            ..DietaryFlags::default()
        },
        allergies: vec!["dairy".into()],
        ..HealthProfile::default()
    };
    let meal = remote("Cheese Platter", Some("Snack"), None);
    assert_eq!(score_meal(&meal, &profile), 0);
}

#[test]
fn test_allergy_penalties_accumulate_per_allergy() {
    // bonuses (+110) keep the totals above the clamp so the difference
    // between one and two allergy hits is observable
    let base = HealthProfile {
        dietary: DietaryFlags {
            vegan: true,
            ketogenic: true,
            paleo: true,
            low_sodium: true,
            ..DietaryFlags::default()
        },
        health_goals: HealthGoals {
            weight_loss: true,
            heart_health: true,
            ..HealthGoals::default()
        },
        ..HealthProfile::default()
    };
    let one = HealthProfile {
        allergies: vec!["peanut".into()],
        ..base.clone()
    };
    let two = HealthProfile {
        allergies: vec!["peanut".into(), "soy".into()],
        ..base
    };
    let meal = remote(
        "Peanut Soy Power Salad",
        None,
        Some("A vegan, keto, paleo, low sodium salad with avocado, peanuts and soy."),
    );
    assert_eq!(score_meal(&meal, &one), 110);
    assert_eq!(score_meal(&meal, &two), 10);
}

#[test]
fn test_dietary_penalties_are_independent() {
    // gluten (-40) and dairy (-40) both apply: 100 - 80 = 20
    let profile = HealthProfile {
        dietary: DietaryFlags {
            gluten_free: true,
            dairy_free: true,
            ..DietaryFlags::default()
        },
        ..HealthProfile::default()
    };
    let meal = remote(
        "Mac and Cheese",
        None,
        Some("Boil the pasta, stir in milk and butter."),
    );
    assert_eq!(score_meal(&meal, &profile), 20);
}

#[test]
fn test_preference_opt_outs_penalize() {
    // -20 seafood, -20 meat, -15 sweets: 100 - 55 = 45
    let profile = HealthProfile {
        preferences: FoodPreferences {
            spicy_foods: true,
            seafood: false,
            meat: false,
            sweets: false,
        },
        ..HealthProfile::default()
    };
    let meal = remote(
        "Surf and Turf",
        None,
        Some("Grill the steak and lobster, finish with a sweet glaze."),
    );
    assert_eq!(score_meal(&meal, &profile), 45);
}

#[test]
fn test_default_preferences_do_not_penalize() {
    let profile = HealthProfile::default();
    let meal = remote("Surf and Turf", None, Some("Grill the steak and lobster."));
    assert_eq!(score_meal(&meal, &profile), 100);
}

#[test]
fn test_bonuses_can_push_score_above_100() {
    // +20 x4 diet labels, +15 x2 goal bonuses: 100 + 110 = 210, no upper clamp
    let profile = HealthProfile {
        dietary: DietaryFlags {
            vegan: true,
            ketogenic: true,
            paleo: true,
            low_sodium: true,
            ..DietaryFlags::default()
        },
        health_goals: HealthGoals {
            weight_loss: true,
            heart_health: true,
            ..HealthGoals::default()
        },
        ..HealthProfile::default()
    };
    let meal = remote(
        "Avocado Salad",
        None,
        Some("A vegan, keto, paleo, low sodium salad with avocado."),
    );
    assert_eq!(score_meal(&meal, &profile), 210);
}

#[test]
fn test_bonuses_still_apply_after_disqualification() {
    // vegetarian meat penalty (-50) and vegetarian label bonus (+20) coexist:
    // no short-circuit on disqualification
    let profile = HealthProfile {
        dietary: DietaryFlags {
            vegetarian: true,
            ..DietaryFlags::default()
        },
        ..HealthProfile::default()
    };
    let meal = remote(
        "Vegetarian Lasagne",
        None,
        Some("Replace the beef with lentils for a vegetarian version."),
    );
    assert_eq!(score_meal(&meal, &profile), 70);
}

#[test]
fn test_missing_fields_treated_as_empty() {
    let profile = HealthProfile {
        dietary: DietaryFlags {
            vegan: true,
            ..DietaryFlags::default()
        },
        allergies: vec!["shellfish".into()],
        ..HealthProfile::default()
    };
    let meal = remote("Fruit Bowl", None, None);
    assert_eq!(score_meal(&meal, &profile), 100);
}

#[test]
fn test_vegetarian_penalizes_every_seafood_variety() {
    let profile = HealthProfile {
        dietary: DietaryFlags {
            vegetarian: true,
            ..DietaryFlags::default()
        },
        ..HealthProfile::default()
    };
    // sardine and scallop dishes count as seafood, same as salmon or shrimp
    for name in ["Sardine Toast", "Seared Scallops", "Salmon Bowl"] {
        assert_eq!(score_meal(&remote(name, None, None), &profile), 50, "{name}");
    }
}

#[test]
fn test_goal_bonuses() {
    let profile = HealthProfile {
        health_goals: HealthGoals {
            heart_health: true,
            ..HealthGoals::default()
        },
        ..HealthProfile::default()
    };
    let meal = remote("Overnight Oats", Some("Breakfast"), None);
    assert_eq!(score_meal(&meal, &profile), 115);
}

// ABOUTME: Candidate meal model - remote recipe-API shape and local bundled shape
// ABOUTME: Normalizes both shapes into the single lowercase search text scoring reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use serde::{Deserialize, Serialize};

use super::ingredient::RawIngredient;

/// A meal record being evaluated for recommendation.
///
/// Candidates arrive in two shapes and are unified at scoring time:
/// the remote recipe-API shape (tags as one comma-separated string, free-text
/// instructions) and the local bundled-JSON shape (tag list, ingredient list).
///
/// Scoring never reads the structured fields directly. [`Self::search_text`]
/// is the only signal: upstream sources do not reliably expose structured
/// diet/allergen metadata, so even an explicit "vegan" flag from a provider
/// is ignored in favor of the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MealCandidate {
    /// Remote recipe-API shape
    Remote {
        /// Display name
        #[serde(alias = "strMeal")]
        name: String,
        /// Category label, e.g. "Seafood"
        #[serde(alias = "strCategory", default)]
        category: Option<String>,
        /// Comma-separated tag string, e.g. "Fish,Breakfast"
        #[serde(alias = "strTags", default)]
        tags: Option<String>,
        /// Free-text cooking instructions
        #[serde(alias = "strInstructions", default)]
        instructions: Option<String>,
    },
    /// Local bundled-JSON shape
    Local {
        /// Display name
        name: String,
        /// Category label
        #[serde(default)]
        category: Option<String>,
        /// Tag list
        #[serde(default)]
        tags: Vec<String>,
        /// Declared ingredients
        #[serde(default)]
        ingredients: Vec<RawIngredient>,
    },
}

impl MealCandidate {
    /// Display name of the meal
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Remote { name, .. } | Self::Local { name, .. } => name,
        }
    }

    /// Build the normalized search text: lowercase concatenation of name,
    /// category, tags, and instructions (remote) or ingredient names (local),
    /// space joined. Missing fields contribute an empty segment.
    #[must_use]
    pub fn search_text(&self) -> String {
        let text = match self {
            Self::Remote {
                name,
                category,
                tags,
                instructions,
            } => format!(
                "{} {} {} {}",
                name,
                category.as_deref().unwrap_or(""),
                tags.as_deref().unwrap_or(""),
                instructions.as_deref().unwrap_or(""),
            ),
            Self::Local {
                name,
                category,
                tags,
                ingredients,
            } => {
                let body = ingredients
                    .iter()
                    .map(|i| i.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    "{} {} {} {}",
                    name,
                    category.as_deref().unwrap_or(""),
                    tags.join(" "),
                    body,
                )
            }
        };
        text.to_lowercase()
    }
}

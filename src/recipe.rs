//! Recipe operations: hydration from a fetch payload, derived fields
//! and proportional servings scaling.

use crate::api::RecipePayload;
use crate::ingredient::parse_ingredient;
use crate::model::{Ingredient, Recipe};

/// Every fresh fetch starts from this serving count, regardless of
/// what the source claims.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Direction of a servings adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    Increase,
    Decrease,
}

impl Recipe {
    /// Build a recipe from a fetch-by-id payload: parse every
    /// ingredient line, derive the preparation time and reset the
    /// serving count to the default.
    pub fn from_payload(id: impl Into<String>, payload: RecipePayload) -> Self {
        let ingredients: Vec<Ingredient> = payload
            .ingredients
            .iter()
            .map(|line| parse_ingredient(line))
            .collect();
        let prep_time_minutes = prep_time_minutes(ingredients.len());

        Recipe {
            id: id.into(),
            title: payload.title,
            author: payload.author,
            image_url: payload.image_url,
            source_url: payload.source_url,
            servings: DEFAULT_SERVINGS,
            prep_time_minutes,
            ingredients,
        }
    }

    /// Adjust servings by one and scale every ingredient count
    /// proportionally. Decreasing below 1 is a no-op. Rounding drift
    /// accumulates across repeated calls and is accepted.
    pub fn rescale(&mut self, direction: ScaleDirection) {
        let new_servings = match direction {
            ScaleDirection::Increase => self.servings + 1,
            ScaleDirection::Decrease => {
                if self.servings <= 1 {
                    return;
                }
                self.servings - 1
            }
        };

        let factor = f64::from(new_servings) / f64::from(self.servings);
        for ingredient in &mut self.ingredients {
            ingredient.count *= factor;
        }
        self.servings = new_servings;
    }
}

/// Preparation time heuristic: 15 minutes for every started group of
/// three ingredients.
pub fn prep_time_minutes(ingredient_count: usize) -> u32 {
    (ingredient_count as u32).div_ceil(3) * 15
}

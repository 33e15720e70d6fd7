use serde::{Deserialize, Serialize};

/// One parsed ingredient line.
///
/// `count` is always defined (1 when the source line carries no
/// quantity); `unit` holds the canonical short form or is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub count: f64,
    pub unit: String,
    pub name: String,
}

/// A recipe hydrated from a fetch-by-id response.
///
/// Discarded when the user navigates to another recipe. `servings`
/// starts at the fixed default of 4 on every fresh fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    pub servings: u32,
    pub prep_time_minutes: u32,
    pub ingredients: Vec<Ingredient>,
}

/// One entry of a search response. Lives for the duration of one search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResultItem {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(rename = "publisher")]
    pub author: String,
}

/// One shopping list entry, owned exclusively by the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub id: u64,
    pub count: f64,
    pub unit: String,
    pub name: String,
}

/// A liked recipe, persisted across sessions as part of the likes set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

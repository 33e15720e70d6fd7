//! Text rendering of model state.
//!
//! Pure string builders, no I/O: the binary decides where the output
//! goes, the models stay testable without a terminal.

use crate::ingredient::fraction::format_fraction;
use crate::model::{Ingredient, LikedRecipe, Recipe, SearchResultItem, ShoppingListItem};
use crate::search::Pagination;

/// One display line for an ingredient: `"4 1/2 cup flour"`.
pub fn ingredient_line(ingredient: &Ingredient) -> String {
    let mut line = format_fraction(ingredient.count);
    if !ingredient.unit.is_empty() {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&ingredient.unit);
    }
    if !ingredient.name.is_empty() {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&ingredient.name);
    }
    line
}

/// One page of search results with pagination hints.
pub fn results_page(items: &[SearchResultItem], pagination: &Pagination) -> String {
    if items.is_empty() {
        return "No results.".to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&format!("  {}  {} by {}\n", item.id, item.title, item.author));
    }
    out.push_str(&format!(
        "Page {} of {}",
        pagination.page, pagination.total_pages
    ));
    if pagination.has_prev {
        out.push_str(&format!("  [page {} <]", pagination.page - 1));
    }
    if pagination.has_next {
        out.push_str(&format!("  [> page {}]", pagination.page + 1));
    }
    out
}

/// The full recipe view: header, timing, servings, ingredients and the
/// directions pointer.
pub fn recipe_view(recipe: &Recipe, liked: bool) -> String {
    let heart = if liked { "♥" } else { " " };
    let mut out = format!(
        "{} {} by {}\n{} minutes, serves {}\n\nIngredients:\n",
        heart, recipe.title, recipe.author, recipe.prep_time_minutes, recipe.servings
    );
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {}\n", ingredient_line(ingredient)));
    }
    out.push_str(&format!("\nDirections: {}", recipe.source_url));
    out
}

pub fn shopping_list(items: &[ShoppingListItem]) -> String {
    if items.is_empty() {
        return "Shopping list is empty.".to_string();
    }

    let mut out = String::from("Shopping list:\n");
    for item in items {
        let quantity = format_fraction(item.count);
        if item.unit.is_empty() {
            out.push_str(&format!("  [{}] {} {}\n", item.id, quantity, item.name));
        } else {
            out.push_str(&format!(
                "  [{}] {} {} {}\n",
                item.id, quantity, item.unit, item.name
            ));
        }
    }
    out.trim_end().to_string()
}

pub fn likes_list(entries: &[LikedRecipe]) -> String {
    if entries.is_empty() {
        return "No liked recipes yet.".to_string();
    }

    let mut out = String::from("Liked recipes:\n");
    for like in entries {
        out.push_str(&format!("  {}  {} by {}\n", like.id, like.title, like.author));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredient_line_joins_non_empty_parts() {
        let line = ingredient_line(&Ingredient {
            count: 4.5,
            unit: "cup".to_string(),
            name: "flour".to_string(),
        });
        assert_eq!(line, "4 1/2 cup flour");

        let line = ingredient_line(&Ingredient {
            count: 1.0,
            unit: String::new(),
            name: "salt to taste".to_string(),
        });
        assert_eq!(line, "1 salt to taste");
    }
}

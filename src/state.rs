//! The application state container.
//!
//! Everything a session owns lives here and is passed explicitly to
//! the handlers; there is no ambient global state.

use crate::likes::Likes;
use crate::list::ShoppingList;
use crate::model::Recipe;
use crate::search::SearchModel;
use crate::storage::Storage;

#[derive(Debug, Default)]
pub struct AppState {
    /// Results of the most recent search, if any.
    pub search: Option<SearchModel>,
    /// The currently opened recipe, if any.
    pub recipe: Option<Recipe>,
    pub list: ShoppingList,
    pub likes: Likes,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore persisted likes. Called once at startup.
    pub fn restore_likes(&mut self, storage: &dyn Storage) {
        self.likes.restore(storage);
    }

    /// Toggle the like state of the opened recipe and persist the set.
    /// Returns the new liked state, or `None` when no recipe is open.
    pub fn toggle_like(&mut self, storage: &dyn Storage) -> Option<bool> {
        let recipe = self.recipe.as_ref()?;
        let liked = self.likes.toggle(recipe);
        self.likes.persist(storage);
        Some(liked)
    }

    /// Add every ingredient of the opened recipe to the shopping list.
    /// Returns false when no recipe is open.
    pub fn add_recipe_to_list(&mut self) -> bool {
        match self.recipe.as_ref() {
            Some(recipe) => {
                self.list.add_recipe(recipe);
                true
            }
            None => false,
        }
    }
}

//! The shopping list.

use crate::model::{Recipe, ShoppingListItem};

/// Ordered shopping list. Ids are assigned at insertion and never
/// reused while the list is non-empty; an emptied list starts over
/// from 0.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item under a fresh id (previous max + 1, or 0 when
    /// the list is empty).
    pub fn add(
        &mut self,
        count: f64,
        unit: impl Into<String>,
        name: impl Into<String>,
    ) -> &ShoppingListItem {
        let id = self
            .items
            .iter()
            .map(|item| item.id + 1)
            .max()
            .unwrap_or(0);
        self.items.push(ShoppingListItem {
            id,
            count,
            unit: unit.into(),
            name: name.into(),
        });
        &self.items[self.items.len() - 1]
    }

    /// Append every ingredient of a recipe.
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        for ingredient in &recipe.ingredients {
            self.add(
                ingredient.count,
                ingredient.unit.as_str(),
                ingredient.name.as_str(),
            );
        }
    }

    /// Remove the item with the given id. No-op when absent.
    pub fn delete(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Overwrite the count of an item. No-op when absent.
    pub fn update_count(&mut self, id: u64, count: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.count = count;
        }
    }

    pub fn get(&self, id: u64) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Liked recipes, persisted across sessions.

use log::warn;

use crate::model::{LikedRecipe, Recipe};
use crate::storage::Storage;

/// Fixed storage key for the serialized likes set.
pub const STORAGE_KEY: &str = "likes";

/// The set of liked recipes, keyed by recipe id, insertion-ordered.
#[derive(Debug, Clone, Default)]
pub struct Likes {
    entries: Vec<LikedRecipe>,
}

impl Likes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a like. Duplicate ids are ignored.
    pub fn add(&mut self, like: LikedRecipe) {
        if !self.is_liked(&like.id) {
            self.entries.push(like);
        }
    }

    /// Remove a like by recipe id. No-op when absent.
    pub fn delete(&mut self, id: &str) {
        self.entries.retain(|like| like.id != id);
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.entries.iter().any(|like| like.id == id)
    }

    /// Like an unliked recipe or unlike a liked one. Returns the new
    /// liked state.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if self.is_liked(&recipe.id) {
            self.delete(&recipe.id);
            false
        } else {
            self.add(LikedRecipe {
                id: recipe.id.clone(),
                title: recipe.title.clone(),
                author: recipe.author.clone(),
                image_url: recipe.image_url.clone(),
            });
            true
        }
    }

    pub fn entries(&self) -> &[LikedRecipe] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the whole set to storage. A storage failure is logged and
    /// swallowed: likes degrade to session-only, rendering continues.
    pub fn persist(&self, storage: &dyn Storage) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!("could not serialize likes: {err}");
                return;
            }
        };
        if let Err(err) = storage.set(STORAGE_KEY, &serialized) {
            warn!("could not persist likes, continuing without persistence: {err}");
        }
    }

    /// Replace the set with whatever storage holds. Missing or
    /// unreadable data leaves the set untouched.
    pub fn restore(&mut self, storage: &dyn Storage) {
        let stored = match storage.get(STORAGE_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return,
            Err(err) => {
                warn!("could not read stored likes: {err}");
                return;
            }
        };
        match serde_json::from_str(&stored) {
            Ok(entries) => self.entries = entries,
            Err(err) => warn!("ignoring malformed stored likes: {err}"),
        }
    }
}

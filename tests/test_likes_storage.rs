use recipe_scout::likes::STORAGE_KEY;
use recipe_scout::{AppError, FileStore, LikedRecipe, Likes, MemoryStore, Storage};

fn liked(id: &str) -> LikedRecipe {
    LikedRecipe {
        id: id.to_string(),
        title: format!("Recipe {id}"),
        author: "Someone".to_string(),
        image_url: format!("http://img.example/{id}.jpg"),
    }
}

/// A store whose reads and writes always fail.
struct BrokenStore;

impl Storage for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::Api("storage offline".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::Api("storage offline".to_string()))
    }
}

#[test]
fn round_trip_preserves_entries_and_order() {
    let store = MemoryStore::new();

    let mut likes = Likes::new();
    likes.add(liked("b"));
    likes.add(liked("a"));
    likes.add(liked("c"));
    likes.persist(&store);

    let mut restored = Likes::new();
    restored.restore(&store);
    assert_eq!(restored.entries(), likes.entries());
}

#[test]
fn round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut likes = Likes::new();
    likes.add(liked("42"));
    likes.persist(&store);

    let mut restored = Likes::new();
    restored.restore(&store);
    assert_eq!(restored.len(), 1);
    assert!(restored.is_liked("42"));
}

#[test]
fn duplicate_likes_are_ignored() {
    let mut likes = Likes::new();
    likes.add(liked("a"));
    likes.add(liked("a"));
    assert_eq!(likes.len(), 1);
}

#[test]
fn toggle_like_and_unlike() {
    let mut likes = Likes::new();
    let recipe = recipe_scout::Recipe {
        id: "r1".to_string(),
        title: "Soup".to_string(),
        author: "Chef".to_string(),
        image_url: String::new(),
        source_url: String::new(),
        servings: 4,
        prep_time_minutes: 15,
        ingredients: Vec::new(),
    };

    assert!(likes.toggle(&recipe));
    assert!(likes.is_liked("r1"));
    assert!(!likes.toggle(&recipe));
    assert!(likes.is_empty());
}

#[test]
fn broken_storage_degrades_to_session_only() {
    let mut likes = Likes::new();
    likes.add(liked("a"));

    // Neither persisting nor restoring may fail the caller
    likes.persist(&BrokenStore);

    let mut restored = Likes::new();
    restored.restore(&BrokenStore);
    assert!(restored.is_empty());

    // The in-memory set is still intact
    assert!(likes.is_liked("a"));
}

#[test]
fn malformed_stored_data_is_ignored() {
    let store = MemoryStore::new();
    store.set(STORAGE_KEY, "this is not json").unwrap();

    let mut likes = Likes::new();
    likes.restore(&store);
    assert!(likes.is_empty());
}

#[test]
fn missing_storage_key_leaves_likes_empty() {
    let store = MemoryStore::new();
    let mut likes = Likes::new();
    likes.restore(&store);
    assert!(likes.is_empty());
}

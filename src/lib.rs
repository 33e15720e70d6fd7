pub mod api;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod likes;
pub mod list;
pub mod model;
pub mod recipe;
pub mod render;
pub mod search;
pub mod state;
pub mod storage;

pub use api::{ApiClient, RecipePayload, RecipeService};
pub use config::AppConfig;
pub use error::AppError;
pub use ingredient::fraction::format_fraction;
pub use ingredient::parse_ingredient;
pub use likes::Likes;
pub use list::ShoppingList;
pub use model::{Ingredient, LikedRecipe, Recipe, SearchResultItem, ShoppingListItem};
pub use recipe::ScaleDirection;
pub use search::{Pagination, SearchModel};
pub use state::AppState;
pub use storage::{FileStore, MemoryStore, Storage};

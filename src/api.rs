//! Client for the remote recipe service.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;

use crate::error::AppError;
use crate::model::SearchResultItem;

/// Raw fetch-by-id payload, before ingredient parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    #[serde(rename = "publisher")]
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    recipes: Vec<SearchResultItem>,
}

#[derive(Debug, Deserialize)]
struct FetchResponse {
    recipe: RecipePayload,
}

/// The remote recipe service: search by keyword, fetch by id.
#[async_trait]
pub trait RecipeService {
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, AppError>;
    async fn fetch_by_id(&self, id: &str) -> Result<RecipePayload, AppError>;
}

/// HTTP client for the recipe API.
///
/// Overlapping requests are not cancelled; whichever response resolves
/// last wins when the caller stores the result. See the client tests.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RecipeService for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, AppError> {
        let url = format!("{}/api/search", self.base_url);
        let response = self.client.get(&url).query(&[("q", query)]).send().await?;

        if !response.status().is_success() {
            error!("search {:?} returned {}", query, response.status());
            return Err(AppError::Api(format!(
                "search returned {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        debug!("search {:?}: {} results", query, body.recipes.len());
        Ok(body.recipes)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RecipePayload, AppError> {
        let url = format!("{}/api/get", self.base_url);
        let response = self.client.get(&url).query(&[("rId", id)]).send().await?;

        if !response.status().is_success() {
            error!("fetch {:?} returned {}", id, response.status());
            return Err(AppError::Api(format!(
                "fetch returned {}",
                response.status()
            )));
        }

        let body: FetchResponse = response.json().await?;
        debug!("fetched recipe {:?}: {}", id, body.recipe.title);
        Ok(body.recipe)
    }
}

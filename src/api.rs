/// One-shot recipe fetch from the local recipe endpoint
///
/// The collection is populated exactly once from this read; edits and
/// deletes are never written back.

use thiserror::Error;

use crate::state::data::Recipe;

/// Fixed endpoint serving the recipe list as a JSON array.
/// There is no CLI or environment configuration.
pub const RECIPES_URL: &str = "http://localhost:3001/recipes";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to recipe endpoint failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetch the full recipe list.
pub async fn fetch_recipes() -> Result<Vec<Recipe>, FetchError> {
    let recipes = reqwest::get(RECIPES_URL)
        .await?
        .error_for_status()?
        .json::<Vec<Recipe>>()
        .await?;

    println!("🍲 Fetched {} recipes from {}", recipes.len(), RECIPES_URL);
    Ok(recipes)
}

/// Download a card image referenced by URL.
///
/// Any failure degrades to the placeholder card, so errors are only logged.
pub async fn fetch_image_bytes(url: String) -> Option<Vec<u8>> {
    match try_fetch_image(&url).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            eprintln!("⚠️  Could not load card image {url}: {e}");
            None
        }
    }
}

async fn try_fetch_image(url: &str) -> Result<Vec<u8>, FetchError> {
    let bytes = reqwest::get(url)
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(bytes.to_vec())
}

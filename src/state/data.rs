/// Shared data structures for the application state
///
/// These structs represent the recipe model that flows between
/// the network layer and the UI layer.

use serde::{Deserialize, Serialize};

/// A single recipe in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identity within the session. 0 means "not assigned yet";
    /// the store re-keys such entries during load.
    #[serde(default)]
    pub id: u64,
    /// Display name (e.g., "Tomato Soup")
    pub name: String,
    /// Ordered list of ingredients
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Data URI with an inline payload, or a remote URL
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    /// Ingredients as a single comma-separated line, the shape the form edits
    pub fn ingredients_line(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// Split a comma-delimited form line into individual ingredients.
///
/// Each segment is trimmed. Empty segments are kept as empty strings so
/// the split/join round trip through the form is lossless.
pub fn split_ingredients(line: &str) -> Vec<String> {
    line.split(',').map(|part| part.trim().to_string()).collect()
}

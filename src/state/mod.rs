/// State management module
///
/// This module owns all application data:
/// - The recipe collection and its derived search view (store.rs)
/// - Shared data structures (data.rs)
/// - The in-progress form draft (draft.rs)

pub mod data;
pub mod draft;
pub mod store;

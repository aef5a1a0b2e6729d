/// The authoritative in-memory recipe collection
///
/// Recipes carry a stable per-session id; the UI hands ids back for edit
/// and delete, and the store resolves them to list positions internally.
/// The search view is a pure function of (collection, query) computed on
/// demand, so there is no second list to keep in sync.

use std::collections::HashSet;

use super::data::{self, Recipe};
use super::draft::{Draft, Mode};

#[derive(Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    /// Next id to hand out for locally created recipes
    next_id: u64,
    /// Set once any local commit/delete has happened. A fetch result that
    /// arrives after that would stomp user edits, so load() discards it.
    modified: bool,
}

impl RecipeStore {
    pub fn new() -> Self {
        RecipeStore {
            recipes: Vec::new(),
            next_id: 1,
            modified: false,
        }
    }

    /// Replace the collection with the fetched list.
    ///
    /// Returns false when the result arrived after local edits and was
    /// discarded. Server ids may be missing or duplicated; those entries
    /// are re-keyed so id identity stays unambiguous.
    pub fn load(&mut self, mut fetched: Vec<Recipe>) -> bool {
        if self.modified {
            eprintln!(
                "⚠️  Fetch finished after local edits, discarding {} recipes",
                fetched.len()
            );
            return false;
        }

        let mut max_id = fetched.iter().map(|r| r.id).max().unwrap_or(0);
        let mut seen = HashSet::new();
        for recipe in &mut fetched {
            if recipe.id == 0 || !seen.insert(recipe.id) {
                max_id += 1;
                recipe.id = max_id;
                seen.insert(recipe.id);
            }
        }

        self.next_id = max_id + 1;
        self.recipes = fetched;
        true
    }

    /// Merge a draft into the collection: append when creating, replace in
    /// place when editing. Returns the id of the committed recipe.
    ///
    /// An edit whose target disappeared (deleted while the form was open)
    /// falls back to appending, so the typed-in work is never lost.
    pub fn commit(&mut self, draft: &Draft) -> u64 {
        let ingredients = data::split_ingredients(&draft.ingredients);
        self.modified = true;

        if let Mode::Editing(id) = draft.mode {
            if let Some(existing) = self.recipes.iter_mut().find(|r| r.id == id) {
                existing.name = draft.name.clone();
                existing.ingredients = ingredients;
                existing.instructions = draft.instructions.clone();
                existing.image = draft.image.clone();
                return id;
            }
            eprintln!("⚠️  Edit target {id} no longer exists, adding as a new recipe");
        }

        let id = self.next_id;
        self.next_id += 1;
        self.recipes.push(Recipe {
            id,
            name: draft.name.clone(),
            ingredients,
            instructions: draft.instructions.clone(),
            image: draft.image.clone(),
        });
        id
    }

    /// Remove the recipe with the given id, preserving the relative order
    /// of everything else. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) -> Option<Recipe> {
        let pos = self.recipes.iter().position(|r| r.id == id)?;
        self.modified = true;
        Some(self.recipes.remove(pos))
    }

    pub fn get(&self, id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The subset of recipes matching `query`, in collection order.
    ///
    /// A blank query selects everything. Otherwise the match is a
    /// case-insensitive substring test against the name, the ingredients
    /// joined with ", ", or the instructions.
    pub fn filtered(&self, query: &str) -> Vec<&Recipe> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.recipes.iter().collect();
        }
        self.recipes
            .iter()
            .filter(|recipe| Self::matches(recipe, &needle))
            .collect()
    }

    fn matches(recipe: &Recipe, needle: &str) -> bool {
        recipe.name.to_lowercase().contains(needle)
            || recipe.ingredients_line().to_lowercase().contains(needle)
            || recipe.instructions.to_lowercase().contains(needle)
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The in-progress recipe form state
///
/// Creating vs Editing is a tagged mode rather than a flag plus a sentinel
/// index, so "not editing but pointing at entry 5" cannot be represented.
/// The edit target is the recipe's stable id, never its list position.

use super::data::Recipe;

/// What submitting the form will do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Submit appends a new recipe
    #[default]
    Creating,
    /// Submit replaces the recipe with this id
    Editing(u64),
}

/// The uncommitted form contents
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub name: String,
    /// Edited as one comma-separated line, split on commit
    pub ingredients: String,
    pub instructions: String,
    /// Data URI captured from the image picker, or the original image
    /// string carried over when editing
    pub image: String,
    pub mode: Mode,
}

impl Draft {
    /// Copy an existing recipe into the form for editing
    pub fn begin_edit(&mut self, recipe: &Recipe) {
        self.name = recipe.name.clone();
        self.ingredients = recipe.ingredients_line();
        self.instructions = recipe.instructions.clone();
        self.image = recipe.image.clone();
        self.mode = Mode::Editing(recipe.id);
    }

    /// Presence-only validation, mirroring the form's required fields.
    /// The image is optional.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.ingredients.trim().is_empty()
            && !self.instructions.trim().is_empty()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    /// Reset to the empty Creating state after a successful commit
    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soup() -> Recipe {
        Recipe {
            id: 7,
            name: String::from("Soup"),
            ingredients: vec![String::from("salt"), String::from("water")],
            instructions: String::from("boil"),
            image: String::from("http://localhost:3001/images/soup.jpg"),
        }
    }

    #[test]
    fn test_default_is_creating() {
        let draft = Draft::default();
        assert_eq!(draft.mode, Mode::Creating);
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_begin_edit_joins_ingredients_and_targets_id() {
        let mut draft = Draft::default();
        draft.begin_edit(&soup());

        assert_eq!(draft.mode, Mode::Editing(7));
        assert_eq!(draft.name, "Soup");
        assert_eq!(draft.ingredients, "salt, water");
        assert_eq!(draft.instructions, "boil");
        assert_eq!(draft.image, "http://localhost:3001/images/soup.jpg");
    }

    #[test]
    fn test_clear_returns_to_creating() {
        let mut draft = Draft::default();
        draft.begin_edit(&soup());
        draft.clear();

        assert_eq!(draft.mode, Mode::Creating);
        assert!(draft.name.is_empty());
        assert!(draft.ingredients.is_empty());
        assert!(draft.instructions.is_empty());
        assert!(draft.image.is_empty());
    }

    #[test]
    fn test_blank_fields_are_invalid() {
        let mut draft = Draft {
            name: String::from("Cake"),
            ingredients: String::from("flour, sugar"),
            instructions: String::from("bake"),
            ..Draft::default()
        };
        assert!(draft.is_valid());

        // Whitespace-only counts as missing
        draft.instructions = String::from("   ");
        assert!(!draft.is_valid());

        draft.instructions = String::from("bake");
        draft.name.clear();
        assert!(!draft.is_valid());
    }
}

/// View construction for the two panels of the window:
/// the recipe form (form.rs) and the searchable card grid (cards.rs)

pub mod cards;
pub mod form;

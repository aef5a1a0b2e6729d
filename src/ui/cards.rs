/// The searchable recipe card grid
///
/// A search row on top of a scrollable wrapped grid of cards. The caller
/// passes the already-filtered slice, so this module never touches the
/// store directly.

use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::state::data::Recipe;
use crate::Message;

const CARD_WIDTH: f32 = 230.0;
const CARD_IMAGE_HEIGHT: f32 = 140.0;

pub fn view<'a>(
    recipes: &[&'a Recipe],
    art: &'a HashMap<u64, Handle>,
    query: &'a str,
) -> Element<'a, Message> {
    let search_bar = row![
        text_input("Search...", query)
            .on_input(Message::QueryChanged)
            .on_submit(Message::RunSearch)
            .padding(8),
        button("Search").on_press(Message::RunSearch).padding(8),
        button("Reset").on_press(Message::ResetSearch).padding(8),
    ]
    .spacing(10);

    let grid: Element<'a, Message> = if recipes.is_empty() {
        text("No recipes found.").size(16).into()
    } else {
        let cards = recipes
            .iter()
            .copied()
            .map(|recipe| card(recipe, art.get(&recipe.id)))
            .collect();

        scrollable(Wrap::with_elements(cards).spacing(15.0).line_spacing(15.0))
            .height(Length::Fill)
            .into()
    };

    column![text("Recipe List").size(32), search_bar, grid]
        .spacing(15)
        .width(Length::Fill)
        .into()
}

fn card<'a>(recipe: &'a Recipe, handle: Option<&Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => iced::widget::image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
        None => container(text("No image").size(14))
            .width(Length::Fill)
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
    };

    container(
        column![
            picture,
            text(&recipe.name).size(20),
            text(recipe.ingredients_line()).size(14),
            text(&recipe.instructions).size(14),
            row![
                button("Edit")
                    .on_press(Message::EditRecipe(recipe.id))
                    .padding(6),
                button("Delete")
                    .on_press(Message::DeleteRecipe(recipe.id))
                    .padding(6),
            ]
            .spacing(10),
        ]
        .spacing(8),
    )
    .style(container::rounded_box)
    .width(Length::Fixed(CARD_WIDTH))
    .padding(12)
    .into()
}

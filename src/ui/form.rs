/// The recipe form panel
///
/// One column of labeled inputs backed by the draft. The heading and the
/// submit label flip between add and edit wording depending on the mode.

use iced::widget::image::Handle;
use iced::widget::{button, column, text, text_input};
use iced::{Element, Length};

use crate::state::draft::{Draft, Mode};
use crate::Message;

const PANEL_WIDTH: f32 = 320.0;
const PREVIEW_WIDTH: f32 = 200.0;

pub fn view<'a>(draft: &'a Draft, preview: Option<&'a Handle>) -> Element<'a, Message> {
    let (heading, submit_label) = match draft.mode {
        Mode::Creating => ("Add Recipe", "Add Recipe"),
        Mode::Editing(_) => ("Edit Recipe", "Update Recipe"),
    };

    let mut form = column![
        text(heading).size(32),
        text("Name:"),
        text_input("Recipe name", &draft.name)
            .on_input(Message::NameChanged)
            .padding(8),
        text("Ingredients (comma separated):"),
        text_input("flour, sugar, eggs", &draft.ingredients)
            .on_input(Message::IngredientsChanged)
            .padding(8),
        text("Instructions:"),
        text_input("Mix everything and bake", &draft.instructions)
            .on_input(Message::InstructionsChanged)
            .padding(8),
        text("Image:"),
        button("Choose Image...").on_press(Message::PickImage).padding(8),
    ]
    .spacing(10)
    .width(Length::Fixed(PANEL_WIDTH));

    if let Some(handle) = preview {
        form = form.push(
            iced::widget::image(handle.clone()).width(Length::Fixed(PREVIEW_WIDTH)),
        );
    }

    form.push(
        button(submit_label)
            .on_press(Message::SubmitDraft)
            .padding(10),
    )
    .into()
}

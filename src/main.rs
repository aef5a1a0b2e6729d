use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Task, Theme};

mod api;
mod media;
mod state;
mod ui;

use state::data::Recipe;
use state::draft::Draft;
use state::store::RecipeStore;

/// Main application state
struct RecipeBox {
    /// The authoritative recipe collection
    store: RecipeStore,
    /// The in-progress form draft
    draft: Draft,
    /// Search text as typed into the box
    query: String,
    /// Search text actually applied to the card grid (set by the Search
    /// button, cleared by Reset and by any commit/delete)
    applied_query: String,
    /// Status message to display to the user
    status: String,
    /// Decoded card images keyed by recipe id
    art: HashMap<u64, Handle>,
    /// Decoded preview of the draft's image
    preview: Option<Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Initial fetch finished
    RecipesFetched(Result<Vec<Recipe>, String>),
    NameChanged(String),
    IngredientsChanged(String),
    InstructionsChanged(String),
    /// User clicked the image picker button
    PickImage,
    /// Selected image file was encoded (None when unreadable)
    ImageLoaded(Option<String>),
    SubmitDraft,
    EditRecipe(u64),
    DeleteRecipe(u64),
    QueryChanged(String),
    RunSearch,
    ResetSearch,
    /// Background download of a card image finished
    CardImageFetched(u64, Option<Vec<u8>>),
}

impl RecipeBox {
    /// Create a new instance and kick off the one-shot recipe fetch
    fn new() -> (Self, Task<Message>) {
        println!("🍳 Recipe Box starting, fetching {}", api::RECIPES_URL);

        (
            RecipeBox {
                store: RecipeStore::new(),
                draft: Draft::default(),
                query: String::new(),
                applied_query: String::new(),
                status: String::from("Loading recipes..."),
                art: HashMap::new(),
                preview: None,
            },
            Task::perform(api::fetch_recipes(), |result| {
                Message::RecipesFetched(result.map_err(|e| e.to_string()))
            }),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RecipesFetched(Ok(list)) => {
                if !self.store.load(list) {
                    return Task::none();
                }
                self.status = format!("Ready. {} recipes.", self.store.len());

                // Data-URI images decode right here; remote ones are
                // downloaded in the background, one task per card.
                let mut downloads = Vec::new();
                for recipe in self.store.iter() {
                    if media::is_remote_url(&recipe.image) {
                        let id = recipe.id;
                        downloads.push(Task::perform(
                            api::fetch_image_bytes(recipe.image.clone()),
                            move |bytes| Message::CardImageFetched(id, bytes),
                        ));
                    } else if let Some(bytes) = media::decode_data_uri(&recipe.image) {
                        self.art.insert(recipe.id, Handle::from_bytes(bytes));
                    }
                }
                Task::batch(downloads)
            }
            Message::RecipesFetched(Err(e)) => {
                // Logged only; the empty collection is still usable
                eprintln!("⚠️  Error fetching recipes: {e}");
                self.status = String::from("Ready.");
                Task::none()
            }
            Message::NameChanged(value) => {
                self.draft.name = value;
                Task::none()
            }
            Message::IngredientsChanged(value) => {
                self.draft.ingredients = value;
                Task::none()
            }
            Message::InstructionsChanged(value) => {
                self.draft.instructions = value;
                Task::none()
            }
            Message::PickImage => {
                // Native dialog, same pattern as any other picker: block on
                // the dialog, then encode the file off the UI thread
                if let Some(path) = media::pick_image_file() {
                    return Task::perform(media::load_as_data_uri(path), Message::ImageLoaded);
                }
                Task::none()
            }
            Message::ImageLoaded(Some(uri)) => {
                self.preview = media::decode_data_uri(&uri).map(Handle::from_bytes);
                self.draft.image = uri;
                Task::none()
            }
            Message::ImageLoaded(None) => Task::none(),
            Message::SubmitDraft => {
                if !self.draft.is_valid() {
                    self.status =
                        String::from("Name, ingredients and instructions are required.");
                    return Task::none();
                }

                let editing = self.draft.is_editing();
                let id = self.store.commit(&self.draft);

                if let Some(bytes) = media::decode_data_uri(&self.draft.image) {
                    self.art.insert(id, Handle::from_bytes(bytes));
                } else if self.draft.image.is_empty() {
                    self.art.remove(&id);
                }

                // Any active filter is dropped so the new entry is visible
                self.applied_query.clear();
                self.draft.clear();
                self.preview = None;
                self.status = String::from(if editing {
                    "Recipe updated."
                } else {
                    "Recipe added."
                });
                Task::none()
            }
            Message::EditRecipe(id) => {
                if let Some(recipe) = self.store.get(id) {
                    self.status = format!("Editing \"{}\".", recipe.name);
                    self.draft.begin_edit(recipe);
                    self.preview = self.art.get(&id).cloned();
                }
                Task::none()
            }
            Message::DeleteRecipe(id) => {
                if let Some(recipe) = self.store.remove(id) {
                    self.art.remove(&id);
                    self.applied_query.clear();
                    self.status = format!("Deleted \"{}\".", recipe.name);
                }
                Task::none()
            }
            Message::QueryChanged(value) => {
                self.query = value;
                Task::none()
            }
            Message::RunSearch => {
                self.applied_query = self.query.clone();
                Task::none()
            }
            Message::ResetSearch => {
                self.query.clear();
                self.applied_query.clear();
                Task::none()
            }
            Message::CardImageFetched(id, Some(bytes)) => {
                // The recipe may have been deleted while the download ran
                if self.store.get(id).is_some() {
                    self.art.insert(id, Handle::from_bytes(bytes));
                }
                Task::none()
            }
            Message::CardImageFetched(_, None) => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible = self.store.filtered(&self.applied_query);

        let panels = row![
            ui::form::view(&self.draft, self.preview.as_ref()),
            ui::cards::view(&visible, &self.art, &self.query),
        ]
        .spacing(30)
        .height(Length::Fill);

        let content = column![panels, text(&self.status).size(14)]
            .spacing(10)
            .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Recipe Box",
        RecipeBox::update,
        RecipeBox::view,
    )
    .theme(RecipeBox::theme)
    .centered()
    .run_with(RecipeBox::new)
}

use iced::widget::scrollable::{self, RelativeOffset};
use iced::widget::{button, column, container, image, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Task};
use iced_aw::Spinner;

use crate::core::api::parody_lookup::{MovieResult, ParodyLookup};
use crate::core::api::poster::{self, Poster};
use crate::core::search::{self, PendingSearch, RenderedMovie, SearchController, UiState};
use crate::gui::styles;

const POSTER_WIDTH: f32 = 240.0;
const POSTER_HEIGHT: f32 = 360.0;

#[derive(Debug, Clone)]
pub enum Message {
    TermChanged(String),
    TermSearched,
    SearchSettled(u64, Result<MovieResult, String>),
    PosterLoaded(u64, Option<Poster>),
}

pub struct Search {
    search_term: String,
    controller: SearchController,
    lookup: ParodyLookup,
    placeholder_poster_url: String,
    poster: Option<image::Handle>,
    scrollable_id: scrollable::Id,
}

impl Search {
    pub fn new(lookup: ParodyLookup, placeholder_poster_url: String) -> Self {
        Self {
            search_term: String::new(),
            controller: SearchController::new(),
            lookup,
            placeholder_poster_url,
            poster: None,
            scrollable_id: scrollable::Id::unique(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TermChanged(term) => {
                self.search_term = term;
                Task::none()
            }
            Message::TermSearched => {
                self.poster = None;

                let Some(PendingSearch { sequence, query }) =
                    self.controller.submit_search(&self.search_term)
                else {
                    return Task::none();
                };

                let lookup = self.lookup.clone();
                Task::perform(async move { lookup.search(&query).await }, move |res| {
                    Message::SearchSettled(sequence, res.map_err(|err| err.to_string()))
                })
            }
            Message::SearchSettled(sequence, outcome) => {
                let Some(poster_url) = self.settle(sequence, outcome) else {
                    return Task::none();
                };

                let client = self.lookup.client().clone();

                Task::batch([
                    scrollable::snap_to(self.scrollable_id.clone(), RelativeOffset::END),
                    Task::perform(poster::load_poster(client, poster_url), move |poster| {
                        Message::PosterLoaded(sequence, poster)
                    }),
                ])
            }
            Message::PosterLoaded(sequence, poster) => {
                if sequence == self.controller.latest_sequence() {
                    self.poster = poster.map(|poster| {
                        image::Handle::from_rgba(poster.width, poster.height, poster.rgba)
                    });
                }
                Task::none()
            }
        }
    }

    /// Applies a search outcome, giving the poster to load when it put a movie on display
    fn settle(&mut self, sequence: u64, outcome: Result<MovieResult, String>) -> Option<String> {
        if !self.controller.settle(sequence, outcome) {
            return None;
        }

        match self.controller.state() {
            UiState::Showing(movie) => {
                Some(movie.poster_url(&self.placeholder_poster_url).to_owned())
            }
            _ => None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search_view = search::render(self.controller.state(), &self.placeholder_poster_url);

        let search_bar = row![
            text_input("Enter a movie title...", &self.search_term)
                .on_input(Message::TermChanged)
                .on_submit(Message::TermSearched)
                .padding(10)
                .width(400),
            button(text("Search"))
                .on_press(Message::TermSearched)
                .padding(10)
                .style(styles::button_styles::search_button_theme),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let mut content = column![
            Space::with_height(10),
            text("Movie Parody Finder")
                .size(30)
                .style(styles::text_styles::accent_color_theme),
            text("Type a movie title and get its plot retold, badly").size(14),
            search_bar,
        ]
        .spacing(15)
        .padding(20)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        if search_view.loader_visible {
            content = content.push(container(Spinner::new()).center_x(Length::Fill));
        }

        if let Some(error) = search_view.error {
            content = content.push(text(error).style(styles::text_styles::red_text_theme));
        }

        if let Some(movie) = search_view.movie {
            content = content.push(self.movie_card(movie));
        }

        scrollable::Scrollable::new(content)
            .id(self.scrollable_id.clone())
            .direction(styles::scrollable_styles::vertical_direction())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn movie_card<'a>(&'a self, movie: RenderedMovie<'a>) -> Element<'a, Message> {
        let poster: Element<'_, Message> = match &self.poster {
            Some(handle) => image(handle.clone()).width(POSTER_WIDTH).into(),
            None => container(Space::new(POSTER_WIDTH, POSTER_HEIGHT))
                .style(styles::container_styles::poster_frame_container_theme)
                .into(),
        };

        let details: Column<'_, Message> = column![
            text(movie.title)
                .size(26)
                .style(styles::text_styles::accent_color_theme),
            text(movie.year).size(14),
            text(movie.genre).size(14),
            Space::with_height(10),
            text("The Parody").size(18),
            text(movie.parody).size(16),
        ]
        .spacing(5)
        .width(Length::Fill);

        container(row![poster, details].spacing(20))
            .padding(20)
            .max_width(900)
            .style(styles::container_styles::first_class_container_rounded_theme)
            .into()
    }
}

use iced::widget::{column, container, pick_list, row, text, Space};
use iced::{Element, Length, Task};
use tracing::error;

use crate::core::api::parody_lookup::ParodyLookup;
use crate::core::settings_config::{Settings, Theme, ALL_THEMES};
use searching::{Message as SearchMessage, Search};
use styles::theme::ParodyTheme;

pub mod searching;
mod styles;

#[derive(Debug, Clone)]
pub enum Message {
    Search(SearchMessage),
    ThemeSelected(Theme),
}

pub struct ParodyGui {
    settings: Settings,
    search: Search,
}

/// Opens the main window and blocks until it is closed
pub fn run(settings: Settings, lookup: ParodyLookup) -> iced::Result {
    iced::application(ParodyGui::title, ParodyGui::update, ParodyGui::view)
        .theme(ParodyGui::theme)
        .window_size((900.0, 800.0))
        .run_with(move || ParodyGui::new(settings, lookup))
}

impl ParodyGui {
    fn new(settings: Settings, lookup: ParodyLookup) -> (Self, Task<Message>) {
        let search = Search::new(lookup, settings.lookup.placeholder_poster_url.clone());

        (Self { settings, search }, Task::none())
    }

    fn title(&self) -> String {
        "Parody Finder".to_string()
    }

    fn theme(&self) -> iced::Theme {
        ParodyTheme::from(&self.settings.appearance.theme).get_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(message) => self.search.update(message).map(Message::Search),
            Message::ThemeSelected(theme) => {
                self.settings.appearance.theme = theme;
                if let Err(err) = self.settings.save() {
                    error!("failed to save settings: {}", err);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let theme_picker = row![
            Space::with_width(Length::Fill),
            text("Theme").size(14),
            pick_list(
                ALL_THEMES,
                Some(self.settings.appearance.theme.clone()),
                Message::ThemeSelected
            )
            .text_size(14),
        ]
        .spacing(10)
        .padding(10)
        .align_y(iced::Alignment::Center);

        let content = column![theme_picker, self.search.view().map(Message::Search)];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

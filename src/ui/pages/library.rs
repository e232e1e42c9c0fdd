//! Library page - locally indexed songs
//! Directory selection plus a click-to-play song list

use iced::widget::{Space, button, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::{LibraryPageState, Message};
use crate::ui::{icons, theme};

/// Build the library page view
pub fn view(state: &LibraryPageState) -> Element<'_, Message> {
    let title = text("My Library").size(24).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let select_button = button(
        row![
            svg(svg::Handle::from_memory(icons::FOLDER.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            Space::new().width(8),
            text("Select Directory").size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding(iced::Padding::new(8.0).left(16.0).right(16.0))
    .style(theme::secondary_button)
    .on_press(Message::SelectDirectory);

    let directory_line: Element<'_, Message> = if let Some(directory) = &state.directory {
        text(format!("Selected Directory: {}", directory))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .into()
    } else {
        Space::new().width(0).height(0).into()
    };

    let list: Element<'_, Message> = if state.songs.is_empty() {
        container(
            text("No files available.")
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .width(Fill)
        .padding(24)
        .align_x(Alignment::Center)
        .into()
    } else {
        let rows = column(state.songs.iter().map(|song| {
            button(text(&song.title).size(14))
                .width(Fill)
                .padding(10)
                .style(theme::list_row)
                .on_press(Message::PlaySong(song.title.clone()))
                .into()
        }))
        .spacing(4);

        scrollable(rows).width(Fill).height(Fill).into()
    };

    let list_panel = container(list)
        .width(Fill)
        .height(Fill)
        .padding(8)
        .style(theme::card);

    container(
        column![
            title,
            Space::new().height(16),
            row![select_button].align_y(Alignment::Center),
            Space::new().height(8),
            directory_line,
            Space::new().height(16),
            list_panel,
        ]
        .width(Fill)
        .height(Fill),
    )
    .width(Fill)
    .height(Fill)
    .padding(24)
    .into()
}

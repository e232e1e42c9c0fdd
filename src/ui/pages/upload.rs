//! Upload page - share a sample URL or preset files

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, UploadPageState};
use crate::ui::{icons, theme};

const FORM_WIDTH: f32 = 420.0;

/// Build the upload page view
pub fn view(state: &UploadPageState) -> Element<'_, Message> {
    let url_header = text("Upload Sample URL")
        .size(20)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let title_label = label("Title (Optional)");
    let title_input = text_input("Enter title", &state.title)
        .on_input(Message::UploadTitleChanged)
        .padding(10)
        .size(14)
        .style(theme::input);

    let url_label = label("URL");
    let url_input = text_input("Enter web URL", &state.url)
        .on_input(Message::UploadUrlChanged)
        .on_submit(Message::SubmitSampleUrl)
        .padding(10)
        .size(14)
        .style(theme::input);

    let submit_button = button(
        row![
            svg(svg::Handle::from_memory(icons::UPLOAD.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(iced::Color::WHITE),
                }),
            Space::new().width(8),
            text("Upload Sample").size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding(iced::Padding::new(8.0).left(16.0).right(16.0))
    .style(theme::primary_button)
    .on_press(Message::SubmitSampleUrl);

    let files_header = text("Upload FXP Files")
        .size(20)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let files_hint = text("(for Serum)").size(13).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    });

    let pick_button = button(
        row![
            svg(svg::Handle::from_memory(icons::UPLOAD.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            Space::new().width(8),
            text("Select Files Manually").size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding(iced::Padding::new(8.0).left(16.0).right(16.0))
    .style(theme::secondary_button)
    .on_press(Message::PickUploadFiles);

    let status = text(state.status.as_deref().unwrap_or(""))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let form = column![
        url_header,
        Space::new().height(16),
        title_label,
        Space::new().height(4),
        title_input,
        Space::new().height(12),
        url_label,
        Space::new().height(4),
        url_input,
        Space::new().height(16),
        submit_button,
        Space::new().height(32),
        files_header,
        files_hint,
        Space::new().height(12),
        pick_button,
        Space::new().height(16),
        status,
    ]
    .width(FORM_WIDTH);

    let card = container(form).padding(24).style(theme::card);

    container(card)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .padding(24)
        .into()
}

fn label(value: &str) -> Element<'_, Message> {
    text(value)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

//! Bottom playback footer component
//!
//! Read-only mirror of the backend player plus pause and volume controls.

use iced::widget::{Space, button, column, container, row, slider, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{FooterState, Message};
use crate::ui::{icons, theme};

/// Footer height
pub const FOOTER_HEIGHT: f32 = 64.0;

/// Build the playback footer
pub fn view(state: &FooterState) -> Element<'_, Message> {
    let now_playing = match &state.now_playing {
        Some(title) => format!("Now playing: {}", title),
        None => "No song is currently playing".to_string(),
    };

    let now_playing_text = text(now_playing).size(14).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    // Pause flips to a play glyph while paused
    let pause_icon = if state.paused {
        icons::PLAY
    } else {
        icons::PAUSE
    };
    let pause_button = button(
        svg(svg::Handle::from_memory(pause_icon.as_bytes()))
            .width(18)
            .height(18)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_primary(theme)),
            }),
    )
    .padding(8)
    .style(theme::icon_button)
    .on_press(Message::TogglePause);

    let volume_icon = svg(svg::Handle::from_memory(icons::VOLUME.as_bytes()))
        .width(18)
        .height(18)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let volume_slider = slider(0..=100u8, state.volume, Message::VolumeChanged).width(150);

    let controls = row![
        pause_button,
        Space::new().width(12),
        volume_icon,
        Space::new().width(8),
        volume_slider,
    ]
    .align_y(Alignment::Center);

    let content = row![now_playing_text, Space::new().width(Fill), controls]
        .align_y(Alignment::Center)
        .padding(Padding::new(12.0).left(16.0).right(16.0));

    // Top border line
    let top_border = container(Space::new().height(0))
        .width(Fill)
        .height(1)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::divider(theme))),
            ..Default::default()
        });

    let bar = container(content)
        .width(Fill)
        .height(FOOTER_HEIGHT - 1.0)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::footer_bg(theme))),
            ..Default::default()
        });

    column![top_border, bar]
        .width(Fill)
        .height(FOOTER_HEIGHT)
        .into()
}

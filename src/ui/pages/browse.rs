//! Browse page - shared samples and presets
//! Two lists behind a toggle, with client-side sorting, refresh, download,
//! and owner-only removal

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::SharedItem;
use crate::app::{BrowsePageState, ListKind, Message, SortKey};
use crate::ui::{icons, theme};

/// Build the browse page view
pub fn view<'a>(
    state: &'a BrowsePageState,
    current_user: Option<&'a str>,
) -> Element<'a, Message> {
    let samples_button = button(text("Sample URLs").size(14))
        .padding(Padding::new(8.0).left(16.0).right(16.0))
        .style(theme::toggle_button(state.list_kind == ListKind::Samples))
        .on_press(Message::BrowseToggle(ListKind::Samples));

    let presets_button = button(text("Presets").size(14))
        .padding(Padding::new(8.0).left(16.0).right(16.0))
        .style(theme::toggle_button(state.list_kind == ListKind::Presets))
        .on_press(Message::BrowseToggle(ListKind::Presets));

    let sort_picker = pick_list(SortKey::ALL, Some(state.sort_key), Message::BrowseSortChanged)
        .text_size(13)
        .padding(8);

    let refresh_button = button(
        svg(svg::Handle::from_memory(icons::REFRESH.as_bytes()))
            .width(18)
            .height(18)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(8)
    .style(theme::icon_button)
    .on_press_maybe((!state.refreshing).then_some(Message::BrowseRefresh));

    let toolbar = row![
        samples_button,
        Space::new().width(8),
        presets_button,
        Space::new().width(Fill),
        text("Sort by").size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
        Space::new().width(8),
        sort_picker,
        Space::new().width(12),
        refresh_button,
    ]
    .align_y(Alignment::Center);

    let list: Element<'_, Message> = if state.loading {
        container(
            text("Loading data...").size(14).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        )
        .width(Fill)
        .padding(24)
        .align_x(Alignment::Center)
        .into()
    } else if state.displayed().is_empty() {
        container(
            text("Nothing here yet.").size(14).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        )
        .width(Fill)
        .padding(24)
        .align_x(Alignment::Center)
        .into()
    } else {
        let rows = column(state.displayed().iter().map(|item| {
            match state.list_kind {
                ListKind::Samples => sample_row(item, current_user),
                ListKind::Presets => preset_row(item),
            }
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
        column![toolbar, Space::new().height(16), list_panel]
            .width(Fill)
            .height(Fill),
    )
    .width(Fill)
    .height(Fill)
    .padding(24)
    .into()
}

/// A clickable sample row; opens the URL externally, with owner-only removal
fn sample_row<'a>(item: &'a SharedItem, current_user: Option<&'a str>) -> Element<'a, Message> {
    let open_button = button(
        row![
            text(&item.title).size(14),
            Space::new().width(12),
            svg(svg::Handle::from_memory(icons::EXTERNAL_LINK.as_bytes()))
                .width(14)
                .height(14)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::icon_muted(theme)),
                }),
            Space::new().width(Fill),
            uploader_text(&item.uploaded_by),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(10)
    .style(theme::list_row)
    .on_press(Message::OpenSampleUrl(item.url.clone()));

    // Removal is offered only for the viewer's own uploads
    let is_owner = current_user == Some(item.uploaded_by.as_str());
    if is_owner {
        let remove_button = button(
            svg(svg::Handle::from_memory(icons::TRASH.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::danger(theme)),
                }),
        )
        .padding(8)
        .style(theme::icon_button)
        .on_press(Message::RemoveSample(item.title.clone()));

        row![open_button, Space::new().width(8), remove_button]
            .align_y(Alignment::Center)
            .into()
    } else {
        open_button.into()
    }
}

/// A preset row; not clickable, offers a download action instead
fn preset_row(item: &SharedItem) -> Element<'_, Message> {
    let download_button = button(
        svg(svg::Handle::from_memory(icons::DOWNLOAD.as_bytes()))
            .width(16)
            .height(16)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(8)
    .style(theme::icon_button)
    .on_press(Message::DownloadPreset(item.title.clone()));

    container(
        row![
            text(&item.title).size(14).style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
            Space::new().width(Fill),
            uploader_text(&item.uploaded_by),
            Space::new().width(12),
            download_button,
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(Padding::new(6.0).left(10.0).right(10.0))
    .into()
}

fn uploader_text(uploaded_by: &str) -> Element<'_, Message> {
    text(uploaded_by)
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        })
        .into()
}

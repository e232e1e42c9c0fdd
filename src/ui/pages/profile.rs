//! Profile page - friends list management

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, ProfilePageState};
use crate::ui::theme;

/// Build the profile page view
pub fn view(state: &ProfilePageState) -> Element<'_, Message> {
    let title = text("Profile").size(24).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    // Friends column
    let friends_header = text("Friends").size(18).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let friends_list: Element<'_, Message> = if state.friends.is_empty() {
        text("No friends yet.")
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    } else {
        let rows = column(state.friends.iter().map(|friend| {
            let remove_button = button(text("✖").size(12))
                .padding(6)
                .style(theme::text_button)
                .on_press(Message::RemoveFriend(friend.clone()));

            container(
                row![
                    text(friend).size(14).style(|theme| text::Style {
                        color: Some(theme::text_primary(theme)),
                    }),
                    Space::new().width(Fill),
                    remove_button,
                ]
                .align_y(Alignment::Center),
            )
            .width(Fill)
            .padding(6)
            .into()
        }))
        .spacing(2);

        scrollable(rows).width(Fill).height(Fill).into()
    };

    let friends_panel = container(
        column![friends_header, Space::new().height(12), friends_list]
            .width(Fill)
            .height(Fill),
    )
    .width(Fill)
    .height(Fill)
    .padding(16)
    .style(theme::card);

    // Add friend column
    let add_header = text("Add Friend").size(18).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let friend_input = text_input("Enter your friend's username", &state.friend_input)
        .on_input(Message::FriendInputChanged)
        .on_submit(Message::AddFriend)
        .padding(10)
        .size(14)
        .style(theme::input);

    let add_button = button(text("Add Friend").size(14))
        .padding(iced::Padding::new(8.0).left(16.0).right(16.0))
        .style(theme::primary_button)
        .on_press(Message::AddFriend);

    let status = text(state.status.as_deref().unwrap_or(""))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let add_panel = container(
        column![
            add_header,
            Space::new().height(12),
            friend_input,
            Space::new().height(12),
            add_button,
            Space::new().height(12),
            status,
        ]
        .width(Fill),
    )
    .width(Fill)
    .padding(16)
    .style(theme::card);

    let layout = row![friends_panel, Space::new().width(16), add_panel]
        .width(Fill)
        .height(Fill);

    container(
        column![title, Space::new().height(16), layout]
            .width(Fill)
            .height(Fill),
    )
    .width(Fill)
    .height(Fill)
    .padding(24)
    .into()
}

//! Login page - credentials form with a registration mode
//! The only view rendered while no session exists

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::{LoginPageState, Message};
use crate::ui::{icons, theme};

const FORM_WIDTH: f32 = 320.0;

/// Build the login page view
pub fn view(state: &LoginPageState) -> Element<'_, Message> {
    let title = text(if state.registering { "Register" } else { "Login" })
        .size(28)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let submit_message = if state.registering {
        Message::SubmitRegister
    } else {
        Message::SubmitLogin
    };

    let username_input = text_input("Username", &state.username)
        .on_input(Message::LoginUsernameChanged)
        .on_submit(submit_message.clone())
        .padding(10)
        .size(14)
        .style(theme::input);

    let password_input = text_input("Password", &state.password)
        .on_input(Message::LoginPasswordChanged)
        .on_submit(submit_message.clone())
        .secure(!(state.registering && state.show_password))
        .padding(10)
        .size(14)
        .style(theme::input);

    // Registration mode gets a show-password toggle next to the field
    let password_field: Element<'_, Message> = if state.registering {
        let eye_icon = if state.show_password {
            icons::EYE_OFF
        } else {
            icons::EYE
        };
        let eye_button = button(
            svg(svg::Handle::from_memory(eye_icon.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        )
        .padding(8)
        .style(theme::icon_button)
        .on_press(Message::TogglePasswordVisibility);

        row![password_input, Space::new().width(8), eye_button]
            .align_y(Alignment::Center)
            .into()
    } else {
        password_input.into()
    };

    let submit_button = button(
        text(if state.registering { "Register" } else { "Login" })
            .size(14)
            .width(Fill)
            .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(10)
    .style(theme::primary_button)
    .on_press(submit_message);

    let status = text(state.status.as_deref().unwrap_or(""))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let mode_toggle = button(
        text(if state.registering {
            "Back to Login"
        } else {
            "Create an Account"
        })
        .size(13),
    )
    .padding(4)
    .style(theme::text_button)
    .on_press(Message::ToggleRegistering);

    let form = column![
        title,
        Space::new().height(24),
        username_input,
        Space::new().height(12),
        password_field,
        Space::new().height(20),
        submit_button,
        Space::new().height(12),
        status,
        Space::new().height(12),
        mode_toggle,
    ]
    .align_x(Alignment::Center)
    .width(FORM_WIDTH);

    let card = container(form).padding(32).style(theme::card);

    container(card)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(theme::main_content)
        .into()
}

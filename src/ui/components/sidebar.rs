//! Left sidebar navigation component
//! Narrow icon rail issuing page-change requests, with logout at the bottom

use iced::widget::{Space, button, column, container, svg};
use iced::{Element, Fill};

use crate::app::Message;
use crate::ui::{icons, theme};

/// Sidebar width
pub const SIDEBAR_WIDTH: f32 = 64.0;

/// Navigation pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Shared samples and presets browser
    #[default]
    Home,
    /// Upload new content
    Add,
    /// Profile and friends
    Profile,
    /// Local music library
    Library,
}

impl Page {
    pub fn icon_svg(&self) -> &'static str {
        match self {
            Page::Home => icons::HOME,
            Page::Add => icons::PLUS,
            Page::Profile => icons::USER,
            Page::Library => icons::MUSIC,
        }
    }
}

/// Build the sidebar component
pub fn view(active: Page) -> Element<'static, Message> {
    let nav_items = [Page::Profile, Page::Add, Page::Library, Page::Home];
    let nav_menu = column(
        nav_items
            .into_iter()
            .map(|page| nav_button(page.icon_svg(), page == active, Message::Navigate(page))),
    )
    .spacing(8);

    let logout = nav_button(icons::LOGOUT, false, Message::Logout);

    let content = column![nav_menu, Space::new().height(Fill), logout]
        .width(Fill)
        .height(Fill)
        .padding(12);

    container(content)
        .width(SIDEBAR_WIDTH)
        .height(Fill)
        .style(theme::sidebar)
        .into()
}

/// Icon button for the rail; accent-colored when active
fn nav_button(icon_svg: &'static str, is_active: bool, message: Message) -> Element<'static, Message> {
    let icon = svg(svg::Handle::from_memory(icon_svg.as_bytes()))
        .width(20)
        .height(20)
        .style(move |theme, _status| svg::Style {
            color: Some(if is_active {
                theme::ACCENT
            } else {
                theme::text_secondary(theme)
            }),
        });

    button(container(icon).center_x(40).center_y(40))
        .padding(0)
        .style(theme::icon_button)
        .on_press(message)
        .into()
}

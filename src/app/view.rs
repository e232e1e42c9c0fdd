// src/app/view.rs
//! Application view rendering
//!
//! The rendered tree is a pure function of `(is_logged_in, page)`: no
//! session means the login page and nothing else; an active session gets
//! the sidebar, the routed page, and the playback footer.

use iced::widget::{Space, column, container, row, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::Page;
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        if !self.core.is_logged_in {
            return pages::login::view(&self.ui.login);
        }

        // Left sidebar
        let sidebar = components::sidebar::view(self.ui.page);

        // Routed page content
        let page_content = match self.ui.page {
            Page::Home => pages::browse::view(&self.ui.browse, self.core.current_user.as_deref()),
            Page::Add => pages::upload::view(&self.ui.upload),
            Page::Profile => pages::profile::view(&self.ui.profile),
            Page::Library => pages::library::view(&self.ui.library),
        };

        let main_content = container(page_content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Playback footer, always visible while logged in
        let footer = components::footer::view(&self.ui.footer);

        let main_layout: Element<'_, Message> = column![
            row![sidebar, main_content].width(Fill).height(Fill),
            footer,
        ]
        .width(Fill)
        .height(Fill)
        .into();

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if self.ui.toast_visible {
            if let Some(toast) = &self.ui.toast {
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .padding(20)
                    .align_x(Alignment::Center)
                    .into()
            } else {
                Space::new().width(0).height(0).into()
            }
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![main_layout, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}

// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::{App, Message};
use crate::ui::components::Page;

impl App {
    /// Handle navigation messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(page) => {
                self.ui.page = *page;
                // Entering a page re-reads its backend caches, the way the
                // views seed themselves when they first appear.
                match page {
                    Page::Home => Some(self.load_browse_caches()),
                    Page::Library => Some(self.load_library()),
                    Page::Profile => Some(self.load_friends()),
                    Page::Add => Some(Task::none()),
                }
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};
    use crate::ui::components::Page;

    #[test]
    fn sidebar_requests_switch_the_active_page() {
        let mut app = App::new().0;
        for page in [Page::Profile, Page::Add, Page::Library, Page::Home] {
            let _ = app.update(Message::Navigate(page));
            assert_eq!(app.ui.page, page);
        }
    }

    #[test]
    fn default_page_is_the_browser() {
        assert_eq!(Page::default(), Page::Home);
    }
}

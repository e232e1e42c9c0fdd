// src/app/update/toast.rs
//! Toast notification handlers

use iced::Task;

use crate::app::{App, Message};
use crate::ui::widgets::Toast;

impl App {
    /// Handle toast messages
    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowToast(msg) => {
                self.ui.toast = Some(Toast::success(msg.clone()));
                self.ui.toast_visible = true;
                // Auto-hide toast after 3 seconds
                Some(Task::perform(
                    async {
                        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                    },
                    |_| Message::HideToast,
                ))
            }

            Message::ShowErrorToast(msg) => {
                self.ui.toast = Some(Toast::error(msg.clone()));
                self.ui.toast_visible = true;
                // Auto-hide error toast after 4 seconds
                Some(Task::perform(
                    async {
                        tokio::time::sleep(std::time::Duration::from_secs(4)).await;
                    },
                    |_| Message::HideToast,
                ))
            }

            Message::HideToast => {
                self.ui.toast_visible = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

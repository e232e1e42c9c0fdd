//! Message update handlers - thin dispatcher delegating to submodules

mod browse;
mod library;
mod navigation;
mod playback;
mod profile;
mod session;
mod toast;
mod upload;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_session(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_browse(&message) {
            return task;
        }
        if let Some(task) = self.handle_library(&message) {
            return task;
        }
        if let Some(task) = self.handle_profile(&message) {
            return task;
        }
        if let Some(task) = self.handle_upload(&message) {
            return task;
        }
        if let Some(task) = self.handle_playback(&message) {
            return task;
        }
        if let Some(task) = self.handle_toast(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::{Message, UploadBatch};
pub use state::{
    App, BrowsePageState, CoreState, FooterState, LibraryPageState, ListKind, LoginPageState,
    ProfilePageState, SortKey, UiState, UploadPageState,
};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Load settings first so the bridge client points at the right backend
        let settings = crate::features::Settings::load();
        let core = CoreState::new(settings);

        let mut ui = UiState::new();
        ui.footer.volume = core.settings.playback.volume;

        // Everything else waits for a session: the login view is the only
        // thing rendered until the backend confirms credentials.
        (Self { core, ui }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dynamic window title based on current playback state
    pub fn title(&self) -> String {
        if let Some(song) = &self.ui.footer.now_playing {
            format!("Patchbay - {}", song)
        } else {
            "Patchbay".to_string()
        }
    }

    /// Subscriptions: the now-playing poll, bounded by session lifetime
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        if subscription_logic::needs_playback_poll(self.core.is_logged_in) {
            let interval = subscription_logic::effective_poll_interval(
                self.core.settings.playback.poll_interval_ms,
            );
            iced::time::every(Duration::from_millis(interval)).map(|_| Message::PlaybackTick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Minimum poll interval; anything shorter would just spin
    const MIN_POLL_INTERVAL_MS: u64 = 10;

    pub fn needs_playback_poll(is_logged_in: bool) -> bool {
        is_logged_in
    }

    pub fn effective_poll_interval(configured_ms: u64) -> u64 {
        configured_ms.max(MIN_POLL_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn poll_runs_only_while_a_session_is_active() {
        assert!(needs_playback_poll(true));
        assert!(!needs_playback_poll(false));
    }

    #[test]
    fn configured_interval_is_respected() {
        assert_eq!(effective_poll_interval(100), 100);
        assert_eq!(effective_poll_interval(500), 500);
    }

    #[test]
    fn degenerate_intervals_are_clamped() {
        assert_eq!(effective_poll_interval(0), 10);
        assert_eq!(effective_poll_interval(3), 10);
    }
}

// src/app/update/playback.rs
//! Playback footer handlers
//!
//! The footer mirrors the backend player: the title comes from a recurring
//! poll, pause state and volume are pushed down and only reflected locally
//! once the backend confirms.

use iced::Task;
use tracing::{debug, error, warn};

use crate::app::{App, Message};

/// Rescale a 0-100 slider position to the backend's 0.0-1.0 volume
pub fn normalize_volume(volume: u8) -> f32 {
    f32::from(volume) / 100.0
}

impl App {
    /// Handle playback footer messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PlaybackTick => {
                let client = self.core.client.clone();
                Some(Task::perform(
                    async move { client.current_song_playing().await },
                    Message::NowPlayingLoaded,
                ))
            }

            Message::NowPlayingLoaded(result) => {
                match result {
                    Ok(title) => self.ui.footer.now_playing = title.clone(),
                    // Poll errors are logged, not surfaced; the next tick retries
                    Err(e) => debug!("Error fetching current song: {}", e),
                }
                Some(Task::none())
            }

            Message::TogglePause => {
                let client = self.core.client.clone();
                let target_paused = !self.ui.footer.paused;
                Some(Task::perform(
                    async move {
                        let result = if target_paused {
                            client.pause_song().await
                        } else {
                            client.unpause_song().await
                        };
                        (target_paused, result)
                    },
                    |(target, result)| Message::PauseToggled(target, result),
                ))
            }

            Message::PauseToggled(target, result) => match result {
                Ok(()) => {
                    debug!("Song {}", if *target { "paused" } else { "unpaused" });
                    self.ui.footer.paused = *target;
                    Some(Task::none())
                }
                Err(e) => {
                    error!("Error toggling pause: {}", e);
                    Some(Task::done(Message::ShowErrorToast(
                        "Playback control failed.".to_string(),
                    )))
                }
            },

            Message::VolumeChanged(volume) => {
                self.ui.footer.volume = *volume;
                self.core.settings.playback.volume = *volume;
                if let Err(e) = self.core.settings.save() {
                    warn!("Failed to save settings: {}", e);
                }

                let client = self.core.client.clone();
                let vol = normalize_volume(*volume);
                Some(Task::perform(
                    async move { client.set_volume(vol).await },
                    Message::VolumeSet,
                ))
            }

            Message::VolumeSet(result) => {
                match result {
                    Ok(()) => debug!("Volume set"),
                    Err(e) => error!("Error changing volume: {}", e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BridgeError;
    use crate::app::App;

    #[test]
    fn slider_value_rescales_linearly() {
        assert_eq!(normalize_volume(40), 0.4);
        assert_eq!(normalize_volume(0), 0.0);
        assert_eq!(normalize_volume(100), 1.0);
    }

    #[test]
    fn poll_results_mirror_the_backend() {
        let mut app = App::new().0;
        let _ = app.update(Message::NowPlayingLoaded(Ok(Some("Song A".into()))));
        assert_eq!(app.ui.footer.now_playing.as_deref(), Some("Song A"));

        let _ = app.update(Message::NowPlayingLoaded(Ok(None)));
        assert_eq!(app.ui.footer.now_playing, None);

        // Alternating backend answers alternate the mirror
        let _ = app.update(Message::NowPlayingLoaded(Ok(Some("Song A".into()))));
        assert_eq!(app.ui.footer.now_playing.as_deref(), Some("Song A"));
    }

    #[test]
    fn poll_errors_keep_the_last_known_title() {
        let mut app = App::new().0;
        let _ = app.update(Message::NowPlayingLoaded(Ok(Some("Song A".into()))));
        let _ = app.update(Message::NowPlayingLoaded(Err(BridgeError::Network(
            "down".into(),
        ))));
        assert_eq!(app.ui.footer.now_playing.as_deref(), Some("Song A"));
    }

    #[test]
    fn pause_state_only_flips_after_backend_success() {
        let mut app = App::new().0;
        assert!(!app.ui.footer.paused);

        let _ = app.update(Message::PauseToggled(
            true,
            Err(BridgeError::Backend("no sink".into())),
        ));
        assert!(!app.ui.footer.paused);

        let _ = app.update(Message::PauseToggled(true, Ok(())));
        assert!(app.ui.footer.paused);

        let _ = app.update(Message::PauseToggled(false, Ok(())));
        assert!(!app.ui.footer.paused);
    }
}

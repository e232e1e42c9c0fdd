// src/app/update/library.rs
//! Local library handlers

use iced::Task;
use tracing::{debug, error, info, warn};

use crate::app::helpers::open_folder_dialog;
use crate::app::{App, Message};

impl App {
    /// Read the configured directory and indexed songs from the backend cache
    pub(crate) fn load_library(&mut self) -> Task<Message> {
        let dir_client = self.core.client.clone();
        let songs_client = self.core.client.clone();
        Task::batch([
            Task::perform(
                async move { dir_client.directory_path().await },
                |result| match result {
                    Ok(path) => Message::DirectoryPathLoaded(path),
                    Err(e) => {
                        warn!("Could not load cached directory: {}", e);
                        Message::DirectoryPathLoaded(None)
                    }
                },
            ),
            Task::perform(
                async move { songs_client.cached_songs().await },
                Message::SongsLoaded,
            ),
        ])
    }

    /// Handle library messages
    pub fn handle_library(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectDirectory => Some(Task::perform(
                open_folder_dialog(),
                Message::DirectoryPicked,
            )),

            Message::DirectoryPicked(selection) => {
                let Some(path) = selection else {
                    // User dismissed the folder picker
                    debug!("Directory selection cancelled");
                    return Some(Task::none());
                };
                let path = path.to_string_lossy().to_string();
                self.ui.library.directory = Some(path.clone());

                let client = self.core.client.clone();
                Some(Task::perform(
                    async move {
                        let result = client.set_directory(&path).await;
                        (path, result)
                    },
                    |(path, result)| Message::DirectorySet(path, result),
                ))
            }

            Message::DirectorySet(path, result) => match result {
                Ok(()) => {
                    info!("Directory set: {}", path);
                    // The backend re-indexed; pull the fresh song list
                    let client = self.core.client.clone();
                    Some(Task::perform(
                        async move { client.cached_songs().await },
                        Message::SongsLoaded,
                    ))
                }
                Err(e) => {
                    error!("Failed to set directory '{}': {}", path, e);
                    Some(Task::done(Message::ShowErrorToast(
                        "Could not set the music directory.".to_string(),
                    )))
                }
            },

            Message::DirectoryPathLoaded(path) => {
                if path.is_some() {
                    self.ui.library.directory = path.clone();
                }
                Some(Task::none())
            }

            Message::SongsLoaded(result) => match result {
                Ok(songs) => {
                    debug!("Loaded {} songs", songs.len());
                    self.ui.library.songs = songs.clone();
                    Some(Task::none())
                }
                Err(e) => {
                    error!("Failed to load songs: {}", e);
                    Some(Task::done(Message::ShowErrorToast(
                        "Could not load the song list.".to_string(),
                    )))
                }
            },

            Message::PlaySong(title) => {
                let client = self.core.client.clone();
                let title = title.clone();
                Some(Task::perform(
                    async move {
                        let result = client.play_song(&title).await;
                        (title, result)
                    },
                    |(title, result)| Message::SongPlayed(title, result),
                ))
            }

            Message::SongPlayed(title, result) => match result {
                Ok(()) => {
                    info!("Now playing: {}", title);
                    Some(Task::none())
                }
                Err(e) => {
                    error!("Failed to play '{}': {}", title, e);
                    Some(Task::done(Message::ShowErrorToast(
                        "Could not play the song.".to_string(),
                    )))
                }
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::LocalSong;
    use crate::app::{App, Message};

    #[test]
    fn cached_directory_seeds_the_page() {
        let mut app = App::new().0;
        let _ = app.update(Message::DirectoryPathLoaded(Some("/music".into())));
        assert_eq!(app.ui.library.directory.as_deref(), Some("/music"));
    }

    #[test]
    fn absent_cached_directory_keeps_the_current_value() {
        let mut app = App::new().0;
        app.ui.library.directory = Some("/already".into());
        let _ = app.update(Message::DirectoryPathLoaded(None));
        assert_eq!(app.ui.library.directory.as_deref(), Some("/already"));
    }

    #[test]
    fn loaded_songs_replace_the_list_wholesale() {
        let mut app = App::new().0;
        app.ui.library.songs = vec![LocalSong {
            title: "old.mp3".into(),
        }];
        let _ = app.update(Message::SongsLoaded(Ok(vec![
            LocalSong {
                title: "one.mp3".into(),
            },
            LocalSong {
                title: "two.flac".into(),
            },
        ])));
        let titles: Vec<_> = app
            .ui
            .library
            .songs
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, ["one.mp3", "two.flac"]);
    }
}

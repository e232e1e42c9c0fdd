// src/app/update/browse.rs
//! Shared samples/presets browser handlers

use iced::Task;
use tracing::{debug, error, info, warn};

use crate::api::SharedItem;
use crate::app::helpers::save_preset_dialog;
use crate::app::state::{ListKind, SortKey};
use crate::app::{App, Message};

impl App {
    /// Read both shared lists from the backend cache
    ///
    /// An empty cache answer triggers the full server fetch for that list,
    /// handled in the loaded-message arms below.
    pub(crate) fn load_browse_caches(&mut self) -> Task<Message> {
        self.ui.browse.loading = true;
        let samples_client = self.core.client.clone();
        let presets_client = self.core.client.clone();
        Task::batch([
            Task::perform(
                async move { samples_client.cached_samples().await },
                Message::CachedSamplesLoaded,
            ),
            Task::perform(
                async move { presets_client.cached_presets().await },
                Message::CachedPresetsLoaded,
            ),
        ])
    }

    fn fetch_samples(&mut self) -> Task<Message> {
        self.ui.browse.refreshing = true;
        let client = self.core.client.clone();
        Task::perform(
            async move { client.fetch_all_samples().await },
            Message::SamplesFetched,
        )
    }

    fn fetch_presets(&mut self) -> Task<Message> {
        self.ui.browse.refreshing = true;
        let client = self.core.client.clone();
        Task::perform(
            async move { client.fetch_all_presets().await },
            Message::PresetsFetched,
        )
    }

    fn set_samples(&mut self, items: &[SharedItem]) {
        self.ui.browse.samples = items.to_vec();
        sort_items(&mut self.ui.browse.samples, self.ui.browse.sort_key);
    }

    fn set_presets(&mut self, items: &[SharedItem]) {
        self.ui.browse.presets = items.to_vec();
        sort_items(&mut self.ui.browse.presets, self.ui.browse.sort_key);
    }

    /// Handle browser messages
    pub fn handle_browse(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::BrowseToggle(kind) => {
                self.ui.browse.list_kind = *kind;
                Some(self.load_browse_caches())
            }

            Message::BrowseSortChanged(key) => {
                self.ui.browse.sort_key = *key;
                sort_items(&mut self.ui.browse.samples, *key);
                sort_items(&mut self.ui.browse.presets, *key);
                Some(Task::none())
            }

            Message::BrowseRefresh => {
                if self.ui.browse.refreshing {
                    return Some(Task::none());
                }
                Some(match self.ui.browse.list_kind {
                    ListKind::Samples => self.fetch_samples(),
                    ListKind::Presets => self.fetch_presets(),
                })
            }

            Message::CachedSamplesLoaded(result) => {
                self.ui.browse.loading = false;
                match result {
                    Ok(items) if items.is_empty() => {
                        debug!("No cached samples found, refreshing");
                        Some(self.fetch_samples())
                    }
                    Ok(items) => {
                        self.set_samples(items);
                        Some(Task::none())
                    }
                    Err(e) => {
                        error!("Failed to load cached samples: {}", e);
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not load samples.".to_string(),
                        )))
                    }
                }
            }

            Message::SamplesFetched(result) => {
                self.ui.browse.refreshing = false;
                match result {
                    Ok(items) => {
                        info!("Fetched {} samples from server", items.len());
                        self.set_samples(items);
                        Some(Task::none())
                    }
                    Err(e) => {
                        error!("Failed to fetch samples: {}", e);
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not fetch samples.".to_string(),
                        )))
                    }
                }
            }

            Message::CachedPresetsLoaded(result) => {
                self.ui.browse.loading = false;
                match result {
                    Ok(items) if items.is_empty() => {
                        debug!("No cached presets found, refreshing");
                        Some(self.fetch_presets())
                    }
                    Ok(items) => {
                        self.set_presets(items);
                        Some(Task::none())
                    }
                    Err(e) => {
                        error!("Failed to load cached presets: {}", e);
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not load presets.".to_string(),
                        )))
                    }
                }
            }

            Message::PresetsFetched(result) => {
                self.ui.browse.refreshing = false;
                match result {
                    Ok(items) => {
                        info!("Fetched {} presets from server", items.len());
                        self.set_presets(items);
                        Some(Task::none())
                    }
                    Err(e) => {
                        error!("Failed to fetch presets: {}", e);
                        Some(Task::done(Message::ShowErrorToast(
                            "Could not fetch presets.".to_string(),
                        )))
                    }
                }
            }

            Message::OpenSampleUrl(url) => {
                if url.is_empty() {
                    warn!("No URL available for this sample");
                    return Some(Task::none());
                }
                if let Err(e) = open::that(url) {
                    error!("Failed to open sample URL: {}", e);
                    return Some(Task::done(Message::ShowErrorToast(
                        "Could not open the sample URL.".to_string(),
                    )));
                }
                debug!("Opened sample URL externally: {}", url);
                Some(Task::none())
            }

            Message::DownloadPreset(preset_name) => {
                let name = preset_name.clone();
                Some(Task::perform(save_preset_dialog(name.clone()), move |path| {
                    Message::DownloadLocationPicked(name.clone(), path)
                }))
            }

            Message::DownloadLocationPicked(preset_name, output_path) => {
                let Some(path) = output_path else {
                    // User dismissed the save dialog
                    debug!("Preset download cancelled");
                    return Some(Task::none());
                };
                let client = self.core.client.clone();
                let name = preset_name.clone();
                let path = path.to_string_lossy().to_string();
                Some(Task::perform(
                    async move {
                        let result = client.download_preset(&name, &path).await;
                        (name, result)
                    },
                    |(name, result)| Message::PresetDownloaded(name, result),
                ))
            }

            Message::PresetDownloaded(preset_name, result) => match result {
                Ok(()) => Some(Task::done(Message::ShowToast(format!(
                    "Preset '{}' downloaded.",
                    preset_name
                )))),
                Err(e) => {
                    error!("Failed to download preset '{}': {}", preset_name, e);
                    Some(Task::done(Message::ShowErrorToast(
                        "Failed to download preset.".to_string(),
                    )))
                }
            },

            Message::RemoveSample(title) => {
                let client = self.core.client.clone();
                let title = title.clone();
                Some(Task::perform(
                    async move {
                        let result = client.remove_sample(&title).await;
                        (title, result)
                    },
                    |(title, result)| Message::SampleRemoved(title, result),
                ))
            }

            Message::SampleRemoved(title, result) => match result {
                Ok(()) => {
                    self.ui.browse.samples.retain(|item| item.title != *title);
                    Some(Task::done(Message::ShowToast(format!(
                        "Removed '{}'.",
                        title
                    ))))
                }
                Err(e) => {
                    error!("Failed to remove sample '{}': {}", title, e);
                    Some(Task::done(Message::ShowErrorToast(
                        "Failed to remove sample.".to_string(),
                    )))
                }
            },

            _ => None,
        }
    }
}

/// Order a shared list in place
///
/// Sorts are stable, so equal keys keep their relative order and re-sorting
/// is idempotent. `Date` leaves the backend order untouched: the items carry
/// no timestamp field.
pub fn sort_items(items: &mut [SharedItem], key: SortKey) {
    match key {
        SortKey::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Uploader => items.sort_by(|a, b| a.uploaded_by.cmp(&b.uploaded_by)),
        SortKey::Date => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, uploaded_by: &str) -> SharedItem {
        SharedItem {
            title: title.to_string(),
            url: format!("https://example.com/{}", title),
            uploaded_by: uploaded_by.to_string(),
        }
    }

    #[test]
    fn title_sort_is_lexicographic() {
        let mut items = vec![item("c", "x"), item("a", "y"), item("b", "z")];
        sort_items(&mut items, SortKey::Title);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn uploader_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            item("first", "same"),
            item("second", "same"),
            item("third", "aaa"),
        ];
        sort_items(&mut items, SortKey::Uploader);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        // "aaa" wins; the two "same" entries keep their relative order
        assert_eq!(titles, ["third", "first", "second"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut items = vec![item("b", "y"), item("a", "x"), item("c", "z")];
        sort_items(&mut items, SortKey::Title);
        let once = items.clone();
        sort_items(&mut items, SortKey::Title);
        assert_eq!(items, once);
    }

    #[test]
    fn date_sort_leaves_order_unchanged() {
        let mut items = vec![item("z", "c"), item("a", "a"), item("m", "b")];
        let before = items.clone();
        sort_items(&mut items, SortKey::Date);
        assert_eq!(items, before);
    }

    mod removal {
        use crate::app::{App, Message};

        #[test]
        fn successful_removal_drops_the_row_without_a_refetch() {
            let mut app = App::new().0;
            app.ui.browse.samples = vec![
                super::item("keep", "ada"),
                super::item("drop", "ada"),
            ];
            let _ = app.update(Message::SampleRemoved("drop".into(), Ok(())));
            let titles: Vec<_> = app
                .ui
                .browse
                .samples
                .iter()
                .map(|i| i.title.as_str())
                .collect();
            assert_eq!(titles, ["keep"]);
        }

        #[test]
        fn failed_removal_keeps_the_list() {
            let mut app = App::new().0;
            app.ui.browse.samples = vec![super::item("keep", "ada")];
            let _ = app.update(Message::SampleRemoved(
                "keep".into(),
                Err(crate::api::BridgeError::NotFound),
            ));
            assert_eq!(app.ui.browse.samples.len(), 1);
        }
    }
}

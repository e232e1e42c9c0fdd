//! Typed wrappers over the command bridge
//!
//! One async method per backend command. Argument key names are part of the
//! wire contract and must match the backend's handlers exactly.

use serde_json::json;

use super::bridge::{Bridge, BridgeError};
use super::model::{LocalSong, SharedItem};

/// Client for the backend command surface
///
/// Cheap to clone; every page holds the same underlying HTTP client.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    bridge: Bridge,
}

impl BridgeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            bridge: Bridge::new(base_url),
        }
    }

    // ---- Accounts ----

    pub async fn login_user(&self, username: &str, password: &str) -> Result<bool, BridgeError> {
        self.bridge
            .invoke(
                "login_user_command",
                json!({ "username": username, "password": password }),
            )
            .await
    }

    pub async fn register_user(&self, username: &str, password: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke(
                "register_user_command",
                json!({ "username": username, "password": password }),
            )
            .await
    }

    pub async fn logged_in_user(&self) -> Result<Option<String>, BridgeError> {
        self.bridge.invoke("get_logged_in_user", json!({})).await
    }

    // ---- Friends ----

    pub async fn cached_friends(&self) -> Result<Vec<String>, BridgeError> {
        self.bridge.invoke("get_cached_friends", json!({})).await
    }

    pub async fn add_friend(&self, friend_username: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke(
                "add_friend_command",
                json!({ "friendUsername": friend_username }),
            )
            .await
    }

    pub async fn remove_friend(&self, friend_username: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke(
                "remove_friend_command",
                json!({ "friendUsername": friend_username }),
            )
            .await
    }

    // ---- Local library ----

    pub async fn directory_path(&self) -> Result<Option<String>, BridgeError> {
        self.bridge.invoke("get_directory_path", json!({})).await
    }

    pub async fn set_directory(&self, path: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke("set_directory", json!({ "path": path }))
            .await
    }

    pub async fn cached_songs(&self) -> Result<Vec<LocalSong>, BridgeError> {
        self.bridge.invoke("get_cached_songs", json!({})).await
    }

    // ---- Playback ----

    pub async fn play_song(&self, title: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke("play_song", json!({ "title": title }))
            .await
    }

    pub async fn current_song_playing(&self) -> Result<Option<String>, BridgeError> {
        self.bridge
            .invoke("get_current_song_playing", json!({}))
            .await
    }

    pub async fn set_volume(&self, vol: f32) -> Result<(), BridgeError> {
        self.bridge
            .invoke("set_volume", json!({ "vol": vol }))
            .await
    }

    pub async fn pause_song(&self) -> Result<(), BridgeError> {
        self.bridge.invoke("pause_song", json!({})).await
    }

    pub async fn unpause_song(&self) -> Result<(), BridgeError> {
        self.bridge.invoke("unpause_song", json!({})).await
    }

    // ---- Shared samples and presets ----

    pub async fn cached_samples(&self) -> Result<Vec<SharedItem>, BridgeError> {
        self.bridge.invoke("get_cached_samples", json!({})).await
    }

    pub async fn fetch_all_samples(&self) -> Result<Vec<SharedItem>, BridgeError> {
        self.bridge.invoke("fetch_all_samples", json!({})).await
    }

    pub async fn cached_presets(&self) -> Result<Vec<SharedItem>, BridgeError> {
        self.bridge.invoke("get_cached_presets", json!({})).await
    }

    pub async fn fetch_all_presets(&self) -> Result<Vec<SharedItem>, BridgeError> {
        self.bridge.invoke("fetch_all_presets", json!({})).await
    }

    pub async fn remove_sample(&self, title: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke("remove_sample_command", json!({ "title": title }))
            .await
    }

    pub async fn download_preset(
        &self,
        preset_name: &str,
        output_path: &str,
    ) -> Result<(), BridgeError> {
        self.bridge
            .invoke(
                "download_preset_file",
                json!({ "presetName": preset_name, "outputPath": output_path }),
            )
            .await
    }

    pub async fn upload_sample(&self, title: &str, url: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke(
                "upload_sample_metadata",
                json!({ "title": title, "url": url }),
            )
            .await
    }

    pub async fn upload_preset(&self, file_path: &str) -> Result<(), BridgeError> {
        self.bridge
            .invoke("upload_preset_metadata", json!({ "filePath": file_path }))
            .await
    }
}

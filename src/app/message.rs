//! Application messages

use std::path::PathBuf;

use crate::api::{BridgeError, LocalSong, SharedItem};
use crate::app::state::{ListKind, SortKey};
use crate::ui::components::Page;

/// Outcome of a multi-file preset upload batch
#[derive(Debug, Clone)]
pub struct UploadBatch {
    /// Files actually forwarded to the backend
    pub uploaded: usize,
    /// Paths skipped because they were not valid UTF-8
    pub invalid: usize,
    /// First backend failure, if any; the batch stops there
    pub error: Option<BridgeError>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Navigation ============
    /// Navigation menu item selected
    Navigate(Page),
    /// End the session and return to the login screen
    Logout,

    // ============ Login / registration ============
    LoginUsernameChanged(String),
    LoginPasswordChanged(String),
    TogglePasswordVisibility,
    /// Switch between the login and registration forms
    ToggleRegistering,
    SubmitLogin,
    SubmitRegister,
    LoginResult(Result<bool, BridgeError>),
    RegisterResult(Result<(), BridgeError>),
    /// Username reported by the backend for the active session
    LoggedInUserLoaded(Option<String>),

    // ============ Browse (samples & presets) ============
    /// Switch between the samples and presets lists
    BrowseToggle(ListKind),
    /// Re-fetch the active list from the server
    BrowseRefresh,
    BrowseSortChanged(SortKey),
    CachedSamplesLoaded(Result<Vec<SharedItem>, BridgeError>),
    SamplesFetched(Result<Vec<SharedItem>, BridgeError>),
    CachedPresetsLoaded(Result<Vec<SharedItem>, BridgeError>),
    PresetsFetched(Result<Vec<SharedItem>, BridgeError>),
    /// Open a sample URL in the default external handler
    OpenSampleUrl(String),
    /// Ask for a save location, then download the named preset
    DownloadPreset(String),
    /// Save dialog closed (None = cancelled)
    DownloadLocationPicked(String, Option<PathBuf>),
    PresetDownloaded(String, Result<(), BridgeError>),
    /// Remove an own upload from the shared samples
    RemoveSample(String),
    SampleRemoved(String, Result<(), BridgeError>),

    // ============ Library ============
    SelectDirectory,
    /// Folder dialog closed (None = cancelled)
    DirectoryPicked(Option<PathBuf>),
    DirectorySet(String, Result<(), BridgeError>),
    DirectoryPathLoaded(Option<String>),
    SongsLoaded(Result<Vec<LocalSong>, BridgeError>),
    PlaySong(String),
    SongPlayed(String, Result<(), BridgeError>),

    // ============ Profile ============
    FriendInputChanged(String),
    AddFriend,
    FriendAdded(Result<(), BridgeError>),
    FriendsLoaded(Result<Vec<String>, BridgeError>),
    RemoveFriend(String),
    FriendRemoved(String, Result<(), BridgeError>),

    // ============ Upload ============
    UploadTitleChanged(String),
    UploadUrlChanged(String),
    SubmitSampleUrl,
    SampleUploaded(Result<(), BridgeError>),
    PickUploadFiles,
    /// File dialog closed (empty = cancelled)
    UploadFilesPicked(Vec<PathBuf>),
    PresetFilesUploaded(UploadBatch),

    // ============ Playback footer ============
    /// Poll the backend for the currently playing song
    PlaybackTick,
    NowPlayingLoaded(Result<Option<String>, BridgeError>),
    TogglePause,
    /// Pause state the backend confirmed, or the error that kept it
    PauseToggled(bool, Result<(), BridgeError>),
    VolumeChanged(u8),
    VolumeSet(Result<(), BridgeError>),

    // ============ Toasts ============
    ShowToast(String),
    ShowErrorToast(String),
    HideToast,
}

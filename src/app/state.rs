// src/app/state.rs
//! Application state definitions

use crate::api::{BridgeClient, LocalSong, SharedItem};
use crate::features::Settings;
use crate::ui::components::Page;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, bridge client, session)
    pub core: CoreState,
    /// UI state (active page, per-page states, toast)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub client: BridgeClient,
    pub settings: Settings,
    /// Whether a session is active. Gates the whole view tree.
    pub is_logged_in: bool,
    /// Username reported by the backend after login; used to gate
    /// owner-only actions in the browse page.
    pub current_user: Option<String>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        let client = BridgeClient::new(settings.backend.base_url.clone());
        Self {
            client,
            settings,
            is_logged_in: false,
            current_user: None,
        }
    }
}

/// UI state: active page plus the view-local state of every page
pub struct UiState {
    pub page: Page,
    pub login: LoginPageState,
    pub browse: BrowsePageState,
    pub library: LibraryPageState,
    pub profile: ProfilePageState,
    pub upload: UploadPageState,
    pub footer: FooterState,
    pub toast: Option<Toast>,
    pub toast_visible: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            page: Page::default(),
            login: LoginPageState::default(),
            browse: BrowsePageState::default(),
            library: LibraryPageState::default(),
            profile: ProfilePageState::default(),
            upload: UploadPageState::default(),
            footer: FooterState::default(),
            toast: None,
            toast_visible: false,
        }
    }

    /// Drop all page state, as when a session ends
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Login / registration form state
#[derive(Debug, Clone, Default)]
pub struct LoginPageState {
    pub username: String,
    pub password: String,
    /// Registration display mode; never affects the session itself
    pub registering: bool,
    pub show_password: bool,
    pub status: Option<String>,
}

/// Which shared list the browse page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    Samples,
    #[default]
    Presets,
}

/// Client-side sort order for the browse lists
///
/// `Date` intentionally leaves the backend order untouched: the items carry
/// no timestamp to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Title,
    Uploader,
    #[default]
    Date,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Title, SortKey::Uploader];
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Title => write!(f, "Title"),
            SortKey::Uploader => write!(f, "Uploader"),
            SortKey::Date => write!(f, "Date"),
        }
    }
}

/// Shared samples/presets browser state
#[derive(Debug, Clone, Default)]
pub struct BrowsePageState {
    pub samples: Vec<SharedItem>,
    pub presets: Vec<SharedItem>,
    pub list_kind: ListKind,
    pub sort_key: SortKey,
    pub loading: bool,
    pub refreshing: bool,
}

impl BrowsePageState {
    /// Items for the currently selected list
    pub fn displayed(&self) -> &[SharedItem] {
        match self.list_kind {
            ListKind::Samples => &self.samples,
            ListKind::Presets => &self.presets,
        }
    }
}

/// Local library state
#[derive(Debug, Clone, Default)]
pub struct LibraryPageState {
    pub directory: Option<String>,
    pub songs: Vec<LocalSong>,
}

/// Profile page state
#[derive(Debug, Clone, Default)]
pub struct ProfilePageState {
    pub friend_input: String,
    pub friends: Vec<String>,
    pub status: Option<String>,
}

/// Upload page state
#[derive(Debug, Clone, Default)]
pub struct UploadPageState {
    pub title: String,
    pub url: String,
    pub status: Option<String>,
}

/// Playback footer state: a read-only mirror of the backend player
#[derive(Debug, Clone)]
pub struct FooterState {
    pub now_playing: Option<String>,
    pub paused: bool,
    /// Volume slider position, 0-100
    pub volume: u8,
}

impl Default for FooterState {
    fn default() -> Self {
        Self {
            now_playing: None,
            paused: false,
            volume: 100,
        }
    }
}

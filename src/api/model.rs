//! Bridge model types
//!
//! Snapshots returned by the backend. Lists of these are replaced wholesale
//! on refresh; nothing here is mutated in place.

use serde::{Deserialize, Serialize};

/// A shared sample URL or preset, as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedItem {
    pub title: String,
    pub url: String,
    pub uploaded_by: String,
}

/// A song indexed from the local music directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSong {
    pub title: String,
}

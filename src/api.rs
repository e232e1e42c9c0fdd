//! Backend command bridge module
//!
//! Provides the typed client for the backend command surface, plus the
//! transport and model types shared by the UI.

mod bridge;
mod client;
pub mod model;

pub use bridge::{Bridge, BridgeError};
pub use client::BridgeClient;
pub use model::{LocalSong, SharedItem};

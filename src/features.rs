//! Feature modules - business logic separated from UI

pub mod settings;
pub mod upload_kinds;

pub use settings::Settings;
pub use upload_kinds::{UPLOAD_KINDS, UploadAction, UploadKind};

//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic. They are the only
//! layer below `app` that imports `crate::app::Message`.

pub mod footer;
pub mod sidebar;

pub use footer::FOOTER_HEIGHT;
pub use sidebar::Page;

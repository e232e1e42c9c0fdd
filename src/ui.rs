//! UI module for the sharing client
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-page views selected by the router

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;

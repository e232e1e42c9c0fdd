//! Pages module
//! Full-page views for the sharing client

pub mod browse;
pub mod library;
pub mod login;
pub mod profile;
pub mod upload;

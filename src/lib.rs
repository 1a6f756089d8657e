// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus application (components, pages)
pub mod app;

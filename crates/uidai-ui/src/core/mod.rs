//! Core, DOM-free primitives for the dashboard.
pub mod assets;
pub mod config;
pub mod content;
pub mod navigation;
pub mod stats;
pub mod view;

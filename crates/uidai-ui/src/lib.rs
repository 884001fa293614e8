#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::too_many_lines)]
//! UIDAI Aadhaar Enrolment Intelligence dashboard.
//!
//! The DOM-free pieces (view identifiers, navigation state, the page content
//! model and the six view fixtures) live in [`core`] and [`features`] and are
//! exercised by native tests. The Yew shell and renderers compile for `wasm32`
//! only and are started through `run_app`.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

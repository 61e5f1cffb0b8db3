// lib.rs - Root module for the wishshare client library
//
// The crate is a Leptos client-side application. Everything below
// `web_app` that does not touch the DOM compiles natively as well,
// which is how the test suites in tests/ exercise it.

/// Backend URL resolution
pub mod config;

/// tracing setup for the browser and for native test runs
pub mod logging;

/// Pages, components, backend client and UI state
pub mod web_app;

pub use web_app::App;

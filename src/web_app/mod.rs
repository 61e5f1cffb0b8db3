// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains all the components and logic for the WishShare
// client-side application built with the Leptos framework.
//
// Architecture:
// - model/: Data types exchanged with the backend
// - api/: WishlistApi trait and its reqwest implementation
// - state/: Loading flags, page tasks, toast slot, session
// - forms.rs: Form state and local validation
// - actions/: Page actions (validate, call the backend, pick the toast)
// - routes.rs: Client route paths
// - browser.rs: File, clipboard and confirm() bindings
// - components/: Reusable UI components
// - pages/: Page-level components
// - app.rs: Root application component with routing

pub mod actions;
pub mod api;
pub mod browser;
pub mod forms;
pub mod model;
pub mod routes;
pub mod state;

pub mod app;
pub mod components;
pub mod pages;

// Re-export main app component for convenience
pub use app::App;

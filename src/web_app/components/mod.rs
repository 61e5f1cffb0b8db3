// web_app/components/mod.rs - UI components module
//
// This module contains the Leptos UI components shared by the pages.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - toast.rs: The app-wide toast and its Toaster handle
// - wishlist.rs: Wishlist and product cards, product form fields

pub mod common;
pub mod toast;
pub mod wishlist;

// Re-export commonly used components for convenience
pub use common::*;
pub use toast::*;
pub use wishlist::*;

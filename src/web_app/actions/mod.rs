// web_app/actions/mod.rs - Page actions
//
// Each action validates its input, calls the backend through WishlistApi
// and turns the outcome into a value plus the toast to show. They know
// nothing about signals or the DOM, so the test suites drive them with an
// in-memory backend.
//
// - auth.rs: sign in, sign up
// - search.rs: find, join and create wishlists
// - joined.rs: the user's joined wishlists
// - products.rs: product CRUD inside one wishlist

pub mod auth;
pub mod joined;
pub mod products;
pub mod search;

use crate::web_app::api::ApiError;
use crate::web_app::state::Notice;

/// Toast texts
pub mod messages {
    pub const SIGNED_IN: &str = "Successfully signed in!";
    pub const ACCOUNT_CREATED: &str = "Account created successfully!";
    pub const SIGN_IN_FAILED: &str = "Failed to sign in";
    pub const SIGN_UP_FAILED: &str = "Failed to create account";
    pub const MISSING_CREDENTIALS: &str = "Please enter your email and password";

    pub const MISSING_WISHLIST_ID: &str = "Please enter a wishlist ID";
    pub const WISHLIST_NOT_FOUND: &str = "Wishlist not found";
    pub const SEARCH_FAILED: &str = "Failed to search for wishlist";
    pub const MISSING_WISHLIST_FIELDS: &str = "Please fill in all fields";
    pub const WISHLIST_CREATED: &str = "Wishlist created successfully!";
    pub const CREATE_FAILED: &str = "Failed to create wishlist";
    pub const JOINED: &str = "Successfully joined wishlist!";
    pub const JOIN_FAILED: &str = "Failed to join wishlist";
    pub const ID_COPIED: &str = "Wishlist ID copied to clipboard!";
    pub const COPY_FAILED: &str = "Failed to copy wishlist ID";

    pub const LOAD_WISHLISTS_FAILED: &str = "Failed to load wishlists";
    pub const NO_JOINED_WISHLISTS: &str = "You haven't joined any wishlists yet.";

    pub const LOAD_WISHLIST_FAILED: &str = "Failed to load wishlist data";
    pub const NO_PRODUCTS: &str = "No items in this wishlist yet. Add your first item!";
    pub const MISSING_PRODUCT_FIELDS: &str = "Please fill in all required fields";
    pub const PRODUCT_ADDED: &str = "Product added successfully";
    pub const ADD_FAILED: &str = "Failed to add product";
    pub const PRODUCT_UPDATED: &str = "Product updated successfully";
    pub const UPDATE_FAILED: &str = "Failed to update product";
    pub const PRODUCT_DELETED: &str = "Product deleted successfully";
    pub const DELETE_FAILED: &str = "Failed to delete product";
    pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";
    pub const IMAGE_READ_FAILED: &str = "Could not read the selected image";
}

/// A successful action: its value and the toast announcing it
#[derive(Clone, Debug, PartialEq)]
pub struct Done<T> {
    pub value: T,
    pub notice: Notice,
}

impl<T> Done<T> {
    pub fn new(value: T, message: &str) -> Self {
        Self {
            value,
            notice: Notice::success(message),
        }
    }
}

pub type ActionResult<T> = Result<Done<T>, Notice>;

/// Log `err` and turn it into the error toast `message`
pub(crate) fn failed(action: &str, err: &ApiError, message: &str) -> Notice {
    tracing::error!("{} failed: {}", action, err);
    Notice::error(message)
}

/// Log a local validation rejection
pub(crate) fn rejected(action: &str, message: &str) -> Notice {
    tracing::warn!("{} rejected: {}", action, message);
    Notice::error(message)
}

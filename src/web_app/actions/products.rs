// web_app/actions/products.rs - Product CRUD within one wishlist
//
// Mutations never patch the list on screen; on success the page reloads
// the wishlist with `load`.

use std::fmt::Display;

use super::{failed, messages, rejected, ActionResult, Done};
use crate::web_app::api::WishlistApi;
use crate::web_app::forms::ProductForm;
use crate::web_app::model::*;
use crate::web_app::state::Notice;

pub async fn load<A: WishlistApi>(api: &A, wishlist_id: &WishlistId) -> Result<WishlistDetail, Notice> {
    let detail = api
        .wishlist_products(wishlist_id)
        .await
        .map_err(|e| failed("Load wishlist", &e, messages::LOAD_WISHLIST_FAILED))?;

    tracing::debug!("Wishlist {} has {} product(s)", wishlist_id, detail.products.len());
    Ok(detail)
}

/// Add the product described by `form`
pub async fn add<A: WishlistApi>(
    api: &A,
    form: &ProductForm,
    user_id: &UserId,
    wishlist_id: &WishlistId,
) -> ActionResult<()> {
    let submission = form
        .submission(user_id, wishlist_id)
        .ok_or_else(|| rejected("Add product", messages::MISSING_PRODUCT_FIELDS))?;

    api.add_product(&submission)
        .await
        .map_err(|e| failed("Add product", &e, messages::ADD_FAILED))?;

    tracing::info!("Added product {:?} to wishlist {}", submission.name, wishlist_id);
    Ok(Done::new((), messages::PRODUCT_ADDED))
}

/// Save the edit form; without a new file the original image is kept
pub async fn edit<A: WishlistApi>(
    api: &A,
    form: &ProductForm,
    user_id: &UserId,
    wishlist_id: &WishlistId,
) -> ActionResult<()> {
    let submission = form
        .submission(user_id, wishlist_id)
        .ok_or_else(|| rejected("Edit product", messages::MISSING_PRODUCT_FIELDS))?;

    if submission.product_id.is_none() {
        tracing::error!("Edit submitted without a product id");
        return Err(Notice::error(messages::UPDATE_FAILED));
    }

    api.edit_product(&submission)
        .await
        .map_err(|e| failed("Edit product", &e, messages::UPDATE_FAILED))?;

    tracing::info!("Updated product {:?}", submission.product_id);
    Ok(Done::new((), messages::PRODUCT_UPDATED))
}

/// Delete a product; the caller asks for confirmation first
pub async fn delete<A: WishlistApi>(api: &A, product_id: &ProductId) -> ActionResult<()> {
    api.delete_product(product_id)
        .await
        .map_err(|e| failed("Delete product", &e, messages::DELETE_FAILED))?;

    tracing::info!("Deleted product {}", product_id);
    Ok(Done::new((), messages::PRODUCT_DELETED))
}

/// Log a failed file read and build its toast
pub fn image_read_notice(err: impl Display) -> Notice {
    tracing::error!("Could not read image: {}", err);
    Notice::error(messages::IMAGE_READ_FAILED)
}

/// Which product modal is open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductModal {
    #[default]
    Closed,
    Add,
    Edit,
}

impl ProductModal {
    pub fn title(&self) -> &'static str {
        match self {
            ProductModal::Edit => "Edit Item",
            _ => "Add New Item",
        }
    }

    pub fn submit_label(&self, busy: bool) -> &'static str {
        match (self, busy) {
            (ProductModal::Edit, true) => "Updating...",
            (ProductModal::Edit, false) => "Update Item",
            (_, true) => "Adding...",
            (_, false) => "Add Item",
        }
    }
}

/// What the product list area shows for the data and request state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// First load, nothing to show yet
    Loading,
    /// No data and no request running
    Failed,
    Ready,
    /// Data on screen while a reload runs
    Refreshing,
}

impl ListStatus {
    pub fn of(has_data: bool, loading: bool) -> Self {
        match (has_data, loading) {
            (false, true) => ListStatus::Loading,
            (false, false) => ListStatus::Failed,
            (true, false) => ListStatus::Ready,
            (true, true) => ListStatus::Refreshing,
        }
    }

    /// Classes for the list; stale data is dimmed and inert while refreshing
    pub fn content_class(&self) -> &'static str {
        match self {
            ListStatus::Refreshing => "opacity-50 pointer-events-none transition-opacity",
            _ => "transition-opacity",
        }
    }
}

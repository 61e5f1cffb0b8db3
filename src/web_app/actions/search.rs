// web_app/actions/search.rs - Find, join and create wishlists

use super::{failed, messages, rejected, ActionResult, Done};
use crate::web_app::api::WishlistApi;
use crate::web_app::forms::CreateWishlistForm;
use crate::web_app::model::*;
use crate::web_app::state::Notice;

/// Look a wishlist up by its id
pub async fn find_wishlist<A: WishlistApi>(api: &A, query: &str) -> Result<WishlistSummary, Notice> {
    let id = query.trim();
    if id.is_empty() {
        return Err(rejected("Search", messages::MISSING_WISHLIST_ID));
    }

    match api.get_wishlist(&WishlistId::new(id)).await {
        Ok(wishlist) => Ok(wishlist),
        Err(e) if e.is_not_found() => {
            tracing::info!("No wishlist with id {}", id);
            Err(Notice::error(messages::WISHLIST_NOT_FOUND))
        }
        Err(e) => Err(failed("Search", &e, messages::SEARCH_FAILED)),
    }
}

/// Join `wishlist_id`; the caller navigates to the joined list on success
pub async fn join<A: WishlistApi>(
    api: &A,
    wishlist_id: &WishlistId,
    user_id: &UserId,
) -> ActionResult<()> {
    let request = JoinWishlistRequest {
        wishlist_id: wishlist_id.clone(),
        user_id: user_id.clone(),
    };
    api.join_wishlist(&request)
        .await
        .map_err(|e| failed("Join", &e, messages::JOIN_FAILED))?;

    tracing::info!("User {} joined wishlist {}", user_id, wishlist_id);
    Ok(Done::new((), messages::JOINED))
}

/// Create a wishlist owned by `user_id`
pub async fn create<A: WishlistApi>(
    api: &A,
    form: &CreateWishlistForm,
    user_id: &UserId,
) -> ActionResult<WishlistId> {
    let request = form
        .request(user_id)
        .ok_or_else(|| rejected("Create wishlist", messages::MISSING_WISHLIST_FIELDS))?;

    let id = api
        .create_wishlist(&request)
        .await
        .map_err(|e| failed("Create wishlist", &e, messages::CREATE_FAILED))?;

    tracing::info!("Created wishlist {}", id);
    Ok(Done::new(id, messages::WISHLIST_CREATED))
}

/// Toast for a clipboard copy attempt
pub fn copy_notice<E: std::fmt::Display>(result: Result<(), E>) -> Notice {
    match result {
        Ok(()) => Notice::success(messages::ID_COPIED),
        Err(e) => {
            tracing::error!("Copy to clipboard failed: {}", e);
            Notice::error(messages::COPY_FAILED)
        }
    }
}

/// Create-wishlist modal state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CreateModal {
    #[default]
    Closed,
    Form,
    Created(WishlistId),
}

impl CreateModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, CreateModal::Closed)
    }

    pub fn created_id(&self) -> Option<&WishlistId> {
        match self {
            CreateModal::Created(id) => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CreateModal::Created(_) => "Wishlist Created!",
            _ => "Create New Wishlist",
        }
    }
}

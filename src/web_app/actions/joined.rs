// web_app/actions/joined.rs - Wishlists the user belongs to

use super::{failed, messages};
use crate::web_app::api::WishlistApi;
use crate::web_app::model::{UserId, WishlistSummary};
use crate::web_app::state::Notice;

pub async fn load<A: WishlistApi>(api: &A, user_id: &UserId) -> Result<Vec<WishlistSummary>, Notice> {
    let wishlists = api
        .joined_wishlists(user_id)
        .await
        .map_err(|e| failed("Load joined wishlists", &e, messages::LOAD_WISHLISTS_FAILED))?;

    tracing::debug!("User {} has {} wishlist(s)", user_id, wishlists.len());
    Ok(wishlists)
}

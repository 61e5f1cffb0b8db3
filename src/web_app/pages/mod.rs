// web_app/pages/mod.rs - Page components module
//
// One component per route:
// - AuthPage: sign in / sign up (/login)
// - DashboardPage: entry points (/home and /)
// - SearchWishlistPage: find, join or create a wishlist (/search)
// - JoinedWishlistsPage: the user's wishlists (/myWishlists)
// - WishlistProductsPage: items of one wishlist (/wishlist/:id)
//
// The last three need a signed-in user and redirect to /login otherwise.

pub mod auth;
pub mod dashboard;
pub mod joined;
pub mod products;
pub mod search;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use joined::JoinedWishlistsPage;
pub use products::WishlistProductsPage;
pub use search::SearchWishlistPage;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::config::ClientConfig;
use crate::web_app::api::HttpApi;
use crate::web_app::model::UserId;
use crate::web_app::state::{guard, use_session, Access};

/// Backend client from context
pub(crate) fn use_api() -> HttpApi {
    use_context::<HttpApi>().unwrap_or_else(|| HttpApi::new(&ClientConfig::from_env()))
}

/// Render `page` for the signed-in user, or redirect to the login page
pub(crate) fn user_scoped<V, F>(page_name: &'static str, page: F) -> AnyView
where
    F: FnOnce(UserId) -> V,
    V: IntoView + 'static,
{
    let session = use_session();
    match session.0.with_untracked(guard) {
        Access::Granted(user_id) => page(user_id).into_any(),
        Access::Redirect(path) => {
            tracing::warn!("{} needs a signed-in user, redirecting to {}", page_name, path);
            view! { <Redirect path=path /> }.into_any()
        }
    }
}

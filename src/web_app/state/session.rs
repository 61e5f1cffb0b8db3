// web_app/state/session.rs - Identity carried across navigation
//
// Nothing is persisted: the signed-in user lives in a context provided by
// the router layer and is gone after a reload. Pages that need a user
// check the session with `guard` and redirect to the login page otherwise.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::web_app::model::{User, UserId, WishlistId};
use crate::web_app::routes;

/// Key-value state handed from page to page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist_id: Option<WishlistId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl NavState {
    pub fn signed_in(user_id: UserId, user_name: Option<String>) -> Self {
        Self {
            user_id: Some(user_id),
            wishlist_id: None,
            user_name,
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self::signed_in(user.id.clone(), user.user_name.clone())
    }

    pub fn with_wishlist(mut self, wishlist_id: WishlistId) -> Self {
        self.wishlist_id = Some(wishlist_id);
        self
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Name shown on the dashboard ("Not {name}? Switch account")
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("you")
    }
}

/// Outcome of checking a user-scoped page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted(UserId),
    Redirect(&'static str),
}

pub fn guard(state: &NavState) -> Access {
    match &state.user_id {
        Some(user_id) => Access::Granted(user_id.clone()),
        None => Access::Redirect(routes::LOGIN),
    }
}

/// Session context shared by every page
#[derive(Clone, Copy, Debug)]
pub struct SessionContext(pub RwSignal<NavState>);

impl SessionContext {
    pub fn new(state: NavState) -> Self {
        Self(RwSignal::new(state))
    }

    pub fn state(&self) -> NavState {
        self.0.get()
    }

    pub fn state_untracked(&self) -> NavState {
        self.0.get_untracked()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.0.with(|state| state.user_id.clone())
    }

    pub fn access(&self) -> Access {
        self.0.with(guard)
    }

    pub fn sign_in(&self, state: NavState) {
        tracing::info!("Session started for user {:?}", state.user_id);
        self.0.set(state);
    }

    pub fn open_wishlist(&self, wishlist_id: WishlistId) {
        self.0.update(|state| state.wishlist_id = Some(wishlist_id));
    }

    pub fn sign_out(&self) {
        tracing::info!("Session cleared");
        self.0.set(NavState::default());
    }
}

/// Install an empty session at the root of the tree
pub fn provide_session() -> SessionContext {
    let session = SessionContext::new(NavState::default());
    provide_context(session);
    session
}

/// Session from context; a detached empty one if none was provided
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        tracing::warn!("No session in context, using an empty one");
        SessionContext::new(NavState::default())
    })
}

// web_app/actions/auth.rs - Sign in and sign up

use super::{failed, messages, rejected, ActionResult, Done};
use crate::web_app::api::WishlistApi;
use crate::web_app::forms::{FieldErrors, RegisterForm, SignInForm};
use crate::web_app::state::{NavState, Notice};

/// Log in and build the session for the dashboard
pub async fn sign_in<A: WishlistApi>(api: &A, form: &SignInForm) -> ActionResult<NavState> {
    let credentials = form
        .credentials()
        .ok_or_else(|| rejected("Sign in", messages::MISSING_CREDENTIALS))?;

    let user = api
        .login(&credentials)
        .await
        .map_err(|e| failed("Sign in", &e, messages::SIGN_IN_FAILED))?;

    tracing::info!("Signed in as {}", user.id);
    Ok(Done::new(NavState::from_user(&user), messages::SIGNED_IN))
}

/// Why a sign up did not go through
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpError {
    /// Shown next to the fields; nothing was sent
    Fields(FieldErrors),
    Request(Notice),
}

/// Register and build the session for the dashboard
pub async fn sign_up<A: WishlistApi>(
    api: &A,
    form: &RegisterForm,
) -> Result<Done<NavState>, SignUpError> {
    let request = form.validate().map_err(|errors| {
        tracing::warn!("Sign up rejected: {} invalid field(s)", errors.len());
        SignUpError::Fields(errors)
    })?;

    let user_id = api
        .register(&request)
        .await
        .map_err(|e| SignUpError::Request(failed("Sign up", &e, messages::SIGN_UP_FAILED)))?;

    tracing::info!("Registered user {}", user_id);
    let state = NavState::signed_in(user_id, Some(request.user_name));
    Ok(Done::new(state, messages::ACCOUNT_CREATED))
}

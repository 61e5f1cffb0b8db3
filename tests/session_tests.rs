// tests/session_tests.rs - Session context and user-scoped routes

use leptos::prelude::*;
use wishshare::web_app::model::*;
use wishshare::web_app::routes;
use wishshare::web_app::state::*;

#[test]
fn test_sign_in_and_out() {
    let _owner = Owner::new();
    let session = SessionContext::new(NavState::default());
    assert_eq!(session.access(), Access::Redirect(routes::LOGIN));

    session.sign_in(NavState::signed_in(UserId::new("u1"), Some("ann".to_string())));
    assert_eq!(session.user_id(), Some(UserId::new("u1")));
    assert_eq!(session.access(), Access::Granted(UserId::new("u1")));
    assert_eq!(session.state_untracked().display_name(), "ann");

    session.sign_out();
    assert_eq!(session.state_untracked(), NavState::default());
    assert_eq!(session.access(), Access::Redirect(routes::LOGIN));
}

#[test]
fn test_open_wishlist_keeps_user() {
    let _owner = Owner::new();
    let session = SessionContext::new(NavState::signed_in(UserId::new("u1"), None));

    session.open_wishlist(WishlistId::new("w9"));
    let state = session.state_untracked();
    assert_eq!(state.user_id, Some(UserId::new("u1")));
    assert_eq!(state.wishlist_id, Some(WishlistId::new("w9")));
    assert_eq!(state.display_name(), "you");
}

#[test]
fn test_nav_state_from_login() {
    let user = User {
        id: UserId::new("65a1"),
        user_name: Some("ann".to_string()),
        first_name: Some("Ann".to_string()),
        last_name: None,
        email: Some("ann@example.com".to_string()),
        phone: None,
        role: None,
    };
    let state = NavState::from_user(&user);
    assert!(state.is_signed_in());
    assert_eq!(state.user_name.as_deref(), Some("ann"));
    assert_eq!(state.wishlist_id, None);
}

#[test]
fn test_nav_state_omits_missing_keys() {
    let state = NavState::signed_in(UserId::new("u1"), None);
    assert_eq!(serde_json::to_value(&state).unwrap(), serde_json::json!({ "userId": "u1" }));
}

#[test]
fn test_user_scoped_routes() {
    let cases = [
        (routes::ROOT, false),
        (routes::HOME, false),
        (routes::LOGIN, false),
        (routes::SIGN_UP, false),
        (routes::SEARCH, true),
        (routes::MY_WISHLISTS, true),
    ];
    for (path, scoped) in cases {
        assert_eq!(routes::requires_user(path), scoped, "path {}", path);
    }
    assert!(routes::requires_user(&routes::wishlist(&WishlistId::new("w1"))));
}

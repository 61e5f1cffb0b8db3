// tests/search_flow_tests.rs - Find, join and create wishlists

mod common;

use common::{Call, FakeApi};
use wishshare::web_app::actions::messages;
use wishshare::web_app::actions::search::*;
use wishshare::web_app::api::ApiError;
use wishshare::web_app::forms::CreateWishlistForm;
use wishshare::web_app::model::*;
use wishshare::web_app::state::Notice;

#[tokio::test]
async fn test_find_trims_the_query() {
    let api = FakeApi::new();
    api.respond(|r| r.get_wishlist = Ok(common::summary("w1", "Birthday", "Ann")));

    let found = find_wishlist(&api, "  w1 ").await.unwrap();

    assert_eq!(found.name, "Birthday");
    assert_eq!(api.calls(), vec![Call::GetWishlist(WishlistId::new("w1"))]);
}

#[tokio::test]
async fn test_find_empty_query_sends_nothing() {
    let api = FakeApi::new();

    let notice = find_wishlist(&api, "   ").await.unwrap_err();

    assert_eq!(notice, Notice::error(messages::MISSING_WISHLIST_ID));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_find_not_found_vs_failure() {
    let api = FakeApi::new();
    api.respond(|r| r.get_wishlist = Err(ApiError::NotFound));
    let notice = find_wishlist(&api, "missing").await.unwrap_err();
    assert_eq!(notice.message, messages::WISHLIST_NOT_FOUND);

    api.respond(|r| {
        r.get_wishlist = Err(ApiError::Status {
            status: 500,
            body: String::new(),
        })
    });
    let notice = find_wishlist(&api, "w1").await.unwrap_err();
    assert_eq!(notice.message, messages::SEARCH_FAILED);
}

#[tokio::test]
async fn test_join_sends_ids() {
    let api = FakeApi::new();
    api.respond(|r| r.join_wishlist = Ok(()));

    let done = join(&api, &WishlistId::new("w1"), &UserId::new("u1")).await.unwrap();

    assert_eq!(done.notice, Notice::success(messages::JOINED));
    assert_eq!(
        api.calls(),
        vec![Call::JoinWishlist(JoinWishlistRequest {
            wishlist_id: WishlistId::new("w1"),
            user_id: UserId::new("u1"),
        })]
    );
}

#[tokio::test]
async fn test_join_failure_is_reported() {
    let api = FakeApi::new();
    api.respond(|r| r.join_wishlist = Err(ApiError::Transport("offline".to_string())));

    let notice = join(&api, &WishlistId::new("w1"), &UserId::new("u1")).await.unwrap_err();

    assert_eq!(notice, Notice::error(messages::JOIN_FAILED));
}

#[tokio::test]
async fn test_create_returns_new_id() {
    let api = FakeApi::new();
    api.respond(|r| r.create_wishlist = Ok(WishlistId::new("w42")));
    let form = CreateWishlistForm {
        name: "Birthday".to_string(),
        owner_name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
    };

    let done = create(&api, &form, &UserId::new("u1")).await.unwrap();

    assert_eq!(done.value, WishlistId::new("w42"));
    assert_eq!(done.notice.message, messages::WISHLIST_CREATED);
    match &api.calls()[..] {
        [Call::CreateWishlist(request)] => assert_eq!(request.user_id, UserId::new("u1")),
        other => panic!("unexpected calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_incomplete_form_sends_nothing() {
    let api = FakeApi::new();
    let form = CreateWishlistForm {
        name: "Birthday".to_string(),
        ..Default::default()
    };

    let notice = create(&api, &form, &UserId::new("u1")).await.unwrap_err();

    assert_eq!(notice, Notice::error(messages::MISSING_WISHLIST_FIELDS));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_create_failure_is_reported() {
    let api = FakeApi::new();
    api.respond(|r| r.create_wishlist = Err(ApiError::UnexpectedBody("no _id".to_string())));
    let form = CreateWishlistForm {
        name: "Birthday".to_string(),
        owner_name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
    };

    let notice = create(&api, &form, &UserId::new("u1")).await.unwrap_err();

    assert_eq!(notice.message, messages::CREATE_FAILED);
}

#[test]
fn test_copy_notice() {
    assert_eq!(copy_notice::<String>(Ok(())), Notice::success(messages::ID_COPIED));
    assert_eq!(
        copy_notice(Err("clipboard unavailable".to_string())),
        Notice::error(messages::COPY_FAILED)
    );
}

#[test]
fn test_create_modal_states() {
    let closed = CreateModal::Closed;
    assert!(!closed.is_open());

    let form = CreateModal::Form;
    assert!(form.is_open());
    assert_eq!(form.title(), "Create New Wishlist");
    assert_eq!(form.created_id(), None);

    let created = CreateModal::Created(WishlistId::new("w42"));
    assert!(created.is_open());
    assert_eq!(created.title(), "Wishlist Created!");
    assert_eq!(created.created_id(), Some(&WishlistId::new("w42")));
}

// tests/auth_flow_tests.rs - Sign in and sign up against an in-memory backend

mod common;

use common::{Call, FakeApi};
use wishshare::web_app::actions::auth::{sign_in, sign_up, SignUpError};
use wishshare::web_app::actions::messages;
use wishshare::web_app::api::ApiError;
use wishshare::web_app::forms::{RegisterForm, SignInForm};
use wishshare::web_app::model::*;
use wishshare::web_app::state::Notice;

fn sign_in_form(email: &str, password: &str) -> SignInForm {
    SignInForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn register_form() -> RegisterForm {
    RegisterForm {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        user_name: "annie".to_string(),
        phone: "555 0100".to_string(),
        role: "friend".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_sign_in_success() {
    let api = FakeApi::new();
    api.respond(|r| r.login = Ok(common::user("65a1", "ann")));

    let done = sign_in(&api, &sign_in_form("ann@example.com", "secret")).await.unwrap();

    assert_eq!(done.value.user_id, Some(UserId::new("65a1")));
    assert_eq!(done.value.user_name.as_deref(), Some("ann"));
    assert_eq!(done.notice, Notice::success(messages::SIGNED_IN));
    assert_eq!(
        api.calls(),
        vec![Call::Login(Credentials {
            email: "ann@example.com".to_string(),
            password: "secret".to_string(),
        })]
    );
}

#[tokio::test]
async fn test_sign_in_missing_field_sends_nothing() {
    let api = FakeApi::new();

    let notice = sign_in(&api, &sign_in_form("ann@example.com", "")).await.unwrap_err();

    assert_eq!(notice, Notice::error(messages::MISSING_CREDENTIALS));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_sign_in_rejected_by_backend() {
    let api = FakeApi::new();
    api.respond(|r| {
        r.login = Err(ApiError::Status {
            status: 401,
            body: "Invalid credentials".to_string(),
        })
    });

    let notice = sign_in(&api, &sign_in_form("ann@example.com", "wrong")).await.unwrap_err();

    assert_eq!(notice, Notice::error(messages::SIGN_IN_FAILED));
}

#[tokio::test]
async fn test_sign_up_success_carries_user_name() {
    let api = FakeApi::new();
    api.respond(|r| r.register = Ok(UserId::new("u7")));

    let done = sign_up(&api, &register_form()).await.unwrap();

    assert_eq!(done.value.user_id, Some(UserId::new("u7")));
    assert_eq!(done.value.user_name.as_deref(), Some("annie"));
    assert_eq!(done.notice.message, messages::ACCOUNT_CREATED);
    match &api.calls()[..] {
        [Call::Register(request)] => assert_eq!(request.role, "friend"),
        other => panic!("unexpected calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_sign_up_mismatched_passwords_sends_nothing() {
    let api = FakeApi::new();
    let form = RegisterForm {
        confirm_password: "secreT".to_string(),
        ..register_form()
    };

    let err = sign_up(&api, &form).await.unwrap_err();

    match err {
        SignUpError::Fields(errors) => {
            assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        }
        other => panic!("expected field errors, got {:?}", other),
    }
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_sign_up_backend_failure() {
    let api = FakeApi::new();
    api.respond(|r| r.register = Err(ApiError::Transport("connection refused".to_string())));

    let err = sign_up(&api, &register_form()).await.unwrap_err();

    assert_eq!(err, SignUpError::Request(Notice::error(messages::SIGN_UP_FAILED)));
    assert_eq!(api.call_count(), 1);
}

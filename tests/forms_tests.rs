// tests/forms_tests.rs - Local validation and form-to-request mapping

mod common;

use rust_decimal::Decimal;
use wishshare::web_app::forms::*;
use wishshare::web_app::model::*;

fn filled_register_form() -> RegisterForm {
    RegisterForm {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        user_name: "ann".to_string(),
        phone: "+1 555 0100".to_string(),
        role: "owner".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    }
}

#[test]
fn test_sign_in_requires_both_fields() {
    let cases = [("", "secret", false), ("ann@example.com", "", false), ("ann@example.com", "secret", true)];
    for (email, password, valid) in cases {
        let form = SignInForm {
            email: email.to_string(),
            password: password.to_string(),
        };
        assert_eq!(form.credentials().is_some(), valid, "email={:?} password={:?}", email, password);
    }
}

#[test]
fn test_register_valid_form() {
    let request = filled_register_form().validate().unwrap();
    assert_eq!(request.user_name, "ann");
    assert_eq!(request.password, "secret");
}

#[test]
fn test_register_password_mismatch() {
    let form = RegisterForm {
        confirm_password: "different".to_string(),
        ..filled_register_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
}

#[test]
fn test_register_field_messages() {
    let expected = [
        ("firstName", "First name is required"),
        ("lastName", "Last name is required"),
        ("email", "Email is required"),
        ("userName", "userName is required"),
        ("phone", "Phone number is required"),
        ("role", "Role is required"),
        ("password", "Password is required"),
    ];
    let form = RegisterForm {
        first_name: " ".to_string(),
        last_name: String::new(),
        email: String::new(),
        user_name: "\t".to_string(),
        phone: String::new(),
        role: String::new(),
        password: String::new(),
        confirm_password: String::new(),
    };
    let errors = form.validate().unwrap_err();
    for (field, message) in expected {
        assert_eq!(errors.get(field), Some(message), "field {}", field);
    }
    assert_eq!(errors.fields().count(), expected.len());
}

#[test]
fn test_create_wishlist_form() {
    let user_id = UserId::new("u1");
    let mut form = CreateWishlistForm {
        name: "Birthday".to_string(),
        owner_name: "Ann".to_string(),
        email: String::new(),
    };
    assert!(form.request(&user_id).is_none());

    form.email = "ann@example.com".to_string();
    let request = form.request(&user_id).unwrap();
    assert_eq!(request.user_id, user_id);
    assert_eq!(request.owner_name, "Ann");
}

#[test]
fn test_product_form_requires_name_and_price() {
    let user_id = UserId::new("u1");
    let wishlist_id = WishlistId::new("w1");
    let form = ProductForm {
        name: "Lamp".to_string(),
        ..Default::default()
    };
    assert!(form.submission(&user_id, &wishlist_id).is_none());

    let form = ProductForm {
        price: "10".to_string(),
        ..Default::default()
    };
    assert!(form.submission(&user_id, &wishlist_id).is_none());
}

#[test]
fn test_edit_form_keeps_original_image() {
    let original = common::product("p1", "Lamp", Decimal::new(2450, 2), Some("https://cdn/lamp.png"));
    let form = ProductForm::from_product(&original);

    assert!(form.is_edit());
    assert_eq!(form.price, "24.50");
    assert_eq!(form.preview_url().as_deref(), Some("https://cdn/lamp.png"));

    let submission = form.submission(&UserId::new("u1"), &WishlistId::new("w1")).unwrap();
    assert_eq!(submission.product_id, Some(ProductId::new("p1")));
    assert_eq!(submission.image, ProductImage::Keep("https://cdn/lamp.png".to_string()));
    assert_eq!(submission.retained_image(), original.image_url.as_deref());
}

#[test]
fn test_edit_form_with_new_image_uploads_it() {
    let original = common::product("p1", "Lamp", Decimal::new(10, 0), Some("https://cdn/lamp.png"));
    let mut form = ProductForm::from_product(&original);
    form.choose_image(PendingImage {
        upload: common::upload("new.png"),
        preview_url: "blob:preview".to_string(),
    });

    let submission = form.submission(&UserId::new("u1"), &WishlistId::new("w1")).unwrap();
    assert_eq!(submission.image, ProductImage::Upload(common::upload("new.png")));
    assert!(submission.text_fields().iter().all(|(k, _)| *k != "imageUrl"));
}

#[test]
fn test_removing_new_image_reverts_to_original() {
    let original = common::product("p1", "Lamp", Decimal::new(10, 0), Some("https://cdn/lamp.png"));
    let mut form = ProductForm::from_product(&original);
    form.choose_image(PendingImage {
        upload: common::upload("new.png"),
        preview_url: "blob:preview".to_string(),
    });

    let removed = form.remove_new_image().unwrap();
    assert_eq!(removed.preview_url, "blob:preview");
    assert_eq!(form.preview_url().as_deref(), Some("https://cdn/lamp.png"));
    let submission = form.submission(&UserId::new("u1"), &WishlistId::new("w1")).unwrap();
    assert_eq!(submission.image, ProductImage::Keep("https://cdn/lamp.png".to_string()));
}

#[test]
fn test_edit_form_prefills_raw_price_text() {
    let mut original = common::product("p2", "Sofa", Decimal::new(1, 0), None);
    original.price = Price::Text("about 20".to_string());

    let form = ProductForm::from_product(&original);
    assert_eq!(form.price, "about 20");
    let submission = form.submission(&UserId::new("u1"), &WishlistId::new("w1")).unwrap();
    assert_eq!(submission.price, "about 20");
}

#[test]
fn test_product_without_image_submits_none() {
    let original = common::product("p1", "Lamp", Decimal::new(10, 0), Some(""));
    let form = ProductForm::from_product(&original);
    assert_eq!(form.current_image, None);
    let submission = form.submission(&UserId::new("u1"), &WishlistId::new("w1")).unwrap();
    assert_eq!(submission.image, ProductImage::None);
}

#[test]
fn test_late_image_read_is_not_attached_to_the_next_product() {
    let lamp = common::product("p1", "Lamp", Decimal::new(10, 0), Some("https://cdn/lamp.png"));
    let mug = common::product("p2", "Mug", Decimal::new(8, 0), Some("https://cdn/mug.png"));

    // Lamp's modal starts a read, then is closed and Mug's modal opens
    let mut form = ProductForm::default();
    form.restart(ProductForm::from_product(&lamp));
    let lamp_session = form.session;
    form.restart(ProductForm::default());
    form.restart(ProductForm::from_product(&mug));

    let late = PendingImage {
        upload: common::upload("lamp-new.png"),
        preview_url: "blob:lamp".to_string(),
    };
    let stale = form.accept_image(lamp_session, late).unwrap_err();
    assert_eq!(stale.preview_url, "blob:lamp");
    assert_eq!(form.new_image, None);

    let submission = form.submission(&UserId::new("u1"), &WishlistId::new("w1")).unwrap();
    assert_eq!(submission.product_id, Some(ProductId::new("p2")));
    assert_eq!(submission.image, ProductImage::Keep("https://cdn/mug.png".to_string()));
}

#[test]
fn test_image_read_in_current_session_is_attached() {
    let mut form = ProductForm::default();
    form.restart(ProductForm::default());
    let session = form.session;

    let first = PendingImage {
        upload: common::upload("a.png"),
        preview_url: "blob:a".to_string(),
    };
    let second = PendingImage {
        upload: common::upload("b.png"),
        preview_url: "blob:b".to_string(),
    };
    assert_eq!(form.accept_image(session, first.clone()), Ok(None));
    assert_eq!(form.accept_image(session, second), Ok(Some(first)));
    assert_eq!(form.preview_url().as_deref(), Some("blob:b"));
}

#[test]
fn test_restart_hands_back_pending_image() {
    let mut form = ProductForm::default();
    form.choose_image(PendingImage {
        upload: common::upload("a.png"),
        preview_url: "blob:a".to_string(),
    });

    let dropped = form.restart(ProductForm::default()).unwrap();
    assert_eq!(dropped.preview_url, "blob:a");
    assert_eq!(form.new_image, None);
}

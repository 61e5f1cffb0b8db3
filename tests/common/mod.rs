// common/mod.rs - Shared test utilities
//
// FakeApi is an in-memory WishlistApi: every call is recorded, and each
// endpoint answers with whatever the test configured (a transport error by
// default). Builders below produce realistic backend payloads.

#![allow(dead_code)]

use std::cell::RefCell;

use rust_decimal::Decimal;
use wishshare::web_app::api::{ApiError, ApiResult, WishlistApi};
use wishshare::web_app::model::*;

/// One recorded backend call
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Login(Credentials),
    Register(RegisterRequest),
    JoinedWishlists(UserId),
    GetWishlist(WishlistId),
    CreateWishlist(CreateWishlistRequest),
    JoinWishlist(JoinWishlistRequest),
    WishlistProducts(WishlistId),
    AddProduct(ProductSubmission),
    EditProduct(ProductSubmission),
    DeleteProduct(ProductId),
}

/// Configured answers, one per endpoint
pub struct Responses {
    pub login: ApiResult<User>,
    pub register: ApiResult<UserId>,
    pub joined_wishlists: ApiResult<Vec<WishlistSummary>>,
    pub get_wishlist: ApiResult<WishlistSummary>,
    pub create_wishlist: ApiResult<WishlistId>,
    pub join_wishlist: ApiResult<()>,
    pub wishlist_products: ApiResult<WishlistDetail>,
    pub add_product: ApiResult<()>,
    pub edit_product: ApiResult<()>,
    pub delete_product: ApiResult<()>,
}

fn unconfigured<T>() -> ApiResult<T> {
    Err(ApiError::Transport("no response configured".to_string()))
}

impl Default for Responses {
    fn default() -> Self {
        Self {
            login: unconfigured(),
            register: unconfigured(),
            joined_wishlists: unconfigured(),
            get_wishlist: unconfigured(),
            create_wishlist: unconfigured(),
            join_wishlist: unconfigured(),
            wishlist_products: unconfigured(),
            add_product: unconfigured(),
            edit_product: unconfigured(),
            delete_product: unconfigured(),
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub responses: RefCell<Responses>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the configured answers
    pub fn respond(&self, configure: impl FnOnce(&mut Responses)) {
        configure(&mut self.responses.borrow_mut());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl WishlistApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        self.record(Call::Login(credentials.clone()));
        self.responses.borrow().login.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<UserId> {
        self.record(Call::Register(request.clone()));
        self.responses.borrow().register.clone()
    }

    async fn joined_wishlists(&self, user_id: &UserId) -> ApiResult<Vec<WishlistSummary>> {
        self.record(Call::JoinedWishlists(user_id.clone()));
        self.responses.borrow().joined_wishlists.clone()
    }

    async fn get_wishlist(&self, id: &WishlistId) -> ApiResult<WishlistSummary> {
        self.record(Call::GetWishlist(id.clone()));
        self.responses.borrow().get_wishlist.clone()
    }

    async fn create_wishlist(&self, request: &CreateWishlistRequest) -> ApiResult<WishlistId> {
        self.record(Call::CreateWishlist(request.clone()));
        self.responses.borrow().create_wishlist.clone()
    }

    async fn join_wishlist(&self, request: &JoinWishlistRequest) -> ApiResult<()> {
        self.record(Call::JoinWishlist(request.clone()));
        self.responses.borrow().join_wishlist.clone()
    }

    async fn wishlist_products(&self, id: &WishlistId) -> ApiResult<WishlistDetail> {
        self.record(Call::WishlistProducts(id.clone()));
        self.responses.borrow().wishlist_products.clone()
    }

    async fn add_product(&self, submission: &ProductSubmission) -> ApiResult<()> {
        self.record(Call::AddProduct(submission.clone()));
        self.responses.borrow().add_product.clone()
    }

    async fn edit_product(&self, submission: &ProductSubmission) -> ApiResult<()> {
        self.record(Call::EditProduct(submission.clone()));
        self.responses.borrow().edit_product.clone()
    }

    async fn delete_product(&self, id: &ProductId) -> ApiResult<()> {
        self.record(Call::DeleteProduct(id.clone()));
        self.responses.borrow().delete_product.clone()
    }
}

pub fn user(id: &str, user_name: &str) -> User {
    User {
        id: UserId::new(id),
        user_name: Some(user_name.to_string()),
        first_name: None,
        last_name: None,
        email: Some(format!("{}@example.com", user_name)),
        phone: None,
        role: None,
    }
}

pub fn summary(id: &str, name: &str, owner_name: &str) -> WishlistSummary {
    WishlistSummary {
        id: WishlistId::new(id),
        name: name.to_string(),
        owner_name: owner_name.to_string(),
    }
}

pub fn product(id: &str, name: &str, price: Decimal, image_url: Option<&str>) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::Amount(price),
        description: Some(format!("A lovely {}", name.to_lowercase())),
        image_url: image_url.map(str::to_string),
        edited_by: None,
    }
}

pub fn detail(id: &str, name: &str, products: Vec<Product>) -> WishlistDetail {
    WishlistDetail {
        id: WishlistId::new(id),
        name: name.to_string(),
        owner_name: "Ann".to_string(),
        owner_email: Some("ann@example.com".to_string()),
        products,
    }
}

pub fn upload(file_name: &str) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

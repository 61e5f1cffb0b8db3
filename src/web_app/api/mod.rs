// web_app/api/mod.rs - Backend access
//
// Every backend call goes through the WishlistApi trait and returns an
// explicit ApiResult; callers branch on Ok/Err, never on the truthiness
// of a response body.
//
// - http.rs: reqwest implementation against the REST backend

pub mod http;

pub use http::HttpApi;

use crate::web_app::model::*;

/// Errors surfaced by backend calls
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("resource not found")]
    NotFound,

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("backend rejected the request")]
    Rejected,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The REST backend as seen by the pages
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single UI thread.
#[allow(async_fn_in_trait)]
pub trait WishlistApi {
    /// POST /api/users/login
    async fn login(&self, credentials: &Credentials) -> ApiResult<User>;

    /// POST /api/users/register
    async fn register(&self, request: &RegisterRequest) -> ApiResult<UserId>;

    /// GET /api/users/wishlist/{userId}
    async fn joined_wishlists(&self, user_id: &UserId) -> ApiResult<Vec<WishlistSummary>>;

    /// GET /api/wishlist/get/{id}
    async fn get_wishlist(&self, id: &WishlistId) -> ApiResult<WishlistSummary>;

    /// POST /api/wishlist/create
    async fn create_wishlist(&self, request: &CreateWishlistRequest) -> ApiResult<WishlistId>;

    /// POST /api/wishlist/join
    async fn join_wishlist(&self, request: &JoinWishlistRequest) -> ApiResult<()>;

    /// GET /api/product/get/{wishlistId}
    async fn wishlist_products(&self, id: &WishlistId) -> ApiResult<WishlistDetail>;

    /// POST /api/product/create (multipart)
    async fn add_product(&self, submission: &ProductSubmission) -> ApiResult<()>;

    /// PUT /api/product/edit (multipart)
    async fn edit_product(&self, submission: &ProductSubmission) -> ApiResult<()>;

    /// DELETE /api/product/delete/{productId}
    async fn delete_product(&self, id: &ProductId) -> ApiResult<()>;
}

// web_app/api/http.rs - reqwest implementation of WishlistApi
//
// Thin wrappers: build the URL, send, check the status, decode the body
// into the typed model. A body that does not match the expected shape is
// an error (UnexpectedBody), never a silent success.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, WishlistApi};
use crate::config::ClientConfig;
use crate::web_app::model::*;

/// HTTP client for the wishlist backend
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::from(config.backend_url.as_str()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Send the request and read the whole body, whatever the status
    async fn send(&self, request: RequestBuilder) -> ApiResult<(StatusCode, String)> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Send the request and return the body of a successful response
    async fn execute(&self, request: RequestBuilder) -> ApiResult<String> {
        let (status, body) = self.send(request).await?;
        classify(status, body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.execute(request).await?;
        decode(&body)
    }

    fn product_form(submission: &ProductSubmission) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in submission.text_fields() {
            form = form.text(name, value);
        }

        if let ProductImage::Upload(upload) = &submission.image {
            let part = Part::bytes(upload.bytes.clone())
                .file_name(upload.file_name.clone())
                .mime_str(&upload.content_type)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            form = form.part(PRODUCT_IMAGE_FIELD, part);
        }
        Ok(form)
    }
}

/// Map a response status onto the body or an error
///
/// 404 is NotFound; any other non-2xx status keeps its body for the log.
pub fn classify(status: StatusCode, body: String) -> ApiResult<String> {
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Status check for endpoints whose body carries nothing we use
pub fn acknowledge(status: StatusCode, body: String) -> ApiResult<()> {
    classify(status, body).map(|_| ())
}

/// Decode a body that is `null` when the record does not exist
pub fn decode_optional<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    decode::<Option<T>>(body)?.ok_or(ApiError::NotFound)
}

/// Decode a JSON body into `T`
pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::UnexpectedBody(e.to_string()))
}

/// `{ success: true }` or an error
pub fn expect_success(body: &str) -> ApiResult<()> {
    let flag: SuccessFlag = decode(body)?;
    if flag.success {
        Ok(())
    } else {
        Err(ApiError::Rejected)
    }
}

/// Whether a response body counts as a truthy JSON value
///
/// Empty bodies, `null`, `false`, `0` and `""` are falsy; objects and arrays
/// are truthy even when empty. Non-JSON text is truthy when non-empty.
pub fn is_truthy(body: &str) -> bool {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return false;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Null) => false,
        Ok(serde_json::Value::Bool(b)) => b,
        Ok(serde_json::Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Ok(serde_json::Value::String(s)) => !s.is_empty(),
        Ok(_) => true,
        Err(_) => true,
    }
}

impl WishlistApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        let url = self.endpoint(&["api", "users", "login"])?;
        tracing::debug!("POST {}", url);
        let response: LoginResponse = self.fetch(self.client.post(url).json(credentials)).await?;
        Ok(response.data.user)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<UserId> {
        let url = self.endpoint(&["api", "users", "register"])?;
        tracing::debug!("POST {}", url);
        let created: CreatedId = self.fetch(self.client.post(url).json(request)).await?;
        Ok(UserId::new(created.id))
    }

    async fn joined_wishlists(&self, user_id: &UserId) -> ApiResult<Vec<WishlistSummary>> {
        let url = self.endpoint(&["api", "users", "wishlist", user_id.as_str()])?;
        tracing::debug!("GET {}", url);
        self.fetch(self.client.get(url)).await
    }

    async fn get_wishlist(&self, id: &WishlistId) -> ApiResult<WishlistSummary> {
        let url = self.endpoint(&["api", "wishlist", "get", id.as_str()])?;
        tracing::debug!("GET {}", url);
        // The backend answers 200 with a null body for unknown ids
        let body = self.execute(self.client.get(url)).await?;
        decode_optional(&body)
    }

    async fn create_wishlist(&self, request: &CreateWishlistRequest) -> ApiResult<WishlistId> {
        let url = self.endpoint(&["api", "wishlist", "create"])?;
        tracing::debug!("POST {}", url);
        let created: CreatedId = self.fetch(self.client.post(url).json(request)).await?;
        Ok(WishlistId::new(created.id))
    }

    async fn join_wishlist(&self, request: &JoinWishlistRequest) -> ApiResult<()> {
        let url = self.endpoint(&["api", "wishlist", "join"])?;
        tracing::debug!("POST {}", url);
        let (status, body) = self.send(self.client.post(url).json(request)).await?;
        acknowledge(status, body)
    }

    async fn wishlist_products(&self, id: &WishlistId) -> ApiResult<WishlistDetail> {
        let url = self.endpoint(&["api", "product", "get", id.as_str()])?;
        tracing::debug!("GET {}", url);
        self.fetch(self.client.get(url)).await
    }

    async fn add_product(&self, submission: &ProductSubmission) -> ApiResult<()> {
        let url = self.endpoint(&["api", "product", "create"])?;
        tracing::debug!("POST {} (multipart)", url);
        let form = Self::product_form(submission)?;
        let body = self.execute(self.client.post(url).multipart(form)).await?;
        expect_success(&body)
    }

    async fn edit_product(&self, submission: &ProductSubmission) -> ApiResult<()> {
        let url = self.endpoint(&["api", "product", "edit"])?;
        tracing::debug!("PUT {} (multipart)", url);
        let form = Self::product_form(submission)?;
        let body = self.execute(self.client.put(url).multipart(form)).await?;
        expect_success(&body)
    }

    async fn delete_product(&self, id: &ProductId) -> ApiResult<()> {
        let url = self.endpoint(&["api", "product", "delete", id.as_str()])?;
        tracing::debug!("DELETE {}", url);
        let body = self.execute(self.client.delete(url)).await?;
        if is_truthy(&body) {
            Ok(())
        } else {
            Err(ApiError::Rejected)
        }
    }
}

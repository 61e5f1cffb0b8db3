// web_app/model/mod.rs - Data models shared by the backend client and the UI
//
// Entities are owned by the backend; the client only holds transient,
// page-scoped copies. Field names follow the backend's JSON (`_id`,
// camelCase) through serde renames.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Backend identifier of a user
    UserId
);
string_id!(
    /// Backend identifier of a wishlist, shared with friends to join it
    WishlistId
);
string_id!(
    /// Backend identifier of a product inside a wishlist
    ProductId
);

/// A user as returned by the backend (never includes the credential)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Login response envelope: `{ data: { user: {...} } }`
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    pub user: User,
}

/// `{ _id }` returned by register and create-wishlist
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedId {
    #[serde(rename = "_id")]
    pub id: String,
}

/// `{ success }` returned by the product mutations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SuccessFlag {
    #[serde(default)]
    pub success: bool,
}

/// Wishlist as listed in search results and the joined-wishlists page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistSummary {
    #[serde(rename = "_id")]
    pub id: WishlistId,
    pub name: String,
    #[serde(default)]
    pub owner_name: String,
}

/// Wishlist together with its products
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDetail {
    #[serde(rename = "_id")]
    pub id: WishlistId,
    pub name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default, rename = "email")]
    pub owner_email: Option<String>,
    pub products: Vec<Product>,
}

/// An item within a wishlist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "price_or_empty")]
    pub price: Price,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub edited_by: Option<EditorRef>,
}

impl Product {
    /// Email of the last editor, when the backend populated it
    pub fn editor_email(&self) -> Option<&str> {
        match &self.edited_by {
            Some(EditorRef::Populated(editor)) => editor.email.as_deref(),
            _ => None,
        }
    }
}

/// Price as stored by the backend
///
/// The backend keeps whatever text was submitted, so a price is a decimal
/// amount when it parses and the raw text otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(Decimal),
    Text(String),
}

impl Price {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Price::Amount(amount) => Some(*amount),
            Price::Text(_) => None,
        }
    }

    /// Text to pre-fill an edit form with
    pub fn as_input(&self) -> String {
        match self {
            Price::Amount(amount) => amount.to_string(),
            Price::Text(text) => text.clone(),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Text(String::new())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Price::Amount(amount)
    }
}

/// Two decimals for amounts, the raw text otherwise
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{:.2}", amount),
            Price::Text(text) => f.write_str(text.trim()),
        }
    }
}

/// `null` prices read as empty text
fn price_or_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Price, D::Error> {
    Option::<Price>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Last-editor reference: either the populated user or a bare id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditorRef {
    Populated(Editor),
    Id(UserId),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    #[serde(default, rename = "_id")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Sign-in request body
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up request body (full profile)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_name: String,
    pub phone: String,
    pub role: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistRequest {
    pub name: String,
    pub owner_name: String,
    pub email: String,
    pub user_id: UserId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinWishlistRequest {
    // The backend spells this key with a capital L
    #[serde(rename = "wishListId")]
    pub wishlist_id: WishlistId,
    pub user_id: UserId,
}

/// Image file read from the browser, ready to upload
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What happens to the product image on submit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProductImage {
    /// No image at all
    #[default]
    None,
    /// Keep the image the product already has
    Keep(String),
    /// Replace it with a newly chosen file
    Upload(ImageUpload),
}

/// Multipart form field carrying a new image file
pub const PRODUCT_IMAGE_FIELD: &str = "productImage";

/// Multipart form field carrying a retained image reference
pub const IMAGE_URL_FIELD: &str = "imageUrl";

/// Add/edit product submission, sent as multipart/form-data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSubmission {
    pub user_id: UserId,
    pub wishlist_id: WishlistId,
    /// Present for edits only
    pub product_id: Option<ProductId>,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: ProductImage,
}

impl ProductSubmission {
    /// Text fields in the order they are appended to the form
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("userId", self.user_id.to_string()),
            ("wishlistId", self.wishlist_id.to_string()),
        ];
        if let Some(product_id) = &self.product_id {
            fields.push(("productId", product_id.to_string()));
        }
        fields.push(("name", self.name.clone()));
        fields.push(("price", self.price.clone()));
        fields.push(("description", self.description.clone()));
        if let ProductImage::Keep(url) = &self.image {
            fields.push((IMAGE_URL_FIELD, url.clone()));
        }
        fields
    }

    /// Image reference the backend will end up with, if known up front
    pub fn retained_image(&self) -> Option<&str> {
        match &self.image {
            ProductImage::Keep(url) => Some(url),
            _ => None,
        }
    }
}

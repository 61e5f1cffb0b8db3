// web_app/forms.rs - Form state and local validation
//
// Validation is presence-only: a value that is empty after trimming counts
// as missing. Values that pass are sent as typed, untrimmed.

use std::collections::BTreeMap;

use crate::web_app::model::*;

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Per-field error messages keyed by the form field name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Credentials, or None if either field is missing
    pub fn credentials(&self) -> Option<Credentials> {
        if is_present(&self.email) && is_present(&self.password) {
            Some(Credentials {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_name: String,
    pub phone: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let required = [
            ("firstName", &self.first_name, "First name is required"),
            ("lastName", &self.last_name, "Last name is required"),
            ("email", &self.email, "Email is required"),
            ("userName", &self.user_name, "userName is required"),
            ("phone", &self.phone, "Phone number is required"),
            ("role", &self.role, "Role is required"),
            ("password", &self.password, "Password is required"),
        ];
        for (field, value, message) in required {
            if !is_present(value) {
                errors.insert(field, message);
            }
        }
        if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            user_name: self.user_name.clone(),
            phone: self.phone.clone(),
            role: self.role.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateWishlistForm {
    pub name: String,
    pub owner_name: String,
    pub email: String,
}

impl CreateWishlistForm {
    /// Request body, or None if any field is missing
    pub fn request(&self, user_id: &UserId) -> Option<CreateWishlistRequest> {
        let complete = [&self.name, &self.owner_name, &self.email]
            .iter()
            .all(|value| is_present(value));
        complete.then(|| CreateWishlistRequest {
            name: self.name.clone(),
            owner_name: self.owner_name.clone(),
            email: self.email.clone(),
            user_id: user_id.clone(),
        })
    }
}

/// A freshly chosen image file together with its object URL preview
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingImage {
    pub upload: ImageUpload,
    pub preview_url: String,
}

/// State of the add/edit product modal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Set when editing an existing product
    pub product_id: Option<ProductId>,
    pub name: String,
    pub price: String,
    pub description: String,
    /// Image the product already has (edit only)
    pub current_image: Option<String>,
    pub new_image: Option<PendingImage>,
    /// Bumped each time the modal opens or closes; image reads started
    /// under an older value are discarded
    pub session: u64,
}

impl ProductForm {
    /// Pre-populated edit form
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: Some(product.id.clone()),
            name: product.name.clone(),
            price: product.price.as_input(),
            description: product.description.clone().unwrap_or_default(),
            current_image: product.image_url.clone().filter(|url| !url.is_empty()),
            new_image: None,
            session: 0,
        }
    }

    /// Replace the form with `next` under a new session.
    ///
    /// Returns the newly chosen image the old form was holding, if any.
    pub fn restart(&mut self, next: ProductForm) -> Option<PendingImage> {
        let session = self.session.wrapping_add(1);
        let previous = std::mem::replace(self, next);
        self.session = session;
        previous.new_image
    }

    /// Attach an image read under `session`.
    ///
    /// Ok holds the image it replaced. A read from an earlier session is
    /// handed back as Err and the form is left untouched.
    pub fn accept_image(&mut self, session: u64, image: PendingImage) -> Result<Option<PendingImage>, PendingImage> {
        if session != self.session {
            return Err(image);
        }
        Ok(self.choose_image(image))
    }

    pub fn is_edit(&self) -> bool {
        self.product_id.is_some()
    }

    /// The image that will be submitted, as a displayable URL
    pub fn preview_url(&self) -> Option<String> {
        self.new_image
            .as_ref()
            .map(|image| image.preview_url.clone())
            .or_else(|| self.current_image.clone())
    }

    /// Store a newly chosen file; returns the one it replaced
    pub fn choose_image(&mut self, image: PendingImage) -> Option<PendingImage> {
        self.new_image.replace(image)
    }

    /// Drop the newly chosen file, reverting to the original image
    pub fn remove_new_image(&mut self) -> Option<PendingImage> {
        self.new_image.take()
    }

    /// Submission for this form, or None if name or price is missing
    pub fn submission(&self, user_id: &UserId, wishlist_id: &WishlistId) -> Option<ProductSubmission> {
        if !is_present(&self.name) || !is_present(&self.price) {
            return None;
        }
        let image = match (&self.new_image, &self.current_image) {
            (Some(pending), _) => ProductImage::Upload(pending.upload.clone()),
            (None, Some(url)) => ProductImage::Keep(url.clone()),
            (None, None) => ProductImage::None,
        };
        Some(ProductSubmission {
            user_id: user_id.clone(),
            wishlist_id: wishlist_id.clone(),
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
            image,
        })
    }
}

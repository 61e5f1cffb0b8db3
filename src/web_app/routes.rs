// web_app/routes.rs - Client route paths

use crate::web_app::model::WishlistId;

pub const ROOT: &str = "/";
pub const HOME: &str = "/home";
pub const LOGIN: &str = "/login";
pub const SIGN_UP: &str = "/login?mode=signup";
pub const SEARCH: &str = "/search";
pub const MY_WISHLISTS: &str = "/myWishlists";

/// Query parameter selecting the auth tab
pub const MODE_PARAM: &str = "mode";

/// Path of one wishlist's product page
pub fn wishlist(id: &WishlistId) -> String {
    format!("/wishlist/{}", id)
}

/// Pages that need a signed-in user
pub fn requires_user(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    path == SEARCH || path == MY_WISHLISTS || path.starts_with("/wishlist/")
}

/// Which tab the auth page opens on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("signup") => AuthMode::SignUp,
            _ => AuthMode::SignIn,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_path() {
        assert_eq!(wishlist(&WishlistId::new("abc123")), "/wishlist/abc123");
    }

    #[test]
    fn test_user_scoped_paths() {
        assert!(requires_user("/search"));
        assert!(requires_user("/myWishlists"));
        assert!(requires_user("/wishlist/abc"));
        assert!(!requires_user("/home"));
        assert!(!requires_user("/login?mode=signup"));
    }
}

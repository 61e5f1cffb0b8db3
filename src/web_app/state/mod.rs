// web_app/state/mod.rs - Client-side UI state
//
// Framework-light building blocks shared by every page:
// - request.rs: loading flags, the scoped LoadingGuard, page-bound tasks
// - toast.rs: the single-slot toast with timed dismissal
// - session.rs: identity carried across navigation

pub mod request;
pub mod session;
pub mod toast;

pub use request::*;
pub use session::*;
pub use toast::*;

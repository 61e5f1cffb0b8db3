// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It provides the app-wide context (configuration, backend client, session,
// toaster), sets up routing, and renders the toast outside the routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::ClientConfig;
use crate::web_app::api::HttpApi;
use crate::web_app::components::{provide_toaster, ToastView};
use crate::web_app::pages::*;
use crate::web_app::routes;
use crate::web_app::state::provide_session;

/// Page title
pub const APP_TITLE: &str = "WishShare";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Configuration, backend client, session and toaster contexts
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let config = ClientConfig::from_env();
    tracing::info!("WishShare client starting, backend at {}", config.backend_url);
    provide_context(HttpApi::new(&config));
    provide_context(config);
    provide_session();
    let toaster = provide_toaster();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Create and share wishlists with friends and family" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <main class="min-h-screen font-sans text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/home") view=DashboardPage />
                    <Route path=path!("/login") view=AuthPage />
                    <Route path=path!("/search") view=SearchWishlistPage />
                    <Route path=path!("/myWishlists") view=JoinedWishlistsPage />
                    <Route path=path!("/wishlist/:id") view=WishlistProductsPage />
                </Routes>
            </main>
            <ToastView toaster=toaster />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=routes::HOME
                    class="px-6 py-3 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors"
                >
                    "Go to Dashboard"
                </a>
            </div>
        </div>
    }
}

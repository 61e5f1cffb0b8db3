// web_app/pages/dashboard.rs - Dashboard page
//
// Entry points that depend on whether someone is signed in.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::web_app::routes;
use crate::web_app::state::use_session;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let signed_in = Memo::new(move |_| session.0.with(|s| s.is_signed_in()));
    let user_name = Memo::new(move |_| session.0.with(|s| s.display_name().to_string()));

    let switch_account = move |_: web_sys::MouseEvent| {
        session.sign_out();
        navigate(routes::LOGIN, Default::default());
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 to-white p-4">
            <div class="max-w-md mx-auto bg-white rounded-xl shadow-md overflow-hidden p-8 mt-12">
                <div class="text-center mb-10">
                    <h1 class="text-3xl font-bold text-purple-700 mb-2">"WishShare"</h1>
                    <p class="text-gray-600">"Create and share wishlists with friends and family"</p>
                </div>

                <Show
                    when=move || signed_in.get()
                    fallback=|| view! {
                        <div class="space-y-4">
                            <h2 class="text-xl font-semibold text-center text-gray-800 mb-6">
                                "Get started with WishShare"
                            </h2>
                            <EntryCard href=routes::LOGIN title="Sign in" subtitle="Sign in to your account" icon="→" />
                            <EntryCard href=routes::SIGN_UP title="Create account" subtitle="Create a new account" icon="+" />
                        </div>
                    }
                >
                    <div class="space-y-4">
                        <h2 class="text-xl font-semibold text-center text-gray-800 mb-6">"Welcome back!"</h2>
                        <EntryCard href=routes::SEARCH title="Find a Wishlist" subtitle="Search for wishlists to join" icon="🔍" />
                        <EntryCard href=routes::MY_WISHLISTS title="My Wishlists" subtitle="View your joined wishlists" icon="☰" />
                    </div>
                </Show>

                <div class="mt-8 text-center text-sm text-gray-500">
                    <Show
                        when=move || signed_in.get()
                        fallback=|| view! { <p>"Sign in to create or join wishlists"</p> }
                    >
                        <button class="text-purple-600 hover:text-purple-800" on:click=switch_account.clone()>
                            "Not " {move || user_name.get()} "? Switch account"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Large link card used for the dashboard entry points
#[component]
fn EntryCard(
    href: &'static str,
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            attr:class="w-full flex items-center p-4 bg-white border border-purple-200 rounded-lg shadow-sm hover:bg-purple-50 transition duration-300"
        >
            <div class="p-3 bg-purple-100 rounded-lg mr-4 text-purple-600 text-xl w-12 text-center">{icon}</div>
            <div class="text-left">
                <h3 class="font-medium text-gray-900">{title}</h3>
                <p class="text-sm text-gray-500">{subtitle}</p>
            </div>
        </A>
    }
}

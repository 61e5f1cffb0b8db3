// web_app/pages/joined.rs - The user's wishlists

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::{use_api, user_scoped};
use crate::web_app::actions::{joined, messages};
use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::routes;
use crate::web_app::state::{settle, use_page_tasks, use_session, with_loading};

/// Joined wishlists page component (needs a signed-in user)
#[component]
pub fn JoinedWishlistsPage() -> impl IntoView {
    user_scoped("My Wishlists", |user_id| view! { <JoinedView user_id=user_id /> })
}

#[component]
fn JoinedView(user_id: UserId) -> impl IntoView {
    let api = use_api();
    let toaster = use_toaster();
    let tasks = use_page_tasks();
    let session = use_session();
    let navigate = use_navigate();

    let wishlists = RwSignal::new(Vec::<WishlistSummary>::new());
    let loading = RwSignal::new(true);

    // Fetch on mount
    let request = with_loading(loading, async move { joined::load(&api, &user_id).await });
    tasks.spawn(async move {
        let result = request.await;
        if let Some(notice) = wishlists.try_update(|list| settle(list, result)).flatten() {
            toaster.show(notice);
        }
    });

    let on_open = Callback::new(move |wishlist_id: WishlistId| {
        tracing::info!("Opening wishlist {}", wishlist_id);
        let path = routes::wishlist(&wishlist_id);
        session.open_wishlist(wishlist_id);
        navigate(&path, Default::default());
    });

    view! {
        <div class="min-h-screen bg-white">
            <div class="max-w-7xl mx-auto px-4 py-6">
                <div class="flex items-center justify-between mb-8">
                    <BackLink href=routes::HOME />
                    <A
                        href=routes::SEARCH
                        attr:class="px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 font-medium"
                    >
                        "Find a Wishlist"
                    </A>
                </div>

                <h1 class="text-2xl font-bold text-purple-700 mb-6">"My Wishlists"</h1>

                <Show when=move || !loading.get() fallback=|| view! { <Loading message="Loading wishlists..." /> }>
                    <Show
                        when=move || wishlists.with(|list| !list.is_empty())
                        fallback=|| view! {
                            <EmptyState message=messages::NO_JOINED_WISHLISTS>
                                <A href=routes::SEARCH attr:class="text-purple-600 hover:text-purple-800 font-medium">
                                    "Find a Wishlist"
                                </A>
                            </EmptyState>
                        }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For
                                each=move || wishlists.get()
                                key=|wishlist| wishlist.id.clone()
                                children=move |wishlist| view! { <WishlistCard wishlist=wishlist on_open=on_open /> }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

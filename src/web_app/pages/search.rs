// web_app/pages/search.rs - Search, join and create wishlists
//
// Finds a wishlist by its shareable id, joins it, or creates a new one.
// Searching, joining and creating each have their own busy flag.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use super::{use_api, user_scoped};
use crate::web_app::actions::search::{self, CreateModal};
use crate::web_app::browser;
use crate::web_app::components::*;
use crate::web_app::forms::CreateWishlistForm;
use crate::web_app::model::*;
use crate::web_app::routes;
use crate::web_app::state::{use_page_tasks, with_loading};

/// Search page component (needs a signed-in user)
#[component]
pub fn SearchWishlistPage() -> impl IntoView {
    user_scoped("Search", |user_id| view! { <SearchView user_id=user_id /> })
}

#[component]
fn SearchView(user_id: UserId) -> impl IntoView {
    let api = use_api();
    let toaster = use_toaster();
    let tasks = use_page_tasks();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let found = RwSignal::new(None::<WishlistSummary>);
    let searching = RwSignal::new(false);
    let joining = RwSignal::new(false);
    let creating = RwSignal::new(false);

    let modal = RwSignal::new(CreateModal::Closed);
    let name = RwSignal::new(String::new());
    let owner_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let on_search = {
        let (api, toaster, tasks) = (api.clone(), toaster.clone(), tasks.clone());
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let (api, toaster) = (api.clone(), toaster.clone());
            let text = query.get_untracked();
            let request = with_loading(searching, async move { search::find_wishlist(&api, &text).await });
            tasks.spawn(async move {
                match request.await {
                    Ok(wishlist) => {
                        found.try_set(Some(wishlist));
                    }
                    Err(notice) => toaster.show(notice),
                }
            });
        }
    };

    let on_join = {
        let (api, toaster, tasks, user_id) = (api.clone(), toaster.clone(), tasks.clone(), user_id.clone());
        let navigate = navigate.clone();
        Callback::new(move |wishlist_id: WishlistId| {
            if joining.get_untracked() {
                return;
            }
            let (api, toaster, user_id, navigate) =
                (api.clone(), toaster.clone(), user_id.clone(), navigate.clone());
            let request = with_loading(joining, async move { search::join(&api, &wishlist_id, &user_id).await });
            tasks.spawn(async move {
                match request.await {
                    Ok(done) => {
                        toaster.show(done.notice);
                        navigate(routes::MY_WISHLISTS, Default::default());
                    }
                    Err(notice) => toaster.show(notice),
                }
            });
        })
    };

    let reset_create_form = move || {
        name.set(String::new());
        owner_name.set(String::new());
        email.set(String::new());
    };

    let close_modal = Callback::new(move |()| {
        modal.set(CreateModal::Closed);
        reset_create_form();
    });

    let on_create = {
        let (api, toaster, tasks) = (api.clone(), toaster.clone(), tasks.clone());
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if creating.get_untracked() {
                return;
            }
            let (api, toaster, user_id) = (api.clone(), toaster.clone(), user_id.clone());
            let form = CreateWishlistForm {
                name: name.get_untracked(),
                owner_name: owner_name.get_untracked(),
                email: email.get_untracked(),
            };
            let request = with_loading(creating, async move { search::create(&api, &form, &user_id).await });
            tasks.spawn(async move {
                match request.await {
                    Ok(done) => {
                        modal.try_set(CreateModal::Created(done.value));
                        toaster.show(done.notice);
                    }
                    Err(notice) => toaster.show(notice),
                }
            });
        }
    };

    let on_copy = {
        let (toaster, tasks) = (toaster.clone(), tasks.clone());
        move |_: web_sys::MouseEvent| {
            let Some(id) = modal.with_untracked(|m| m.created_id().cloned()) else {
                return;
            };
            let toaster = toaster.clone();
            tasks.spawn(async move {
                let result = browser::copy_to_clipboard(id.as_str()).await;
                toaster.show(search::copy_notice(result));
            });
        }
    };

    let view_mine = move |_: web_sys::MouseEvent| {
        modal.set(CreateModal::Closed);
        reset_create_form();
        navigate(routes::MY_WISHLISTS, Default::default());
    };

    view! {
        <div class="min-h-screen bg-white">
            <div class="max-w-3xl mx-auto px-4 py-6">
                <div class="flex items-center justify-between mb-8">
                    <BackLink href=routes::HOME />
                    <Button on_click=Callback::new(move |()| modal.set(CreateModal::Form))>
                        "+ Create Wishlist"
                    </Button>
                </div>

                <h1 class="text-2xl font-bold text-purple-700 mb-2">"Find a Wishlist"</h1>
                <p class="text-gray-600 mb-6">"Enter the wishlist ID shared with you to join it."</p>

                <form class="flex gap-3 mb-8" on:submit=on_search>
                    <TextInput value=query name="wishlistId" placeholder="Wishlist ID" />
                    <Button button_type="submit" busy=searching busy_label="Searching...">
                        "Search"
                    </Button>
                </form>

                {move || match found.get() {
                    Some(wishlist) => view! {
                        <SearchResultCard wishlist=wishlist on_join=on_join joining=joining />
                    }.into_any(),
                    None => view! {
                        <EmptyState message="Search results will appear here" />
                    }.into_any(),
                }}
            </div>

            {move || {
                let on_create = on_create.clone();
                let on_copy = on_copy.clone();
                let view_mine = view_mine.clone();
                match modal.get() {
                CreateModal::Closed => None,
                CreateModal::Form => Some(view! {
                    <ModalWrapper title=CreateModal::Form.title() on_close=close_modal>
                        <form class="space-y-4" on:submit=on_create.clone()>
                            <FormField label="Wishlist Name">
                                <TextInput value=name name="name" placeholder="Birthday 2025" />
                            </FormField>
                            <FormField label="Your Name">
                                <TextInput value=owner_name name="ownerName" placeholder="John Doe" />
                            </FormField>
                            <FormField label="Your Email">
                                <TextInput value=email name="email" input_type="email" placeholder="john@example.com" />
                            </FormField>
                            <div class="flex justify-end gap-2 pt-2">
                                <SecondaryButton on_click=close_modal disabled=creating>"Cancel"</SecondaryButton>
                                <Button button_type="submit" busy=creating busy_label="Creating...">
                                    "Create Wishlist"
                                </Button>
                            </div>
                        </form>
                    </ModalWrapper>
                }.into_any()),
                CreateModal::Created(id) => Some(view! {
                    <ModalWrapper title=CreateModal::Created(id.clone()).title() on_close=close_modal>
                        <div class="space-y-4 text-center">
                            <p class="text-gray-600">"Share this ID with friends so they can join:"</p>
                            <div class="flex items-center gap-2 bg-gray-50 border border-gray-200 rounded-lg p-3">
                                <code class="flex-1 text-purple-700 font-mono break-all">{id.to_string()}</code>
                                <button
                                    type="button"
                                    class="px-3 py-1 text-sm bg-purple-100 text-purple-700 rounded hover:bg-purple-200"
                                    on:click=on_copy.clone()
                                >
                                    "Copy"
                                </button>
                            </div>
                            <button
                                type="button"
                                class="w-full px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700"
                                on:click=view_mine.clone()
                            >
                                "View My Wishlist"
                            </button>
                        </div>
                    </ModalWrapper>
                }.into_any()),
                }
            }}
        </div>
    }
}

// web_app/pages/products.rs - Items of one wishlist
//
// Loads the wishlist on mount and after every successful mutation. The add
// and edit modals share ProductForm; the edit form starts from the product
// and keeps its image unless a new file is chosen.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use web_sys::SubmitEvent;

use super::{use_api, user_scoped};
use crate::web_app::actions::messages;
use crate::web_app::actions::products::{self, ListStatus, ProductModal};
use crate::web_app::api::HttpApi;
use crate::web_app::browser;
use crate::web_app::components::*;
use crate::web_app::forms::ProductForm;
use crate::web_app::model::*;
use crate::web_app::routes;
use crate::web_app::state::{settle, use_page_tasks, use_session, with_loading, PageTasks};

/// Wishlist products page component (needs a signed-in user)
#[component]
pub fn WishlistProductsPage() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();

    user_scoped("Wishlist", move |user_id| {
        let from_path = params.with_untracked(|p| p.get("id")).filter(|id| !id.is_empty());
        let wishlist_id = from_path
            .map(WishlistId::new)
            .or_else(|| session.0.with_untracked(|s| s.wishlist_id.clone()));

        match wishlist_id {
            Some(wishlist_id) => view! { <ProductsView user_id=user_id wishlist_id=wishlist_id /> }.into_any(),
            None => view! {
                <div class="max-w-3xl mx-auto px-4 py-12">
                    <EmptyState message=messages::LOAD_WISHLIST_FAILED>
                        <BackLink href=routes::MY_WISHLISTS label="Back to My Wishlists" />
                    </EmptyState>
                </div>
            }
            .into_any(),
        }
    })
}

/// Re-fetches the wishlist into the page's signals
#[derive(Clone)]
struct Reloader {
    api: HttpApi,
    wishlist_id: WishlistId,
    tasks: PageTasks,
    toaster: Toaster,
    detail: RwSignal<Option<WishlistDetail>>,
    loading: RwSignal<bool>,
}

impl Reloader {
    fn reload(&self) {
        let (api, wishlist_id) = (self.api.clone(), self.wishlist_id.clone());
        let (detail, toaster) = (self.detail, self.toaster.clone());
        let request = with_loading(self.loading, async move {
            products::load(&api, &wishlist_id).await.map(Some)
        });
        self.tasks.spawn(async move {
            let result = request.await;
            if let Some(notice) = detail.try_update(|d| settle(d, result)).flatten() {
                toaster.show(notice);
            }
        });
    }
}

#[component]
fn ProductsView(user_id: UserId, wishlist_id: WishlistId) -> impl IntoView {
    let api = use_api();
    let toaster = use_toaster();
    let tasks = use_page_tasks();

    let detail = RwSignal::new(None::<WishlistDetail>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let modal = RwSignal::new(ProductModal::Closed);
    let form = RwSignal::new(ProductForm::default());

    let reloader = Reloader {
        api: api.clone(),
        wishlist_id: wishlist_id.clone(),
        tasks: tasks.clone(),
        toaster: toaster.clone(),
        detail,
        loading,
    };
    reloader.reload();

    // Every open and close starts a new form session; a new image still
    // held by the old form is released.
    let reset_form = move |next: ProductForm| {
        if let Some(old) = form.try_update(|f| f.restart(next)).flatten() {
            browser::revoke_preview(&old);
        }
    };

    let close_modal = Callback::new(move |()| {
        reset_form(ProductForm::default());
        modal.set(ProductModal::Closed);
    });

    let open_add = Callback::new(move |()| {
        reset_form(ProductForm::default());
        modal.set(ProductModal::Add);
    });

    let open_edit = Callback::new(move |product: Product| {
        reset_form(ProductForm::from_product(&product));
        modal.set(ProductModal::Edit);
    });

    let on_submit = {
        let (api, toaster, tasks, reloader) = (api.clone(), toaster.clone(), tasks.clone(), reloader.clone());
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let (api, toaster, reloader) = (api.clone(), toaster.clone(), reloader.clone());
            let (user_id, wishlist_id) = (user_id.clone(), wishlist_id.clone());
            let current = form.get_untracked();
            let mode = modal.get_untracked();

            let request = with_loading(saving, async move {
                match mode {
                    ProductModal::Edit => products::edit(&api, &current, &user_id, &wishlist_id).await,
                    _ => products::add(&api, &current, &user_id, &wishlist_id).await,
                }
            });
            tasks.spawn(async move {
                match request.await {
                    Ok(done) => {
                        close_modal.run(());
                        toaster.show(done.notice);
                        reloader.reload();
                    }
                    Err(notice) => toaster.show(notice),
                }
            });
        }
    };

    let on_delete = {
        let (api, toaster, tasks, reloader) = (api.clone(), toaster.clone(), tasks.clone(), reloader.clone());
        Callback::new(move |product_id: ProductId| {
            if deleting.get_untracked() || !browser::confirm(messages::CONFIRM_DELETE) {
                return;
            }
            let (api, toaster, reloader) = (api.clone(), toaster.clone(), reloader.clone());
            let request = with_loading(deleting, async move { products::delete(&api, &product_id).await });
            tasks.spawn(async move {
                match request.await {
                    Ok(done) => {
                        toaster.show(done.notice);
                        reloader.reload();
                    }
                    Err(notice) => toaster.show(notice),
                }
            });
        })
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 py-6">
                <div class="flex items-center justify-between mb-6">
                    <BackLink href=routes::MY_WISHLISTS />
                    <Button on_click=open_add>"+ Add Item"</Button>
                </div>

                {move || {
                    let current = detail.get();
                    let status = ListStatus::of(current.is_some(), loading.get());
                    match current {
                        None if status == ListStatus::Loading => {
                            view! { <Loading message="Loading wishlist..." /> }.into_any()
                        }
                        None => view! { <EmptyState message=messages::LOAD_WISHLIST_FAILED /> }.into_any(),
                        Some(wishlist) => {
                            let products = wishlist.products.clone();
                            view! {
                                <div class="bg-white rounded-lg shadow-md p-6 mb-8">
                                    <h1 class="text-2xl font-bold text-purple-700 mb-2">{wishlist.name.clone()}</h1>
                                    <p class="text-gray-600">"Created by: " {wishlist.owner_name.clone()}</p>
                                </div>

                                <div class="flex items-center gap-3 mb-4">
                                    <h2 class="text-xl font-semibold text-purple-700">"Wishlist Items"</h2>
                                    {(status == ListStatus::Refreshing).then(|| view! {
                                        <span class="text-sm text-gray-500 animate-pulse">"Refreshing..."</span>
                                    })}
                                </div>

                                <div class=status.content_class()>
                                    {if products.is_empty() {
                                        view! { <EmptyState message=messages::NO_PRODUCTS /> }.into_any()
                                    } else {
                                        view! {
                                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                                {products.into_iter().map(|product| view! {
                                                    <ProductCard product=product on_edit=open_edit on_delete=on_delete />
                                                }).collect_view()}
                                            </div>
                                        }.into_any()
                                    }}
                                </div>
                            }.into_any()
                        }
                    }
                }}
            </div>

            {move || {
                let mode = modal.get();
                let tasks = tasks.clone();
                let on_submit = on_submit.clone();
                (mode != ProductModal::Closed).then(|| view! {
                    <ModalWrapper title=mode.title() on_close=close_modal>
                        <form class="space-y-4" on:submit=on_submit.clone()>
                            <ProductFields form=form tasks=tasks />
                            <div class="flex justify-end gap-2 pt-4">
                                <SecondaryButton on_click=close_modal disabled=saving>"Cancel"</SecondaryButton>
                                <Button button_type="submit" busy=saving busy_label=mode.submit_label(true)>
                                    {mode.submit_label(false)}
                                </Button>
                            </div>
                        </form>
                    </ModalWrapper>
                })
            }}
        </div>
    }
}

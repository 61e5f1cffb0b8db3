// web_app/components/wishlist.rs - Wishlist and product display components
//
// Components for:
// - WishlistCard: a joined wishlist, clickable
// - SearchResultCard: the wishlist found by id, with its join button
// - ProductCard: one item inside a wishlist, with edit/delete actions
// - ProductFields / ImagePicker: the add/edit product form body

use leptos::prelude::*;

use super::common::{FormField, PriceDisplay};
use super::toast::use_toaster;
use crate::web_app::actions::products::image_read_notice;
use crate::web_app::browser;
use crate::web_app::forms::ProductForm;
use crate::web_app::model::*;
use crate::web_app::state::PageTasks;

/// Card for a wishlist the user has joined
#[component]
pub fn WishlistCard(
    wishlist: WishlistSummary,
    /// Called with the wishlist id when the card is clicked
    on_open: Callback<WishlistId>,
) -> impl IntoView {
    let id = wishlist.id.clone();

    view! {
        <div
            class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                   cursor-pointer border border-gray-100 p-6 transform hover:-translate-y-1"
            on:click=move |_| on_open.run(id.clone())
        >
            <h3 class="text-lg font-bold text-gray-900 mb-2 group-hover:text-purple-700 transition-colors">
                {wishlist.name}
            </h3>
            <p class="text-sm text-gray-600">"Created by: " {wishlist.owner_name}</p>
        </div>
    }
}

/// Search hit with a join button
#[component]
pub fn SearchResultCard(
    wishlist: WishlistSummary,
    on_join: Callback<WishlistId>,
    #[prop(into)]
    joining: Signal<bool>,
) -> impl IntoView {
    let id = wishlist.id.clone();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 p-6 flex items-center justify-between gap-4">
            <div>
                <h3 class="text-lg font-bold text-gray-900">{wishlist.name}</h3>
                <p class="text-sm text-gray-600">"Created by: " {wishlist.owner_name}</p>
            </div>
            <button
                class="px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors \
                       disabled:bg-gray-400 disabled:cursor-not-allowed font-medium"
                disabled=move || joining.get()
                on:click=move |_| on_join.run(id.clone())
            >
                {move || if joining.get() { "Joining..." } else { "Join Wishlist" }}
            </button>
        </div>
    }
}

/// One product in the wishlist grid
#[component]
pub fn ProductCard(
    product: Product,
    on_edit: Callback<Product>,
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    let editor = product.editor_email().map(str::to_string);
    let image = product.image_url.clone().filter(|url| !url.is_empty());
    let product_id = product.id.clone();
    let for_edit = product.clone();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden flex flex-col">
            <div class="h-48 bg-gray-100 relative flex items-center justify-center">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=product.name.clone() class="w-full h-full object-cover" />
                    }.into_any(),
                    None => view! { <span class="text-4xl text-gray-300">"🎁"</span> }.into_any(),
                }}
                <div class="absolute top-2 right-2 flex gap-2">
                    <button
                        class="bg-white p-1.5 rounded-full shadow-md hover:bg-gray-100 text-purple-700 text-sm"
                        title="Edit"
                        on:click=move |_| on_edit.run(for_edit.clone())
                    >
                        "✎"
                    </button>
                    <button
                        class="bg-white p-1.5 rounded-full shadow-md hover:bg-gray-100 text-red-600 text-sm"
                        title="Delete"
                        on:click=move |_| on_delete.run(product_id.clone())
                    >
                        "🗑"
                    </button>
                </div>
            </div>

            <div class="p-4 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-2 gap-2">
                    <h3 class="text-lg font-semibold text-gray-800">{product.name.clone()}</h3>
                    <PriceDisplay price=product.price.clone() highlight=false />
                </div>
                <p class="text-gray-600 text-sm mb-3 line-clamp-2 flex-1">
                    {product.description.clone().unwrap_or_default()}
                </p>
                {editor.map(|email| view! {
                    <div class="border-t pt-3 text-xs text-gray-500">"Last edited by " {email}</div>
                })}
            </div>
        </div>
    }
}

/// Name, price, description and image inputs bound to `form`
#[component]
pub fn ProductFields(
    form: RwSignal<ProductForm>,
    /// Task set of the page, which owns the image read
    tasks: PageTasks,
) -> impl IntoView {
    let input_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                       focus:ring-2 focus:ring-purple-500 focus:border-transparent outline-none";

    view! {
        <div class="space-y-4">
            <FormField label="Item Name *">
                <input
                    type="text"
                    name="name"
                    placeholder="Item name"
                    class=input_class
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </FormField>
            <FormField label="Price *">
                <div class="relative">
                    <span class="absolute inset-y-0 left-0 pl-3 flex items-center text-gray-500">"$"</span>
                    <input
                        type="text"
                        name="price"
                        placeholder="0.00"
                        class=format!("{} pl-8", input_class)
                        prop:value=move || form.with(|f| f.price.clone())
                        on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                    />
                </div>
            </FormField>
            <FormField label="Description">
                <textarea
                    name="description"
                    rows="3"
                    placeholder="Describe the item"
                    class=input_class
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </FormField>
            <ImagePicker form=form tasks=tasks />
        </div>
    }
}

/// File chooser with preview of the image that will be submitted
///
/// The read is tied to the form session it started in: if the modal was
/// closed or reopened meanwhile, the result is discarded.
#[component]
pub fn ImagePicker(form: RwSignal<ProductForm>, tasks: PageTasks) -> impl IntoView {
    let toaster = use_toaster();
    let preview = Signal::derive(move || form.with(|f| f.preview_url()));
    let has_new = Signal::derive(move || form.with(|f| f.new_image.is_some()));
    let is_edit = Signal::derive(move || form.with(|f| f.is_edit()));

    let on_change = move |ev: web_sys::Event| {
        let Some(file) = browser::selected_file(&ev) else {
            return;
        };
        let Some(session) = form.try_with_untracked(|f| f.session) else {
            return;
        };
        let toaster = toaster.clone();
        tasks.spawn(async move {
            let image = match browser::read_image(file).await {
                Ok(image) => image,
                Err(err) => {
                    toaster.show(image_read_notice(err));
                    return;
                }
            };
            match form.try_update(|f| f.accept_image(session, image)) {
                Some(Ok(Some(replaced))) => browser::revoke_preview(&replaced),
                Some(Ok(None)) | None => {}
                Some(Err(stale)) => {
                    tracing::debug!("Discarding image read for a closed form");
                    browser::revoke_preview(&stale);
                }
            }
        });
    };

    let remove_new = move |_: web_sys::MouseEvent| {
        if let Some(old) = form.try_update(|f| f.remove_new_image()).flatten() {
            browser::revoke_preview(&old);
        }
    };

    let label = if is_edit.get_untracked() { "Update Image" } else { "Image" };

    view! {
        <FormField label=label>
            <div class="mt-1 flex flex-col items-center gap-2 px-6 pt-5 pb-6 border-2 border-gray-300 border-dashed rounded-lg">
                {move || preview.get().map(|src| view! {
                    <img src=src alt="Preview" class="mx-auto h-32 w-auto object-contain" />
                })}
                <Show
                    when=move || has_new.get()
                    fallback=move || view! {
                        <label class="cursor-pointer font-medium text-purple-600 hover:text-purple-700 text-sm">
                            <span>{move || if is_edit.get() { "Upload new image" } else { "Upload an image" }}</span>
                            <input type="file" class="sr-only" accept="image/*" on:change=on_change.clone() />
                        </label>
                        <p class="text-xs text-gray-500">"PNG, JPG, GIF up to 10MB"</p>
                    }
                >
                    <button type="button" class="text-sm text-red-600 hover:text-red-700" on:click=remove_new>
                        {move || if is_edit.get() { "Remove new image" } else { "Remove image" }}
                    </button>
                </Show>
            </div>
        </FormField>
    }
}

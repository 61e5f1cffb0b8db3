// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used by every page.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::model::Price;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-purple-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Primary button component
///
/// While `busy` is set the button is disabled and shows `busy_label`
/// instead of its children.
#[component]
pub fn Button(
    /// Button label
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether a request started by this button is in flight
    #[prop(into, default = Signal::stored(false))]
    busy: Signal<bool>,
    /// Label shown while busy
    #[prop(into, default = Signal::stored("Loading..."))]
    busy_label: Signal<&'static str>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";
    let label = children();

    view! {
        <button
            type=button_type
            disabled=move || busy.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            <span class:hidden=move || busy.get()>{label}</span>
            <Show when=move || busy.get()>
                <span>{move || busy_label.get()}</span>
            </Show>
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Typically the busy flag of the form's primary action
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=class
            on:click=move |_| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Backdrop, title bar and close button. Whether the modal is shown at all
/// is decided by the parent.
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-lg max-h-[90vh] flex flex-col overflow-hidden"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Text input component
///
/// A styled input bound to a string signal.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, email, password, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Form field name
    #[prop(default = "")]
    name: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-purple-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=input_type
            name=name
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Labelled form field with an optional error line
#[component]
pub fn FormField(
    label: &'static str,
    /// Validation message for this field, if any
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            {children()}
            {move || error.get().map(|message| view! {
                <p class="text-sm text-red-600">{message}</p>
            })}
        </div>
    }
}

/// Price display component
///
/// Formats and displays a price value.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Price,
    /// Whether to highlight (larger, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "text-xl font-bold text-purple-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format_price(&price)}
        </span>
    }
}

/// `$12.50` style price text; unparsable prices are shown as entered
pub fn format_price(price: &Price) -> String {
    format!("${}", price)
}

/// Placeholder shown when a list is empty
#[component]
pub fn EmptyState(
    message: &'static str,
    /// Optional call to action below the message
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-gray-50 rounded-2xl border border-dashed border-gray-200">
            <p class="text-gray-500 mb-4">{message}</p>
            {children.map(|c| c())}
        </div>
    }
}

/// Back link shown at the top of a page
#[component]
pub fn BackLink(
    href: &'static str,
    #[prop(default = "Back")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <a href=href class="inline-flex items-center gap-2 text-gray-600 hover:text-purple-700 transition-colors">
            <span>"←"</span>
            <span>{label}</span>
        </a>
    }
}

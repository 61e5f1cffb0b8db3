// web_app/components/toast.rs - Toast notification
//
// One Toaster is provided at the root of the app, so a toast raised right
// before a navigation stays on screen on the next page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::web_app::state::{Notice, PageTasks, ToastKind, ToastSlot, TOAST_DURATION};

/// Handle for showing toasts
#[derive(Clone)]
pub struct Toaster {
    slot: RwSignal<ToastSlot>,
    timers: PageTasks,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::new()),
            timers: PageTasks::new(),
        }
    }

    pub fn slot(&self) -> RwSignal<ToastSlot> {
        self.slot
    }

    /// Show `notice`, replacing whatever is on screen
    pub fn show(&self, notice: Notice) {
        if notice.is_error() {
            tracing::debug!("Error toast: {}", notice.message);
        }
        let Some(generation) = self.slot.try_update(|slot| slot.show(notice)) else {
            return;
        };

        let slot = self.slot;
        self.timers.spawn(async move {
            TimeoutFuture::new(TOAST_DURATION.as_millis() as u32).await;
            slot.try_update(|slot| slot.expire(generation));
        });
    }

    pub fn dismiss(&self) {
        self.slot.try_update(|slot| slot.dismiss());
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster.clone());
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        tracing::warn!("No toaster in context, toasts on this page are local");
        Toaster::new()
    })
}

/// Renders the current toast in the bottom-right corner
#[component]
pub fn ToastView(toaster: Toaster) -> impl IntoView {
    let slot = toaster.slot();
    let close = Callback::new(move |()| toaster.dismiss());

    view! {
        {move || slot.with(|slot| slot.current().map(|toast| toast.notice.clone())).map(|notice| {
            let icon = match notice.kind {
                ToastKind::Success => "✓",
                ToastKind::Error => "✕",
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed bottom-4 right-4 z-[60] flex items-center gap-3 p-4 rounded-lg shadow-lg border {}",
                        notice.kind.classes(),
                    )
                >
                    <span class="font-bold">{icon}</span>
                    <span class="text-sm">{notice.message}</span>
                    <button class="ml-2 opacity-60 hover:opacity-100" title="Close" on:click=move |_| close.run(())>
                        "✕"
                    </button>
                </div>
            }
        })}
    }
}

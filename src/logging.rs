// logging.rs - tracing initialisation
//
// Browser builds send events to the devtools console through tracing-wasm.
// Native builds (tests) use the tracing-subscriber fmt layer filtered by
// RUST_LOG. Calling init() more than once is harmless.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global tracing subscriber for the current target.
pub fn init() {
    INIT.call_once(|| {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                tracing_wasm::set_as_global_default();
            } else {
                use tracing_subscriber::EnvFilter;

                let filter = EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("wishshare=info"));

                // A test harness may already have installed a subscriber
                let _ = tracing_subscriber::fmt()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_env_filter(filter)
                    .try_init();
            }
        }
        tracing::info!("Logging initialised");
    });
}

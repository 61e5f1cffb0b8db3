// WishShare client entry point
//
// Built with `trunk serve --features csr`; mounts the Leptos application
// onto <body>.

#[cfg(feature = "csr")]
fn main() {
    use wishshare::web_app::App;

    console_error_panic_hook::set_once();
    wishshare::logging::init();
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    panic!("This binary requires the 'csr' feature. Run with: trunk serve --features csr");
}

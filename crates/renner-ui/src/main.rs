//! WASM entry point; Trunk compiles this and mounts [`App`] to the body.

use leptos::prelude::*;
use renner_ui::App;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! { <App /> }
    })
}

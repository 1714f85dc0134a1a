//! Browser entry point for the employee dashboard
#![forbid(unsafe_code)]

use employee_web::App;

fn main() {
    // Surface Rust panics in the browser console
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

//! ClientPilot Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod models;
mod notify;
mod pages;
mod queries;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

//! Web entry point for the dashboard.

use dioxus_logger::tracing::Level;

mod app;
mod charts;
mod components;
mod utils;

use app::App;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

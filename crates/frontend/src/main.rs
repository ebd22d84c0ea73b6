mod api;
mod components;
mod config;
mod coords;
mod hooks;
mod pages;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::market::Market {}
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    // Fails only when a subscriber is already installed
    dioxus::logger::init(tracing::Level::INFO).ok();
    let env = config::env();
    tracing::info!(
        base_path = %env.base_path,
        remote_content = env.content_configured(),
        "starting market page"
    );
    launch(App);
}

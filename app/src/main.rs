#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use route::Route;

use crate::hooks::use_wallet_provider;

/// Image shown when a campaign has none or it fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-campaign.png";

pub const METAMASK_URL: &str = "https://metamask.io/download/";

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Wallet state and the contract client every page reads through
    use_wallet_provider();

    rsx! {
        Router::<Route> {}
    }
}

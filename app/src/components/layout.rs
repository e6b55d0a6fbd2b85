use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use crate::components::WalletButton;
use crate::hooks::use_wallet;
use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    let wallet = use_wallet();
    let network = match wallet.read().chain_id {
        Some(HARDHAT_CHAIN_ID) => "Hardhat (31337)".to_string(),
        Some(chain_id) => format!("Chain {chain_id}"),
        None => "Not connected".to_string(),
    };

    rsx! {
        div { class: "min-h-screen flex flex-col",
            style: "background-color: var(--surface-base);",
            // Navigation
            nav { class: "border-b elevated-border backdrop-blur sticky top-0 z-50",
                style: "background-color: var(--surface-base);",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        div { class: "flex items-center",
                            Link { to: Route::Home {}, class: "flex items-center space-x-2",
                                span { class: "text-2xl font-bold text-gold", "University Fundraiser" }
                            }
                        }

                        div { class: "hidden sm:flex sm:items-center sm:space-x-8",
                            NavLink { to: Route::Home {}, label: "Home" }
                            NavLink { to: Route::CreateCampaign {}, label: "Create Campaign" }
                        }

                        div { class: "flex items-center",
                            WalletButton {}
                        }
                    }
                }
            }

            main { class: "flex-1 w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                Outlet::<Route> {}
            }

            footer { class: "border-t elevated-border py-8 mt-auto",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-low",
                    p { "Transparent fundraising for university projects on Ethereum" }
                    p { class: "text-sm mt-2",
                        "Contract: "
                        code { class: "text-gold", "{CONTRACT_ADDRESS}" }
                    }
                    p { class: "text-sm mt-1", "Network: {network}" }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to: to,
            class: "text-mid hover:text-gold px-3 py-2 text-sm font-medium transition-colors",
            "{label}"
        }
    }
}

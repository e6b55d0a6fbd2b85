use dioxus::prelude::*;

use crate::components::CreateCampaignForm;
use crate::hooks::use_wallet;
use crate::route::Route;

#[component]
pub fn CreateCampaign() -> Element {
    let wallet = use_wallet();
    let connected = wallet.read().is_connected();
    let mut created = use_signal(|| false);

    rsx! {
        div { class: "max-w-2xl mx-auto space-y-6",
            header { class: "text-center",
                h1 { class: "text-3xl font-bold text-high", "Launch Academic Campaign" }
                p { class: "text-mid mt-2",
                    "Create a transparent, blockchain-based fundraising campaign for university initiatives"
                }
            }

            if !connected {
                div { class: "p-3 rounded bg-yellow-900/30 border border-yellow-700 text-yellow-400 text-sm",
                    "Please connect your wallet first."
                }
            }

            div { class: "elevated rounded-lg elevated-border border p-6",
                h2 { class: "text-lg font-semibold text-high", "Campaign Configuration" }
                p { class: "text-sm text-low mb-4",
                    "All fields are required and will be permanently stored on the blockchain"
                }
                CreateCampaignForm {
                    on_created: move |_| created.set(true),
                }
                if *created.read() {
                    Link { to: Route::Home {}, class: "block text-center text-gold text-sm mt-4",
                        "View all campaigns"
                    }
                }
            }

            p { class: "text-xs text-low text-center",
                "Campaign creation requires Ethereum gas fees. Submitted data cannot be modified after confirmation."
            }
        }
    }
}

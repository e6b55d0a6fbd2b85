use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use crate::components::{TxOutcome, TxStatus};
use crate::hooks::{use_campaign, use_wallet, WalletStatus};
use crate::route::Route;
use crate::PLACEHOLDER_IMAGE;

#[component]
pub fn CampaignDetails(id: u64) -> Element {
    let wallet = use_wallet();
    let mut campaign = use_campaign(id);
    let mut amount = use_signal(String::new);
    let mut donating = use_signal(|| false);
    let mut outcome = use_signal(|| None as TxOutcome);
    let mut image_failed = use_signal(|| false);

    let mut submit = move |target: Campaign| {
        let contract = wallet.peek().contract.clone();
        let value = amount.read().clone();
        donating.set(true);
        outcome.set(None);

        spawn(async move {
            let result = donate(contract.as_ref(), &target, &value).await;
            match &result {
                Ok(_) => {
                    amount.set(String::new());
                    campaign.restart();
                }
                Err(e) => tracing::error!("Donation to campaign {} failed: {}", id, e),
            }
            outcome.set(Some(result.map_err(|e| e.user_message())));
            donating.set(false);
        });
    };

    let connecting = wallet.read().status == WalletStatus::Connecting;
    let loaded = campaign.read().clone();

    let current = match loaded {
        None => {
            return rsx! { Loading {} };
        }
        Some(Err(_)) if connecting => {
            return rsx! { Loading {} };
        }
        Some(Err(ContractError::Reverted { .. })) => {
            return rsx! {
                Problem {
                    title: "Campaign Not Found",
                    message: "The campaign you're looking for doesn't exist or has been removed.".to_string(),
                }
            };
        }
        Some(Err(e)) => {
            let message = match e {
                ContractError::NotConnected => e.user_message(),
                _ => "Failed to load campaign data. Please try again later.".to_string(),
            };
            return rsx! {
                Problem { title: "Error Loading Campaign", message }
            };
        }
        Some(Ok(current)) => current,
    };

    let busy = *donating.read();
    let progress = format!("{:.1}", current.progress_percent());
    let bar_width = current.progress_bar_width();
    let status = current.status();
    let image = current.image_src(*image_failed.read(), PLACEHOLDER_IMAGE).to_string();

    rsx! {
        div { class: "space-y-6",
            Link { to: Route::Home {}, class: "text-gold text-sm", "← Back to Campaigns" }

            div { class: "elevated rounded-lg elevated-border border overflow-hidden",
                div { class: "relative",
                    img {
                        class: "w-full h-64 object-cover",
                        src: "{image}",
                        alt: "{current.record.title}",
                        onerror: move |_| image_failed.set(true),
                    }
                    div { class: "absolute bottom-0 left-0 right-0 p-4 bg-black/60",
                        h1 { class: "text-3xl font-bold text-high", "{current.record.title}" }
                        p { class: "text-sm text-mid",
                            "Created by "
                            span { class: "font-mono", title: "{current.record.creator}", "{current.creator_label}" }
                        }
                    }
                }

                div { class: "p-6 space-y-6",
                    div { class: "grid grid-cols-3 gap-4 text-center",
                        Stat { value: format!("{} ETH", current.goal_label), label: "Target" }
                        Stat { value: format!("{} ETH", current.raised_label), label: "Raised" }
                        Stat { value: current.days_remaining.to_string(), label: "Days Left" }
                    }

                    section {
                        div { class: "flex justify-between text-sm text-low mb-1",
                            span { "Campaign Progress" }
                            span { "{progress}%" }
                        }
                        div { class: "w-full h-3 rounded bg-gray-700",
                            div { class: "h-3 rounded bg-gold", style: "width: {bar_width}%;" }
                        }
                    }

                    section {
                        h2 { class: "text-xl font-semibold text-high mb-2", "About This Campaign" }
                        p { class: "text-mid whitespace-pre-line", "{current.record.description}" }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        div { class: "elevated-border border rounded p-4",
                            h3 { class: "font-semibold text-high mb-2", "Campaign Details" }
                            ul { class: "text-sm space-y-1",
                                Detail { label: "Campaign ID:", value: current.id().to_string() }
                                Detail { label: "Status:", value: status.label().to_string() }
                                Detail { label: "Deadline:", value: current.deadline_label.clone() }
                                Detail { label: "Target Amount:", value: format!("{} ETH", current.goal_label) }
                                Detail { label: "Current Balance:", value: format!("{} ETH", current.raised_label) }
                            }
                        }

                        div { class: "elevated-border border rounded p-4 space-y-3",
                            h3 { class: "font-semibold text-high", "Support This Campaign" }
                            if current.accepts_donations() {
                                input {
                                    class: "input w-full",
                                    r#type: "number",
                                    min: "0.001",
                                    step: "0.001",
                                    placeholder: "0.00",
                                    disabled: busy,
                                    value: "{amount}",
                                    oninput: move |evt| amount.set(evt.value()),
                                }
                                button {
                                    class: "btn btn-primary w-full",
                                    disabled: busy,
                                    onclick: {
                                        let current = current.clone();
                                        move |_| submit(current.clone())
                                    },
                                    if busy { "Processing..." } else { "Donate Now" }
                                }
                            } else {
                                p { class: "text-sm text-low", "This campaign is no longer accepting donations." }
                            }
                            TxStatus {
                                outcome: outcome.read().clone(),
                                success: "Thank you for your donation! The campaign has been updated.",
                            }
                        }
                    }
                }

                footer { class: "border-t elevated-border p-4 text-center text-sm text-low",
                    "Campaign ends on {current.deadline_label}"
                }
            }
        }
    }
}

#[component]
fn Loading() -> Element {
    rsx! {
        div { class: "text-center py-16 text-low",
            div { class: "animate-spin inline-block w-8 h-8 border-2 border-gold border-t-transparent rounded-full" }
            p { class: "mt-4", "Loading campaign details..." }
        }
    }
}

#[component]
fn Problem(title: &'static str, message: String) -> Element {
    rsx! {
        div { class: "text-center py-16 space-y-4",
            h2 { class: "text-2xl font-semibold text-high", "{title}" }
            p { class: "text-mid", "{message}" }
            Link { to: Route::Home {}, class: "text-gold", "Return to Campaigns" }
        }
    }
}

#[component]
fn Stat(value: String, label: &'static str) -> Element {
    rsx! {
        div {
            p { class: "text-2xl font-mono text-high", "{value}" }
            p { class: "text-xs text-low uppercase", "{label}" }
        }
    }
}

#[component]
fn Detail(label: &'static str, value: String) -> Element {
    rsx! {
        li { class: "flex justify-between",
            span { class: "text-low", "{label}" }
            span { class: "text-high font-mono", "{value}" }
        }
    }
}

use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use crate::hooks::use_wallet;

/// Collects an ETH amount and donates it to `campaign`.
#[component]
pub fn DonateModal(
    campaign: Campaign,
    on_close: EventHandler<()>,
    on_donated: EventHandler<TxHash>,
) -> Element {
    let wallet = use_wallet();
    let mut amount = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = {
        let campaign = campaign.clone();
        move |_| {
            let campaign = campaign.clone();
            let contract = wallet.peek().contract.clone();
            let value = amount.read().clone();
            submitting.set(true);
            error.set(None);

            spawn(async move {
                match donate(contract.as_ref(), &campaign, &value).await {
                    Ok(tx) => {
                        amount.set(String::new());
                        on_donated.call(tx);
                    }
                    Err(e) => {
                        tracing::error!("Donation to campaign {} failed: {}", campaign.id(), e);
                        error.set(Some(e.user_message()));
                    }
                }
                submitting.set(false);
            });
        }
    };

    let busy = *submitting.read();

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
            onclick: move |_| {
                if !busy {
                    on_close.call(());
                }
            },
            div { class: "elevated rounded-lg elevated-border border p-6 w-full max-w-md space-y-4",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex justify-between items-start",
                    h2 { class: "text-xl font-semibold text-high", "Donate to {campaign.record.title}" }
                    button {
                        class: "text-low hover:text-high",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                p { class: "text-sm text-mid",
                    "Raised {campaign.raised_label} of {campaign.goal_label} ETH"
                }

                label { class: "block text-sm text-low", r#for: "donation-amount", "Donation Amount (ETH)" }
                input {
                    id: "donation-amount",
                    class: "input w-full",
                    r#type: "number",
                    min: "0.001",
                    step: "0.001",
                    placeholder: "0.00",
                    disabled: busy,
                    value: "{amount}",
                    oninput: move |evt| amount.set(evt.value()),
                }

                if let Some(message) = error.read().as_ref() {
                    div { class: "p-3 rounded bg-red-900/30 border border-red-700 text-red-400 text-sm",
                        "{message}"
                    }
                }

                div { class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: busy,
                        onclick: submit,
                        if busy { "Processing..." } else { "Donate" }
                    }
                }
            }
        }
    }
}

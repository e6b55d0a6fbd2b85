use dioxus::prelude::*;
use fundraiser_api::prelude::*;

/// Outcome of the last transaction, shown inline until replaced.
pub type TxOutcome = Option<Result<TxHash, String>>;

#[component]
pub fn TxStatus(outcome: TxOutcome, success: &'static str) -> Element {
    match outcome {
        Some(Ok(hash)) => {
            let short_hash = truncate(&hash.to_string(), 12);
            rsx! {
                div { class: "p-3 rounded bg-green-900/30 border border-green-700 text-green-400 text-sm",
                    p { "{success}" }
                    p { class: "font-mono text-xs mt-1", title: "{hash}", "Tx: {short_hash}" }
                }
            }
        }
        Some(Err(message)) => rsx! {
            div { class: "p-3 rounded bg-red-900/30 border border-red-700 text-red-400 text-sm",
                "{message}"
            }
        },
        None => rsx! {},
    }
}

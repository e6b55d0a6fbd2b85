use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use crate::components::{CampaignCard, CampaignFilters, DonateModal, TxOutcome, TxStatus};
use crate::hooks::{use_campaigns, use_wallet, WalletStatus};
use crate::route::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "space-y-8",
            section { class: "text-center py-8",
                h1 { class: "text-4xl font-bold text-high", "Fund the Next Big Campus Idea" }
                p { class: "text-mid mt-3 max-w-2xl mx-auto",
                    "We connect innovative university projects with passionate supporters. Every donation is recorded on Ethereum."
                }
                Link { to: Route::CreateCampaign {}, class: "btn btn-primary inline-block mt-6",
                    "Start a Campaign"
                }
            }
            CampaignList {}
        }
    }
}

#[component]
fn CampaignList() -> Element {
    let wallet = use_wallet();
    let list = use_campaigns();
    let mut query = use_signal(CampaignQuery::default);
    let mut donating = use_signal(|| None::<Campaign>);
    let mut withdrawing = use_signal(|| None::<u64>);
    let mut outcome = use_signal(|| None as TxOutcome);
    let mut outcome_label = use_signal(|| "");

    let open_donation = move |campaign: Campaign| {
        let blocked = if !wallet.peek().is_connected() {
            Some(ActionError::WalletRequired)
        } else if !campaign.accepts_donations() {
            Some(ActionError::CampaignEnded)
        } else {
            None
        };
        match blocked {
            Some(e) => outcome.set(Some(Err(e.user_message()))),
            None => donating.set(Some(campaign)),
        }
    };

    let start_withdraw = move |id: u64| {
        let contract = wallet.peek().contract.clone();
        withdrawing.set(Some(id));
        outcome.set(None);

        spawn(async move {
            let result = withdraw(contract.as_ref(), id).await;
            match &result {
                Ok(_) => {
                    outcome_label.set("Funds withdrawn successfully!");
                    list.refresh(RefreshReason::AfterTransaction);
                }
                Err(e) => tracing::error!("Withdraw from campaign {} failed: {}", id, e),
            }
            outcome.set(Some(result.map_err(|e| format!("Failed to withdraw: {}", e.user_message()))));
            withdrawing.set(None);
        });
    };

    let wallet_read = wallet.read();
    let connecting = wallet_read.status == WalletStatus::Connecting;
    let has_account = wallet_read.account.is_some();
    let mut active_query = query.read().clone();
    active_query.viewer = wallet_read.account;
    drop(wallet_read);

    let state = list.state.read().clone();
    let visible = state.visible(&active_query);
    let summary = active_query.summary(visible.len(), state.campaigns.len());
    let no_matches = visible.is_empty();
    let cards = visible.into_iter().map(|campaign| (campaign.id(), campaign));
    let in_flight = *withdrawing.read();

    if state.show_spinner(connecting) {
        return rsx! {
            div { class: "text-center py-16 text-low",
                div { class: "animate-spin inline-block w-8 h-8 border-2 border-gold border-t-transparent rounded-full" }
                p { class: "mt-4", "Loading campaigns..." }
            }
        };
    }

    if let Some(error) = state.blocking_error() {
        let message = if has_account {
            error.to_string()
        } else {
            "Connect your wallet to view campaigns.".to_string()
        };
        return rsx! {
            div { class: "text-center py-16 space-y-4",
                p { class: "text-red-400", "{message}" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| list.refresh(RefreshReason::Manual),
                    "Retry"
                }
            }
        };
    }

    if state.is_empty() {
        return rsx! {
            div { class: "text-center py-16 text-mid",
                p { "No active campaigns found. Be the first to create one!" }
                Link { to: Route::CreateCampaign {}, class: "btn btn-primary inline-block mt-4", "Create Campaign" }
            }
        };
    }

    rsx! {
        div { class: "space-y-4",
            CampaignFilters {
                query,
                has_account,
                last_updated: state.last_updated,
                loading: state.loading,
                on_refresh: move |_| list.refresh(RefreshReason::Manual),
            }

            if let Some(error) = state.error.as_ref() {
                div { class: "p-3 rounded bg-red-900/30 border border-red-700 text-red-400 text-sm", "{error}" }
            }

            TxStatus {
                outcome: outcome.read().clone(),
                success: *outcome_label.read(),
            }

            p { class: "text-sm text-low", "{summary}" }

            if no_matches {
                div { class: "text-center py-8 space-y-3 text-mid",
                    p { "No campaigns match your current filters." }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| query.write().clear(),
                        "Clear Filters"
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for (id, campaign) in cards {
                    CampaignCard {
                        key: "{id}",
                        withdrawing: in_flight == Some(id),
                        campaign,
                        on_donate: open_donation,
                        on_withdraw: start_withdraw,
                    }
                }
            }

            if let Some(campaign) = donating.read().clone() {
                DonateModal {
                    campaign,
                    on_close: move |_| donating.set(None),
                    on_donated: move |tx| {
                        donating.set(None);
                        outcome_label.set("Thank you for your donation!");
                        outcome.set(Some(Ok(tx)));
                        list.refresh(RefreshReason::AfterTransaction);
                    },
                }
            }
        }
    }
}

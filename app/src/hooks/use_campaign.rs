use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use super::{now, use_wallet};

/// Loads a single campaign for the detail page.
///
/// Reloads when the wallet changes; call `restart()` after a transaction.
pub fn use_campaign(id: u64) -> Resource<Result<Campaign, ContractError>> {
    let wallet = use_wallet();

    use_resource(move || async move {
        let (contract, viewer) = {
            let wallet = wallet.read();
            (wallet.contract.clone(), wallet.account)
        };
        let contract = contract.ok_or(ContractError::NotConnected)?;
        let campaign = fetch_campaign(&contract, id, viewer, now()).await;
        if let Err(e) = &campaign {
            tracing::error!("Failed to load campaign {}: {}", id, e);
        }
        campaign
    })
}

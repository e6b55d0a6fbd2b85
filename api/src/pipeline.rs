use alloy_primitives::Address;
use futures::future::join_all;

use crate::client::FundraiserContract;
use crate::error::ContractError;
use crate::state::Campaign;

/// Result of one refresh of the campaign list.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Campaigns that loaded, in id order.
    pub campaigns: Vec<Campaign>,
    /// Ids whose detail read failed.
    pub failed: Vec<u64>,
    /// Unix seconds the snapshot was taken.
    pub fetched_at: u64,
}

/// Reads every campaign from the contract and derives display fields.
///
/// Only a failure to read the count fails the whole refresh. Detail reads
/// for ids `1..=count` run concurrently; one that errors is logged and left
/// out so a single bad campaign cannot blank the list.
pub async fn fetch_campaigns<C: FundraiserContract>(
    contract: &C,
    viewer: Option<Address>,
    now: u64,
) -> Result<Snapshot, ContractError> {
    let count = contract.campaign_count().await?;

    let reads = (1..=count).map(|id| async move { (id, contract.campaign_details(id).await) });
    let results = join_all(reads).await;

    let mut campaigns = Vec::with_capacity(results.len());
    let mut failed = vec![];
    for (id, result) in results {
        match result {
            Ok(record) => campaigns.push(Campaign::derive(record, viewer, now)),
            Err(e) => {
                tracing::warn!("Error fetching campaign {}: {}", id, e);
                failed.push(id);
            }
        }
    }

    tracing::debug!("Loaded {} of {} campaigns", campaigns.len(), count);
    Ok(Snapshot {
        campaigns,
        failed,
        fetched_at: now,
    })
}

/// Reads and derives a single campaign, for the detail page.
pub async fn fetch_campaign<C: FundraiserContract>(
    contract: &C,
    id: u64,
    viewer: Option<Address>,
    now: u64,
) -> Result<Campaign, ContractError> {
    let record = contract.campaign_details(id).await?;
    Ok(Campaign::derive(record, viewer, now))
}

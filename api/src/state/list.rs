use std::fmt;

use crate::error::ContractError;
use crate::pipeline::Snapshot;
use crate::query::CampaignQuery;
use crate::state::Campaign;

/// Message shown when the campaign count cannot be read.
pub const LIST_LOAD_FAILED: &str = "Failed to load campaigns. Please check your wallet connection.";

/// Why a refresh of the campaign list was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshReason {
    ContractReady,
    AccountChanged,
    Tick,
    Manual,
    AfterTransaction,
}

impl fmt::Display for RefreshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RefreshReason::ContractReady => "contract ready",
            RefreshReason::AccountChanged => "account changed",
            RefreshReason::Tick => "scheduled tick",
            RefreshReason::Manual => "manual",
            RefreshReason::AfterTransaction => "after transaction",
        };
        f.write_str(name)
    }
}

/// Reconciled state of the campaign list view.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignListState {
    pub campaigns: Vec<Campaign>,
    pub loading: bool,
    pub error: Option<String>,
    /// Unix seconds of the last successful refresh.
    pub last_updated: Option<u64>,
    /// Bumped on every refresh start so late results can be recognized.
    pub generation: u64,
}

impl Default for CampaignListState {
    fn default() -> Self {
        Self {
            campaigns: vec![],
            loading: true,
            error: None,
            last_updated: None,
            generation: 0,
        }
    }
}

impl CampaignListState {
    /// Marks a refresh as in flight and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.generation += 1;
        self.generation
    }

    /// Applies the outcome of refresh `generation`.
    ///
    /// Returns false, leaving the state untouched, if a newer refresh has
    /// started since. A failed refresh keeps the campaigns already shown.
    pub fn finish(&mut self, generation: u64, result: Result<Snapshot, ContractError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.campaigns = snapshot.campaigns;
                self.last_updated = Some(snapshot.fetched_at);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(LIST_LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Records that no contract is available to read from.
    ///
    /// Campaigns stay listed, but nobody is connected to withdraw them.
    pub fn no_contract(&mut self) {
        self.loading = false;
        self.error = Some("Contract not initialized".to_string());
        for campaign in &mut self.campaigns {
            campaign.can_withdraw = false;
        }
    }

    /// Campaigns matching `query`, in display order.
    pub fn visible(&self, query: &CampaignQuery) -> Vec<Campaign> {
        query.apply(&self.campaigns)
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Show the full-page loading indicator only before anything has loaded.
    ///
    /// `connecting` is true while the wallet bootstrap runs; a list that is
    /// already on screen stays there during a reconnect.
    pub fn show_spinner(&self, connecting: bool) -> bool {
        (self.loading || connecting) && self.campaigns.is_empty()
    }

    /// Show the full-page error only when there is nothing else to display.
    pub fn blocking_error(&self) -> Option<&str> {
        if self.campaigns.is_empty() {
            self.error.as_deref()
        } else {
            None
        }
    }
}

use alloy_primitives::{address, Address};

/// Deployed UniversityFundraiser contract.
pub const CONTRACT_ADDRESS: Address = address!("B2eaC72BbDFc5493C37B5E7e39f7C501562d25B5");

/// Chain id of a local Hardhat node.
pub const HARDHAT_CHAIN_ID: u64 = 31337;

/// Seconds in a day.
pub const ONE_DAY: u64 = 86_400;

/// Campaign length assumed when estimating a creation date from a deadline.
pub const ASSUMED_CAMPAIGN_DAYS: u64 = 30;

/// Campaigns ending within this many seconds are flagged urgent.
pub const URGENT_WINDOW: u64 = 3 * ONE_DAY;

/// Interval between background refreshes of the campaign list.
pub const REFRESH_INTERVAL_MS: u32 = 60_000;

/// Delay between receipt polls while waiting for a transaction.
pub const RECEIPT_POLL_MS: u32 = 1_000;

/// Receipt polls before giving up on a transaction.
pub const RECEIPT_POLL_ATTEMPTS: u32 = 120;

/// Default duration offered by the create form.
pub const DEFAULT_DURATION_DAYS: u64 = 30;

/// Descriptions longer than this are collapsed behind "Show More".
pub const DESCRIPTION_PREVIEW_LEN: usize = 80;

/// Titles longer than this are truncated on cards.
pub const TITLE_PREVIEW_LEN: usize = 40;

/// Message shown when an error carries nothing more useful.
pub const GENERIC_FAILURE: &str = "Transaction failed. Please try again later.";

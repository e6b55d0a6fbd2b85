use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use alloy_primitives::{address, b256, Address, TxHash, U256};

use crate::client::{FundraiserContract, NewCampaign};
use crate::error::{ContractError, RpcError};
use crate::state::CampaignRecord;

/// 2026-10-16 00:00:00 UTC.
pub const NOW: u64 = 1_792_108_800;

pub const MOCK_TX: TxHash =
    b256!("00000000000000000000000000000000000000000000000000000000000000aa");

pub fn eth(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(18u64))
}

pub fn alice() -> Address {
    address!("70997970C51812dc3A010C7d01b50e0d17dc79C8")
}

pub fn bob() -> Address {
    address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC")
}

pub fn record(id: u64, title: &str, goal: U256, raised: U256, deadline: u64) -> CampaignRecord {
    CampaignRecord {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        goal,
        raised,
        deadline,
        image_url: format!("https://example.com/{id}.png"),
        creator: bob(),
        is_closed: false,
    }
}

/// In-memory contract that serves stored records and records writes.
#[derive(Default)]
pub struct MockContract {
    records: BTreeMap<u64, CampaignRecord>,
    failing_details: BTreeSet<u64>,
    count_fails: bool,
    write_error: RefCell<Option<RpcError>>,
    pub created: RefCell<Vec<NewCampaign>>,
    pub donations: RefCell<Vec<(u64, U256)>>,
    pub withdrawals: RefCell<Vec<u64>>,
}

impl MockContract {
    pub fn add(&mut self, record: CampaignRecord) {
        self.records.insert(record.id, record);
    }

    pub fn fail_details(&mut self, id: u64) {
        self.failing_details.insert(id);
    }

    pub fn fail_count(&mut self) {
        self.count_fails = true;
    }

    /// Makes every later write fail with `err`.
    pub fn fail_writes(&self, err: RpcError) {
        *self.write_error.borrow_mut() = Some(err);
    }

    fn check_write(&self) -> Result<(), ContractError> {
        match self.write_error.borrow().clone() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl FundraiserContract for MockContract {
    async fn campaign_count(&self) -> Result<u64, ContractError> {
        if self.count_fails {
            return Err(RpcError::new(-32000, "header not found").into());
        }
        Ok(self.records.keys().max().copied().unwrap_or(0))
    }

    async fn campaign_details(&self, id: u64) -> Result<CampaignRecord, ContractError> {
        if self.failing_details.contains(&id) {
            return Err(RpcError::new(-32000, "internal error").into());
        }
        self.records
            .get(&id)
            .cloned()
            .ok_or(ContractError::Reverted { reason: None })
    }

    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<TxHash, ContractError> {
        self.check_write()?;
        self.created.borrow_mut().push(campaign.clone());
        Ok(MOCK_TX)
    }

    async fn donate(&self, id: u64, value: U256) -> Result<TxHash, ContractError> {
        self.check_write()?;
        self.donations.borrow_mut().push((id, value));
        Ok(MOCK_TX)
    }

    async fn withdraw_funds(&self, id: u64) -> Result<TxHash, ContractError> {
        self.check_write()?;
        self.withdrawals.borrow_mut().push(id);
        Ok(MOCK_TX)
    }
}

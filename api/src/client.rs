//! Contract client: ABI-encodes calls and routes them through a transport.
//!
//! The same client serves the browser (an EIP-1193 wallet provider) and the
//! CLI (plain JSON-RPC over HTTP); only the [`Transport`] differs.

#![allow(async_fn_in_trait)]

use alloy_primitives::{hex, Address, TxHash, U256};
use alloy_sol_types::SolCall;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::abi::{
    createCampaignCall, donateCall, getCampaignCountCall, getCampaignDetailsCall,
    withdrawFundsCall,
};
use crate::consts::{RECEIPT_POLL_ATTEMPTS, RECEIPT_POLL_MS};
use crate::error::{ContractError, RpcError};
use crate::state::CampaignRecord;

/// Request/response channel to an Ethereum node or wallet.
pub trait Transport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError>;

    /// Suspends the caller; used between receipt polls.
    async fn pause(&self, millis: u32);
}

/// Parameters of `createCampaign`, already converted to contract units.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    pub goal: U256,
    pub duration_days: u64,
    pub beneficiary: Address,
    pub image_url: String,
}

/// Operations of the UniversityFundraiser contract.
///
/// Write methods resolve once the transaction has been mined successfully.
pub trait FundraiserContract {
    async fn campaign_count(&self) -> Result<u64, ContractError>;

    async fn campaign_details(&self, id: u64) -> Result<CampaignRecord, ContractError>;

    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<TxHash, ContractError>;

    async fn donate(&self, id: u64, value: U256) -> Result<TxHash, ContractError>;

    async fn withdraw_funds(&self, id: u64) -> Result<TxHash, ContractError>;
}

#[derive(Deserialize)]
struct Receipt {
    status: Option<String>,
}

/// [`FundraiserContract`] bound to a deployed address.
#[derive(Clone, Debug)]
pub struct Fundraiser<T> {
    transport: T,
    address: Address,
    sender: Option<Address>,
}

impl<T: Transport> Fundraiser<T> {
    pub fn new(transport: T, address: Address) -> Self {
        Self {
            transport,
            address,
            sender: None,
        }
    }

    /// Account that signs and pays for write calls.
    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn sender(&self) -> Option<Address> {
        self.sender
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn chain_id(&self) -> Result<u64, ContractError> {
        let value = self.transport.request("eth_chainId", json!([])).await?;
        let hex_id = value
            .as_str()
            .ok_or_else(|| ContractError::Decode("chain id".to_string()))?;
        u64::from_str_radix(hex_id.trim_start_matches("0x"), 16)
            .map_err(|_| ContractError::Decode(format!("chain id {hex_id}")))
    }

    async fn call<C: SolCall>(&self, call: C) -> Result<C::Return, ContractError> {
        let mut tx = json!({
            "to": self.address.to_string(),
            "data": hex::encode_prefixed(call.abi_encode()),
        });
        if let Some(sender) = self.sender {
            tx["from"] = json!(sender.to_string());
        }
        let value = self.transport.request("eth_call", json!([tx, "latest"])).await?;
        let output = value
            .as_str()
            .ok_or_else(|| ContractError::Decode(format!("{} result", C::SIGNATURE)))?;
        let bytes = hex::decode(output)
            .map_err(|_| ContractError::Decode(format!("{} result", C::SIGNATURE)))?;
        if bytes.is_empty() {
            // Calls to a missing contract or a reverting view return no data.
            return Err(ContractError::Reverted { reason: None });
        }
        C::abi_decode_returns(&bytes, true)
            .map_err(|e| ContractError::Decode(format!("{}: {e}", C::SIGNATURE)))
    }

    async fn send<C: SolCall>(&self, call: C, value: U256) -> Result<TxHash, ContractError> {
        let sender = self.sender.ok_or(ContractError::NotConnected)?;
        let mut tx = json!({
            "from": sender.to_string(),
            "to": self.address.to_string(),
            "data": hex::encode_prefixed(call.abi_encode()),
        });
        if !value.is_zero() {
            tx["value"] = json!(format!("0x{value:x}"));
        }

        let hash = self
            .transport
            .request("eth_sendTransaction", json!([tx]))
            .await?;
        let hash = hash
            .as_str()
            .ok_or_else(|| ContractError::Decode("transaction hash".to_string()))?;
        let hash: TxHash = hash
            .parse()
            .map_err(|_| ContractError::Decode(format!("transaction hash {hash}")))?;
        tracing::info!("Submitted {} in {}", C::SIGNATURE, hash);

        self.wait_for_receipt(hash).await?;
        Ok(hash)
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> Result<(), ContractError> {
        for _ in 0..RECEIPT_POLL_ATTEMPTS {
            let value = self
                .transport
                .request("eth_getTransactionReceipt", json!([hash.to_string()]))
                .await?;
            if !value.is_null() {
                let receipt: Receipt = serde_json::from_value(value)
                    .map_err(|e| ContractError::Decode(format!("receipt: {e}")))?;
                return match receipt.status.as_deref() {
                    Some("0x0") => Err(ContractError::TransactionFailed(hash.to_string())),
                    _ => Ok(()),
                };
            }
            self.transport.pause(RECEIPT_POLL_MS).await;
        }
        Err(ContractError::ConfirmationTimeout(hash.to_string()))
    }
}

impl<T: Transport> FundraiserContract for Fundraiser<T> {
    async fn campaign_count(&self) -> Result<u64, ContractError> {
        let count = self.call(getCampaignCountCall {}).await?.count;
        u64::try_from(count).map_err(|_| ContractError::Decode(format!("campaign count {count}")))
    }

    async fn campaign_details(&self, id: u64) -> Result<CampaignRecord, ContractError> {
        let details = self
            .call(getCampaignDetailsCall { id: U256::from(id) })
            .await?;
        Ok(CampaignRecord::from_details(id, details))
    }

    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<TxHash, ContractError> {
        let call = createCampaignCall {
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            goal: campaign.goal,
            durationDays: U256::from(campaign.duration_days),
            beneficiary: campaign.beneficiary,
            imageURL: campaign.image_url.clone(),
        };
        self.send(call, U256::ZERO).await
    }

    async fn donate(&self, id: u64, value: U256) -> Result<TxHash, ContractError> {
        self.send(donateCall { id: U256::from(id) }, value).await
    }

    async fn withdraw_funds(&self, id: u64) -> Result<TxHash, ContractError> {
        self.send(withdrawFundsCall { id: U256::from(id) }, U256::ZERO)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use alloy_sol_types::SolValue;

    use super::*;
    use crate::consts::CONTRACT_ADDRESS;
    use crate::test_utils::*;

    /// Replays canned responses and records requests.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<Value, RpcError>>>,
        requests: RefCell<Vec<(String, Value)>>,
    }

    impl ScriptedTransport {
        fn push(&self, response: Result<Value, RpcError>) {
            self.responses.borrow_mut().push_back(response);
        }
    }

    impl Transport for &ScriptedTransport {
        async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
            self.requests.borrow_mut().push((method.to_string(), params));
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(RpcError::new(-1, "no scripted response")))
        }

        async fn pause(&self, _millis: u32) {}
    }

    #[tokio::test]
    async fn test_campaign_count() {
        let transport = ScriptedTransport::default();
        transport.push(Ok(json!(hex::encode_prefixed(U256::from(7u64).abi_encode()))));
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS);

        assert_eq!(client.campaign_count().await, Ok(7));

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].0, "eth_call");
        let data = requests[0].1[0]["data"].as_str().unwrap().to_string();
        assert_eq!(data, hex::encode_prefixed(getCampaignCountCall {}.abi_encode()));
    }

    #[tokio::test]
    async fn test_campaign_details_decodes_record() {
        let transport = ScriptedTransport::default();
        let encoded = (
            "Chess Club".to_string(),
            "Travel budget".to_string(),
            eth(5),
            eth(2),
            U256::from(NOW),
            "https://example.com/chess.png".to_string(),
            alice(),
            false,
        )
            .abi_encode_params();
        transport.push(Ok(json!(hex::encode_prefixed(encoded))));
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS);

        let record = client.campaign_details(4).await.unwrap();
        assert_eq!(record.id, 4);
        assert_eq!(record.title, "Chess Club");
        assert_eq!(record.goal, eth(5));
        assert_eq!(record.raised, eth(2));
        assert_eq!(record.deadline, NOW);
        assert_eq!(record.creator, alice());
        assert!(!record.is_closed);
    }

    #[tokio::test]
    async fn test_empty_call_result_is_revert() {
        let transport = ScriptedTransport::default();
        transport.push(Ok(json!("0x")));
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS);
        assert_eq!(
            client.campaign_details(99).await,
            Err(ContractError::Reverted { reason: None })
        );
    }

    #[tokio::test]
    async fn test_write_requires_sender() {
        let transport = ScriptedTransport::default();
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS);
        assert_eq!(client.withdraw_funds(1).await, Err(ContractError::NotConnected));
        assert!(transport.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_donate_waits_for_receipt() {
        let hash = format!("0x{}", "ab".repeat(32));
        let transport = ScriptedTransport::default();
        transport.push(Ok(json!(hash)));
        transport.push(Ok(Value::Null));
        transport.push(Ok(json!({ "status": "0x1" })));
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS).with_sender(alice());

        let tx = client.donate(2, eth(1)).await.unwrap();
        assert_eq!(tx.to_string(), hash);

        let requests = transport.requests.borrow();
        let methods: Vec<&str> = requests.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(
            methods,
            vec!["eth_sendTransaction", "eth_getTransactionReceipt", "eth_getTransactionReceipt"]
        );
        let tx = &requests[0].1[0];
        assert_eq!(tx["value"], json!("0xde0b6b3a7640000"));
        assert_eq!(tx["from"], json!(alice().to_string()));
    }

    #[tokio::test]
    async fn test_failed_receipt() {
        let hash = format!("0x{}", "cd".repeat(32));
        let transport = ScriptedTransport::default();
        transport.push(Ok(json!(hash)));
        transport.push(Ok(json!({ "status": "0x0" })));
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS).with_sender(alice());

        assert_eq!(
            client.withdraw_funds(1).await,
            Err(ContractError::TransactionFailed(hash))
        );
    }

    #[tokio::test]
    async fn test_wallet_rejection_is_classified() {
        let transport = ScriptedTransport::default();
        transport.push(Err(RpcError::new(4001, "User rejected the request.")));
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS).with_sender(alice());
        assert_eq!(client.donate(1, eth(1)).await, Err(ContractError::Rejected));
    }

    #[tokio::test]
    async fn test_chain_id() {
        let transport = ScriptedTransport::default();
        transport.push(Ok(json!("0x7a69")));
        let client = Fundraiser::new(&transport, CONTRACT_ADDRESS);
        assert_eq!(client.chain_id().await, Ok(31337));
    }
}

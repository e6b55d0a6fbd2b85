use std::collections::BTreeMap;
use std::fmt;

use alloy_primitives::hex;
use alloy_sol_types::{Revert, SolError};
use serde::Deserialize;
use thiserror::Error;

use crate::consts::GENERIC_FAILURE;

/// EIP-1193 "user rejected request".
pub const USER_REJECTED: i64 = 4001;

/// EIP-1193 "unauthorized": the account has not been exposed to the page.
pub const UNAUTHORIZED: i64 = 4100;

/// JSON-RPC "invalid params".
pub const INVALID_PARAMS: i64 = -32602;

/// Error object returned by a wallet provider or a JSON-RPC node.
#[derive(Clone, Debug, Deserialize, PartialEq, Error)]
#[error("rpc error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Decodes an `Error(string)` payload carried in `data`, if any.
    ///
    /// Providers disagree on the shape: some put the hex string directly in
    /// `data`, others nest it under `data.data`.
    pub fn revert_reason(&self) -> Option<String> {
        let payload = match self.data.as_ref()? {
            serde_json::Value::String(s) => s.as_str(),
            serde_json::Value::Object(map) => map.get("data")?.as_str()?,
            _ => return None,
        };
        let bytes = hex::decode(payload).ok()?;
        Revert::abi_decode(&bytes, true).ok().map(|revert| revert.reason)
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ContractError {
    #[error("no injected wallet provider")]
    NoProvider,

    #[error("no account connected")]
    NotConnected,

    #[error("user rejected the request")]
    Rejected,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("execution reverted: {}", reason.as_deref().unwrap_or("no reason"))]
    Reverted { reason: Option<String> },

    #[error(transparent)]
    Rpc(RpcError),

    #[error("failed to decode {0}")]
    Decode(String),

    #[error("transaction {0} reverted on chain")]
    TransactionFailed(String),

    #[error("transaction {0} not confirmed in time")]
    ConfirmationTimeout(String),
}

impl From<RpcError> for ContractError {
    fn from(err: RpcError) -> Self {
        let lower = err.message.to_lowercase();

        if err.code == USER_REJECTED
            || lower.contains("user rejected")
            || lower.contains("user denied")
        {
            return ContractError::Rejected;
        }

        if err.code == UNAUTHORIZED {
            return ContractError::NotConnected;
        }

        if err.code == INVALID_PARAMS
            || err.message.contains("INVALID_ARGUMENT")
            || lower.contains("no matching fragment")
        {
            return ContractError::InvalidArgument(err.message);
        }

        if let Some(reason) = err.revert_reason() {
            return ContractError::Reverted {
                reason: Some(reason),
            };
        }

        if lower.contains("revert") {
            return ContractError::Reverted {
                reason: reason_from_message(&err.message),
            };
        }

        ContractError::Rpc(err)
    }
}

impl ContractError {
    /// Human-readable message for display next to the failed action.
    pub fn user_message(&self) -> String {
        match self {
            ContractError::NoProvider => {
                "No Ethereum wallet detected. Install MetaMask and refresh.".to_string()
            }
            ContractError::NotConnected => "Please connect your wallet first.".to_string(),
            ContractError::Rejected => "Transaction was rejected by user.".to_string(),
            ContractError::InvalidArgument(_) => {
                "Contract requires different parameter types.".to_string()
            }
            ContractError::Reverted { reason: Some(reason) } if !reason.is_empty() => {
                reason.clone()
            }
            ContractError::Rpc(err) => {
                let head = err.message.split('(').next().unwrap_or_default().trim();
                if head.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    head.to_string()
                }
            }
            ContractError::TransactionFailed(_) => {
                "Transaction was mined but reverted.".to_string()
            }
            ContractError::ConfirmationTimeout(_) => {
                "Timed out waiting for the transaction to confirm.".to_string()
            }
            ContractError::Reverted { .. } | ContractError::Decode(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}

/// Extracts the reason from node messages such as
/// `execution reverted: Campaign closed` or
/// `reverted with reason string 'Campaign closed'`.
fn reason_from_message(message: &str) -> Option<String> {
    if let Some(start) = message.find("reason string '") {
        let rest = &message[start + "reason string '".len()..];
        return rest.find('\'').map(|end| rest[..end].to_string());
    }
    message
        .split_once("execution reverted:")
        .map(|(_, reason)| reason.trim().to_string())
        .filter(|reason| !reason.is_empty())
}

/// Form fields that can fail client-side validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Description,
    Target,
    Duration,
    Beneficiary,
    Image,
    Amount,
}

/// Per-field validation messages. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().copied().collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Failure of a user-initiated write.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ActionError {
    #[error("invalid input: {0}")]
    Invalid(ValidationErrors),

    #[error("wallet not connected")]
    WalletRequired,

    #[error("campaign is no longer accepting donations")]
    CampaignEnded,

    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl From<ValidationErrors> for ActionError {
    fn from(errors: ValidationErrors) -> Self {
        ActionError::Invalid(errors)
    }
}

impl ActionError {
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Invalid(errors) => errors.to_string(),
            ActionError::WalletRequired => "Please connect your wallet first.".to_string(),
            ActionError::CampaignEnded => {
                "This campaign is no longer accepting donations.".to_string()
            }
            ActionError::Contract(err) => err.user_message(),
        }
    }

    /// Validation errors, if that is why the action failed.
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ActionError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::hex;
    use alloy_sol_types::{Revert, SolError};

    use super::*;

    #[test]
    fn test_rejection_by_code_and_message() {
        let by_code: ContractError = RpcError::new(USER_REJECTED, "whatever").into();
        assert_eq!(by_code, ContractError::Rejected);

        let by_message: ContractError =
            RpcError::new(-32000, "MetaMask Tx Signature: User denied transaction signature.")
                .into();
        assert_eq!(by_message, ContractError::Rejected);
        assert_eq!(
            by_message.user_message(),
            "Transaction was rejected by user."
        );
    }

    #[test]
    fn test_parameter_mismatch() {
        let err: ContractError =
            RpcError::new(-32000, "no matching fragment (operation=\"fragment\")").into();
        assert!(matches!(err, ContractError::InvalidArgument(_)));
        assert_eq!(
            err.user_message(),
            "Contract requires different parameter types."
        );

        let err: ContractError = RpcError::new(INVALID_PARAMS, "bad params").into();
        assert!(matches!(err, ContractError::InvalidArgument(_)));
    }

    #[test]
    fn test_revert_reason_from_data() {
        let payload = Revert {
            reason: "Campaign is closed".to_string(),
        }
        .abi_encode();
        let err = RpcError {
            code: 3,
            message: "execution reverted".to_string(),
            data: Some(serde_json::json!(hex::encode_prefixed(&payload))),
        };
        assert_eq!(err.revert_reason().as_deref(), Some("Campaign is closed"));

        let err: ContractError = err.into();
        assert_eq!(err.user_message(), "Campaign is closed");
    }

    #[test]
    fn test_revert_reason_nested_data() {
        let payload = Revert {
            reason: "Deadline passed".to_string(),
        }
        .abi_encode();
        let err = RpcError {
            code: -32603,
            message: "Internal JSON-RPC error.".to_string(),
            data: Some(serde_json::json!({ "data": hex::encode_prefixed(&payload) })),
        };
        let err: ContractError = err.into();
        assert_eq!(
            err,
            ContractError::Reverted {
                reason: Some("Deadline passed".to_string())
            }
        );
    }

    #[test]
    fn test_revert_reason_from_message() {
        let err: ContractError = RpcError::new(
            -32603,
            "Error: VM Exception while processing transaction: reverted with reason string 'Only creator'",
        )
        .into();
        assert_eq!(err.user_message(), "Only creator");

        let err: ContractError = RpcError::new(3, "execution reverted: Goal reached").into();
        assert_eq!(err.user_message(), "Goal reached");

        let err: ContractError = RpcError::new(3, "execution reverted").into();
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_generic_message_is_truncated_at_paren() {
        let err: ContractError =
            RpcError::new(-32000, "insufficient funds for gas (code=INSUFFICIENT_FUNDS)").into();
        assert_eq!(err.user_message(), "insufficient funds for gas");

        let err: ContractError = RpcError::new(-32000, "(opaque)").into();
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::default();
        assert!(errors.clone().into_result().is_ok());
        errors.insert(Field::Title, "Title is required");
        errors.insert(Field::Image, "Valid image URL is required");
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "Title is required; Valid image URL is required"
        );
        errors.clear(Field::Title);
        assert_eq!(errors.get(Field::Title), None);
        assert_eq!(errors.get(Field::Image), Some("Valid image URL is required"));
    }
}

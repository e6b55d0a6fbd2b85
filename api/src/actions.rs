//! User-initiated writes: validate, convert to contract units, submit.

use alloy_primitives::{Address, TxHash, U256};

use crate::client::{FundraiserContract, NewCampaign};
use crate::consts::DEFAULT_DURATION_DAYS;
use crate::error::{ActionError, Field, ValidationErrors};
use crate::state::Campaign;
use crate::units::{parse_address, parse_eth};

/// Raw input of the create-campaign form.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignForm {
    pub title: String,
    pub description: String,
    /// Target in ETH, as typed.
    pub target: String,
    pub duration_days: String,
    pub beneficiary: String,
    pub image: String,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            target: String::new(),
            duration_days: DEFAULT_DURATION_DAYS.to_string(),
            beneficiary: String::new(),
            image: String::new(),
        }
    }
}

impl CampaignForm {
    /// Empty form with the beneficiary defaulting to `account`.
    pub fn for_account(account: Option<Address>) -> Self {
        Self {
            beneficiary: account.map(|a| a.to_checksum(None)).unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Target => self.target = value,
            Field::Duration => self.duration_days = value,
            Field::Beneficiary => self.beneficiary = value,
            Field::Image => self.image = value,
            // Donation amounts are not part of this form.
            Field::Amount => {}
        }
    }

    /// Checks every field and converts the form to contract parameters.
    pub fn validate(&self) -> Result<NewCampaign, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(Field::Title, "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.insert(Field::Description, "Description is required");
        }
        let goal = parse_eth(&self.target);
        if goal.is_none() {
            errors.insert(Field::Target, "Target amount must be greater than 0");
        }
        let duration = self
            .duration_days
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|days| *days >= 1);
        if duration.is_none() {
            errors.insert(Field::Duration, "Duration must be at least 1 day");
        }
        let beneficiary = parse_address(&self.beneficiary);
        if beneficiary.is_none() {
            errors.insert(Field::Beneficiary, "Valid beneficiary address is required");
        }
        let image = self.image.trim();
        if !image.starts_with("http") {
            errors.insert(Field::Image, "Valid image URL is required");
        }

        match (goal, duration, beneficiary) {
            (Some(goal), Some(duration_days), Some(beneficiary)) if errors.is_empty() => {
                Ok(NewCampaign {
                    title: self.title.trim().to_string(),
                    description: self.description.trim().to_string(),
                    goal,
                    duration_days,
                    beneficiary,
                    image_url: image.to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Validates an ETH donation amount and converts it to wei.
pub fn validate_amount(amount: &str) -> Result<U256, ValidationErrors> {
    parse_eth(amount).ok_or_else(|| {
        let mut errors = ValidationErrors::default();
        errors.insert(Field::Amount, "Please enter a valid donation amount");
        errors
    })
}

/// Submits `createCampaign` after validating `form`.
///
/// `contract` is `None` while no wallet is connected.
pub async fn create_campaign<C: FundraiserContract>(
    contract: Option<&C>,
    form: &CampaignForm,
) -> Result<TxHash, ActionError> {
    let campaign = form.validate()?;
    let contract = contract.ok_or(ActionError::WalletRequired)?;
    tracing::info!(
        "Creating campaign {:?}: goal {} wei over {} days",
        campaign.title,
        campaign.goal,
        campaign.duration_days
    );
    Ok(contract.create_campaign(&campaign).await?)
}

/// Donates `amount` ETH to `campaign`.
pub async fn donate<C: FundraiserContract>(
    contract: Option<&C>,
    campaign: &Campaign,
    amount: &str,
) -> Result<TxHash, ActionError> {
    let contract = contract.ok_or(ActionError::WalletRequired)?;
    if !campaign.accepts_donations() {
        return Err(ActionError::CampaignEnded);
    }
    let value = validate_amount(amount)?;
    tracing::info!("Donating {} wei to campaign {}", value, campaign.id());
    Ok(contract.donate(campaign.id(), value).await?)
}

/// Withdraws the funds of campaign `id`, closing it.
pub async fn withdraw<C: FundraiserContract>(
    contract: Option<&C>,
    id: u64,
) -> Result<TxHash, ActionError> {
    let contract = contract.ok_or(ActionError::WalletRequired)?;
    tracing::info!("Withdrawing funds of campaign {}", id);
    Ok(contract.withdraw_funds(id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE_DAY;
    use crate::error::{ContractError, RpcError};
    use crate::test_utils::*;

    fn valid_form() -> CampaignForm {
        CampaignForm {
            title: "Scholarship Fund".to_string(),
            description: "Support CS students".to_string(),
            target: "5".to_string(),
            duration_days: "30".to_string(),
            beneficiary: alice().to_string(),
            image: "https://example.com/a.png".to_string(),
        }
    }

    #[test]
    fn test_valid_form_converts_units() {
        let campaign = valid_form().validate().unwrap();
        assert_eq!(campaign.goal, eth(5));
        assert_eq!(campaign.duration_days, 30);
        assert_eq!(campaign.beneficiary, alice());
    }

    #[test]
    fn test_every_field_is_checked() {
        let form = CampaignForm {
            title: " ".to_string(),
            description: String::new(),
            target: "0".to_string(),
            duration_days: "0".to_string(),
            beneficiary: "alice".to_string(),
            image: "ftp://x".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Title), Some("Title is required"));
        assert_eq!(errors.get(Field::Target), Some("Target amount must be greater than 0"));
        assert_eq!(errors.get(Field::Duration), Some("Duration must be at least 1 day"));
        assert_eq!(
            errors.get(Field::Beneficiary),
            Some("Valid beneficiary address is required")
        );
    }

    #[test]
    fn test_form_defaults() {
        let form = CampaignForm::for_account(Some(alice()));
        assert_eq!(form.duration_days, "30");
        assert_eq!(parse_address(&form.beneficiary), Some(alice()));
        assert_eq!(CampaignForm::for_account(None).beneficiary, "");
    }

    #[test]
    fn test_set_routes_fields() {
        let mut form = CampaignForm::default();
        form.set(Field::Target, "5".to_string());
        form.set(Field::Amount, "0.1".to_string());
        form.set(Field::Duration, "7".to_string());
        assert_eq!(form.target, "5");
        assert_eq!(form.duration_days, "7");
    }

    #[tokio::test]
    async fn test_create_submits_after_validation() {
        let contract = MockContract::default();
        let tx = create_campaign(Some(&contract), &valid_form()).await.unwrap();
        assert_eq!(tx, MOCK_TX);
        let created = contract.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "Scholarship Fund");
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_contract() {
        let contract = MockContract::default();
        let mut form = valid_form();
        form.target = "-3".to_string();
        let err = create_campaign(Some(&contract), &form).await.unwrap_err();
        assert!(err.field_errors().is_some());
        assert!(contract.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_create_without_wallet() {
        let err = create_campaign::<MockContract>(None, &valid_form()).await.unwrap_err();
        assert_eq!(err, ActionError::WalletRequired);
        assert_eq!(err.user_message(), "Please connect your wallet first.");
    }

    #[tokio::test]
    async fn test_donate() {
        let contract = MockContract::default();
        let campaign = Campaign::derive(record(2, "c", eth(5), eth(0), NOW + ONE_DAY), None, NOW);
        donate(Some(&contract), &campaign, "0.5").await.unwrap();
        assert_eq!(
            *contract.donations.borrow(),
            vec![(2, eth(1) / alloy_primitives::U256::from(2u64))]
        );
    }

    #[tokio::test]
    async fn test_donate_refuses_ended_campaigns() {
        let contract = MockContract::default();
        let expired = Campaign::derive(record(1, "c", eth(5), eth(0), NOW - ONE_DAY), None, NOW);
        assert_eq!(
            donate(Some(&contract), &expired, "1").await,
            Err(ActionError::CampaignEnded)
        );

        let mut closed = record(2, "c", eth(5), eth(0), NOW + ONE_DAY);
        closed.is_closed = true;
        let closed = Campaign::derive(closed, None, NOW);
        assert_eq!(
            donate(Some(&contract), &closed, "1").await,
            Err(ActionError::CampaignEnded)
        );
        assert!(contract.donations.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_donate_rejects_bad_amount() {
        let contract = MockContract::default();
        let campaign = Campaign::derive(record(1, "c", eth(5), eth(0), NOW + ONE_DAY), None, NOW);
        let err = donate(Some(&contract), &campaign, "abc").await.unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|e| e.get(Field::Amount)),
            Some("Please enter a valid donation amount")
        );
    }

    #[tokio::test]
    async fn test_withdraw() {
        let contract = MockContract::default();
        assert_eq!(withdraw(Some(&contract), 4).await, Ok(MOCK_TX));
        assert_eq!(*contract.withdrawals.borrow(), vec![4]);
        assert_eq!(
            withdraw::<MockContract>(None, 4).await,
            Err(ActionError::WalletRequired)
        );
    }

    #[tokio::test]
    async fn test_withdraw_surfaces_contract_error() {
        let contract = MockContract::default();
        contract.fail_writes(RpcError::new(3, "execution reverted: Not creator"));
        let err = withdraw(Some(&contract), 1).await.unwrap_err();
        assert_eq!(
            err,
            ActionError::Contract(ContractError::Reverted {
                reason: Some("Not creator".to_string())
            })
        );
        assert_eq!(err.user_message(), "Not creator");
    }
}

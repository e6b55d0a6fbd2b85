mod campaign_card;
mod campaign_filters;
mod create_campaign_form;
mod donate_modal;
mod layout;
mod tx_status;
mod wallet_button;

pub use campaign_card::CampaignCard;
pub use campaign_filters::CampaignFilters;
pub use create_campaign_form::CreateCampaignForm;
pub use donate_modal::DonateModal;
pub use layout::Layout;
pub use tx_status::{TxOutcome, TxStatus};
pub use wallet_button::WalletButton;

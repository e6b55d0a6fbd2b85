mod campaign_details;
mod create_campaign;
mod home;
mod not_found;

pub use campaign_details::CampaignDetails;
pub use create_campaign::CreateCampaign;
pub use home::Home;
pub use not_found::NotFound;

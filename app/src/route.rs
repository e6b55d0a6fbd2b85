use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{CampaignDetails, CreateCampaign, Home, NotFound};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/create")]
    CreateCampaign {},
    #[route("/campaign/:id")]
    CampaignDetails { id: u64 },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

mod eip1193;
mod use_campaign;
mod use_campaigns;
mod use_wallet;

pub use use_campaign::use_campaign;
pub use use_campaigns::use_campaigns;
pub use use_wallet::{use_wallet, use_wallet_actions, use_wallet_provider, WalletAction, WalletStatus};

/// Current Unix time in seconds.
#[cfg(feature = "web")]
pub fn now() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(not(feature = "web"))]
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

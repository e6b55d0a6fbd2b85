use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use fundraiser_api::prelude::*;
use futures::StreamExt;

use super::{now, use_wallet, WalletStatus};

/// Campaign list state plus the channel that schedules refreshes.
#[derive(Clone, Copy)]
pub struct CampaignFeed {
    pub state: Signal<CampaignListState>,
    refresh: Coroutine<RefreshReason>,
}

impl CampaignFeed {
    pub fn refresh(&self, reason: RefreshReason) {
        self.refresh.send(reason);
    }
}

/// Loads the campaign list and keeps it current.
///
/// Refreshes once the wallet bootstrap settles, whenever the account
/// changes, every [`REFRESH_INTERVAL_MS`] while connected, and on demand.
/// Everything stops when the calling component unmounts.
pub fn use_campaigns() -> CampaignFeed {
    let wallet = use_wallet();
    let mut state = use_signal(CampaignListState::default);

    let refresh = use_coroutine(move |mut rx: UnboundedReceiver<RefreshReason>| async move {
        while let Some(reason) = rx.next().await {
            let (contract, viewer) = {
                let wallet = wallet.peek();
                (wallet.contract.clone(), wallet.account)
            };
            let Some(contract) = contract else {
                state.write().no_contract();
                continue;
            };

            tracing::debug!("Refreshing campaigns ({})", reason);
            let generation = state.write().begin();
            let result = fetch_campaigns(&contract, viewer, now()).await;
            if let Err(e) = &result {
                tracing::error!("Error fetching campaigns: {}", e);
            }
            state.write().finish(generation, result);
        }
    });

    // The first settled wallet state loads the list; later ones reload it.
    let session = use_memo(move || {
        let wallet = wallet.read();
        (wallet.status, wallet.account)
    });
    let loaded_once = use_hook(|| Rc::new(Cell::new(false)));
    use_effect(move || {
        let (status, _) = session();
        if status == WalletStatus::Connecting {
            return;
        }
        let reason = if loaded_once.replace(true) {
            RefreshReason::AccountChanged
        } else {
            RefreshReason::ContractReady
        };
        refresh.send(reason);
    });

    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            if wallet.peek().account.is_some() {
                refresh.send(RefreshReason::Tick);
            }
        }
    });

    CampaignFeed { state, refresh }
}

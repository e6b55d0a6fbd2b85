use dioxus::prelude::*;
use fundraiser_api::prelude::*;
use futures::channel::mpsc;
use futures::{stream, StreamExt};

use super::eip1193::Eip1193;

/// Contract client backed by the browser wallet.
pub type Contract = Fundraiser<Eip1193>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WalletStatus {
    /// Bootstrap is running; the app requests accounts as soon as it loads.
    #[default]
    Connecting,
    Connected,
    Disconnected,
    /// No injected provider, e.g. MetaMask is not installed.
    NoProvider,
}

#[derive(Clone, Debug, Default)]
pub struct WalletState {
    pub status: WalletStatus,
    pub account: Option<Address>,
    pub chain_id: Option<u64>,
    pub contract: Option<Contract>,
}

impl WalletState {
    fn disconnected() -> Self {
        Self {
            status: WalletStatus::Disconnected,
            ..Default::default()
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == WalletStatus::Connected
    }
}

#[derive(Clone, Debug)]
pub enum WalletAction {
    Connect,
    Disconnect,
    AccountsChanged(Vec<Address>),
}

/// Provides [`WalletState`] to the tree and runs the bootstrap loop.
///
/// Accounts are requested once on load and again on every `Connect` or
/// `accountsChanged`. Failures are logged and leave the wallet disconnected.
pub fn use_wallet_provider() -> Signal<WalletState> {
    let mut wallet = use_context_provider(|| Signal::new(WalletState::default()));

    use_coroutine(move |rx: UnboundedReceiver<WalletAction>| async move {
        let Some(provider) = Eip1193::detect() else {
            tracing::warn!("No Ethereum wallet detected");
            wallet.set(WalletState {
                status: WalletStatus::NoProvider,
                ..Default::default()
            });
            return;
        };

        let (accounts_tx, accounts_rx) = mpsc::unbounded();
        let _subscription = provider
            .on_accounts_changed(move |accounts| {
                let _ = accounts_tx.unbounded_send(WalletAction::AccountsChanged(accounts));
            })
            .map_err(|e| tracing::warn!("Cannot watch account changes: {}", e))
            .ok();
        let mut actions = stream::select(rx, accounts_rx);

        connect(&provider, wallet).await;

        while let Some(action) = actions.next().await {
            match action {
                WalletAction::Connect => connect(&provider, wallet).await,
                WalletAction::AccountsChanged(accounts) if accounts.is_empty() => {
                    tracing::info!("Wallet locked or all accounts disconnected");
                    wallet.set(WalletState::disconnected());
                }
                WalletAction::AccountsChanged(_) => connect(&provider, wallet).await,
                WalletAction::Disconnect => wallet.set(WalletState::disconnected()),
            }
        }
    });

    wallet
}

pub fn use_wallet() -> Signal<WalletState> {
    use_context::<Signal<WalletState>>()
}

pub fn use_wallet_actions() -> Coroutine<WalletAction> {
    use_coroutine_handle::<WalletAction>()
}

async fn connect(provider: &Eip1193, mut wallet: Signal<WalletState>) {
    wallet.write().status = WalletStatus::Connecting;
    match bootstrap(provider).await {
        Ok(state) => {
            if let Some(account) = state.account {
                tracing::info!("Connected {} on chain {:?}", account, state.chain_id);
            }
            wallet.set(state);
        }
        Err(e) => {
            tracing::error!("Wallet connection failed: {}", e);
            wallet.set(WalletState::disconnected());
        }
    }
}

async fn bootstrap(provider: &Eip1193) -> Result<WalletState, ContractError> {
    let accounts = provider.request_accounts().await?;
    let account = accounts.first().copied().ok_or(ContractError::NotConnected)?;
    let contract = Fundraiser::new(provider.clone(), CONTRACT_ADDRESS).with_sender(account);

    let chain_id = match contract.chain_id().await {
        Ok(chain_id) => Some(chain_id),
        Err(e) => {
            tracing::warn!("Failed to read chain id: {}", e);
            None
        }
    };

    Ok(WalletState {
        status: WalletStatus::Connected,
        account: Some(account),
        chain_id,
        contract: Some(contract),
    })
}

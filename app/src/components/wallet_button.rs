use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use crate::hooks::{use_wallet, use_wallet_actions, WalletAction, WalletStatus};
use crate::METAMASK_URL;

#[component]
pub fn WalletButton() -> Element {
    let wallet = use_wallet();
    let actions = use_wallet_actions();

    let connect_wallet = move |_| {
        actions.send(WalletAction::Connect);
    };

    let disconnect_wallet = move |_| {
        actions.send(WalletAction::Disconnect);
    };

    let wallet_read = wallet.read();

    match (wallet_read.status, wallet_read.account) {
        (WalletStatus::Connected, Some(account)) => {
            let short_account = short_address(&account);
            rsx! {
                div { class: "flex items-center space-x-2",
                    span {
                        class: "text-sm text-gray-400 font-mono",
                        title: "{account}",
                        "{short_account}"
                    }
                    button {
                        class: "btn btn-secondary text-sm",
                        onclick: disconnect_wallet,
                        "Disconnect"
                    }
                }
            }
        }
        (WalletStatus::Connecting, _) => rsx! {
            button { class: "btn btn-primary opacity-50", disabled: true, "Connecting..." }
        },
        (WalletStatus::NoProvider, _) => {
            let install_hint = ContractError::NoProvider.user_message();
            rsx! {
                a {
                    class: "btn btn-primary",
                    href: METAMASK_URL,
                    target: "_blank",
                    title: "{install_hint}",
                    "Install MetaMask"
                }
            }
        }
        _ => rsx! {
            button {
                class: "btn btn-primary",
                onclick: connect_wallet,
                "Connect Wallet"
            }
        },
    }
}

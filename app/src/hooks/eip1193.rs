//! Bridge to the injected EIP-1193 provider (`window.ethereum`).

use alloy_primitives::Address;
use fundraiser_api::prelude::*;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Object, Promise, Reflect, JSON};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const ACCOUNTS_CHANGED: &str = "accountsChanged";

/// Code for failures inside the bridge rather than the wallet.
const BRIDGE_ERROR: i64 = -32603;

/// Handle to the wallet provider; cheap to clone.
#[derive(Clone, Debug, PartialEq)]
pub struct Eip1193 {
    ethereum: JsValue,
}

impl Eip1193 {
    /// Returns the injected provider, if a wallet extension is installed.
    #[cfg(feature = "web")]
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(Self { ethereum })
    }

    #[cfg(not(feature = "web"))]
    pub fn detect() -> Option<Self> {
        None
    }

    /// Asks the wallet to expose its accounts, prompting the user if needed.
    pub async fn request_accounts(&self) -> Result<Vec<Address>, ContractError> {
        let accounts = self.request("eth_requestAccounts", json!([])).await?;
        Ok(parse_accounts(&accounts))
    }

    /// Calls `handler` with the new account list whenever the user switches
    /// or locks accounts. The listener is removed when the returned value
    /// is dropped.
    pub fn on_accounts_changed(
        &self,
        mut handler: impl FnMut(Vec<Address>) + 'static,
    ) -> Result<AccountsSubscription, RpcError> {
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            let accounts = from_js(&accounts)
                .map(|value| parse_accounts(&value))
                .unwrap_or_default();
            handler(accounts);
        });

        let on = method(&self.ethereum, "on")?;
        on.call2(
            &self.ethereum,
            &JsValue::from_str(ACCOUNTS_CHANGED),
            listener.as_ref(),
        )
        .map_err(js_error)?;

        Ok(AccountsSubscription {
            ethereum: self.ethereum.clone(),
            listener,
        })
    }
}

impl Transport for Eip1193 {
    async fn request(&self, method_name: &str, params: Value) -> Result<Value, RpcError> {
        let args = Object::new();
        Reflect::set(
            &args,
            &JsValue::from_str("method"),
            &JsValue::from_str(method_name),
        )
        .map_err(js_error)?;
        Reflect::set(&args, &JsValue::from_str("params"), &to_js(&params)?).map_err(js_error)?;

        let request = method(&self.ethereum, "request")?;
        let promise: Promise = request
            .call1(&self.ethereum, &args)
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| RpcError::new(BRIDGE_ERROR, "request did not return a promise"))?;

        let result = JsFuture::from(promise).await.map_err(js_error)?;
        from_js(&result)
    }

    async fn pause(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

/// Registered `accountsChanged` listener.
pub struct AccountsSubscription {
    ethereum: JsValue,
    listener: Closure<dyn FnMut(JsValue)>,
}

impl Drop for AccountsSubscription {
    fn drop(&mut self) {
        let removed = method(&self.ethereum, "removeListener").and_then(|remove| {
            remove
                .call2(
                    &self.ethereum,
                    &JsValue::from_str(ACCOUNTS_CHANGED),
                    self.listener.as_ref(),
                )
                .map_err(js_error)
        });
        if let Err(e) = removed {
            tracing::warn!("Failed to remove {} listener: {}", ACCOUNTS_CHANGED, e);
        }
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function, RpcError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| RpcError::new(BRIDGE_ERROR, format!("provider has no {name} method")))
}

fn parse_accounts(value: &Value) -> Vec<Address> {
    value
        .as_array()
        .map(|accounts| {
            accounts
                .iter()
                .filter_map(Value::as_str)
                .filter_map(parse_address)
                .collect()
        })
        .unwrap_or_default()
}

fn to_js(value: &Value) -> Result<JsValue, RpcError> {
    JSON::parse(&value.to_string()).map_err(js_error)
}

fn from_js(value: &JsValue) -> Result<Value, RpcError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text: String = JSON::stringify(value)
        .map_err(|_| RpcError::new(BRIDGE_ERROR, "provider returned an unserializable value"))?
        .into();
    serde_json::from_str(&text).map_err(|e| RpcError::new(BRIDGE_ERROR, e.to_string()))
}

/// Provider errors are plain objects carrying `code`, `message` and `data`.
fn js_error(err: JsValue) -> RpcError {
    let field = |name: &str| Reflect::get(&err, &JsValue::from_str(name)).ok();

    let code = field("code")
        .and_then(|code| code.as_f64())
        .map(|code| code as i64)
        .unwrap_or(BRIDGE_ERROR);
    let message = field("message")
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    let data = field("data")
        .and_then(|data| from_js(&data).ok())
        .filter(|data| !data.is_null());

    RpcError {
        code,
        message,
        data,
    }
}

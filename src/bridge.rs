//! Bindings to `js/bridge.js`, the only place that touches the thirdweb SDK.
//!
//! Every import returns a promise; the async wrappers here resolve it and
//! turn JS exceptions into [`CrowdfundError`] values.

use crate::error::CrowdfundError;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(module = "/js/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = connectWallet)]
    fn connect_wallet_js(client_id: &str, chain_id: u32) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = getUserCampaigns)]
    fn get_user_campaigns_js(
        client_id: &str,
        chain_id: u32,
        factory: &str,
        owner: &str,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = deployPublishedContract)]
    fn deploy_published_contract_js(request: JsValue) -> Result<Promise, JsValue>;
}

/// Best-effort text of a thrown JS value.
pub fn js_error_message(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

async fn resolve(
    promise: Result<Promise, JsValue>,
    wrap: fn(String) -> CrowdfundError,
) -> Result<JsValue, CrowdfundError> {
    let promise = promise.map_err(|e| wrap(js_error_message(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| wrap(js_error_message(&e)))
}

/// Prompt the injected wallet and return the connected account address.
pub async fn connect_wallet(client_id: &str, chain_id: u32) -> Result<String, CrowdfundError> {
    let value = resolve(
        connect_wallet_js(client_id, chain_id),
        CrowdfundError::WalletConnection,
    )
    .await?;
    value
        .as_string()
        .ok_or_else(|| CrowdfundError::WalletConnection("wallet returned no address".to_string()))
}

pub async fn get_user_campaigns(
    client_id: &str,
    chain_id: u32,
    factory: &str,
    owner: &str,
) -> Result<JsValue, CrowdfundError> {
    resolve(
        get_user_campaigns_js(client_id, chain_id, factory, owner),
        CrowdfundError::CampaignRead,
    )
    .await
}

pub async fn deploy_published_contract(request: JsValue) -> Result<String, CrowdfundError> {
    let value = resolve(
        deploy_published_contract_js(request),
        CrowdfundError::Deployment,
    )
    .await?;
    value
        .as_string()
        .ok_or_else(|| CrowdfundError::Decode("deployment returned no address".to_string()))
}

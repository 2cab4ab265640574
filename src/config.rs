use crate::campaign::CampaignParams;
use crate::error::{CrowdfundError, CrowdfundResult};
use alloy_primitives::{address, Address};
use gloo_utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Sepolia testnet.
pub const DEFAULT_CHAIN_ID: u32 = 11_155_111;
pub const DEFAULT_CONTRACT_ID: &str = "Crowdfunding";
pub const DEFAULT_PUBLISHER: Address = address!("707cD5894f028b29a4CD52054C721095Bf3D4b43");
pub const DEFAULT_VERSION: &str = "1.0.1";

/// Name of the global object a host page may set to override the build defaults.
pub const WINDOW_CONFIG_KEY: &str = "CROWDFUND_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub client_id: String,
    pub chain_id: u32,
    pub factory_address: Option<Address>,
    pub contract_id: String,
    pub publisher: Address,
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client_id: option_env!("THIRDWEB_CLIENT_ID").unwrap_or_default().to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            factory_address: option_env!("CROWDFUNDING_FACTORY").and_then(|a| a.parse().ok()),
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
            publisher: DEFAULT_PUBLISHER,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// A deploy call for one campaign: the published contract identity plus the
/// constructor parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRequest {
    pub client_id: String,
    pub chain_id: u32,
    pub contract_id: String,
    pub publisher: Address,
    pub version: String,
    pub contract_params: CampaignParams,
}

impl AppConfig {
    /// Parse from JSON, filling absent keys with the build defaults.
    pub fn from_json(json: &str) -> CrowdfundResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CrowdfundError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `window.CROWDFUND_CONFIG`, falling back to the build defaults when the
    /// page does not define it.
    pub fn from_window() -> CrowdfundResult<Self> {
        let value = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok())
            .filter(|v| !v.is_undefined() && !v.is_null());

        let config = match value {
            Some(value) => value
                .into_serde::<Self>()
                .map_err(|e| CrowdfundError::Config(e.to_string()))?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CrowdfundResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(CrowdfundError::Config("No client ID provided".to_string()));
        }
        if self.factory_address.is_none() {
            return Err(CrowdfundError::Config("No campaign factory address provided".to_string()));
        }
        if self.contract_id.is_empty() || self.version.is_empty() {
            return Err(CrowdfundError::Config("Published contract id and version are required".to_string()));
        }
        Ok(())
    }

    /// Factory address; `validate` guarantees it for loaded configs.
    pub fn factory(&self) -> CrowdfundResult<Address> {
        self.factory_address
            .ok_or_else(|| CrowdfundError::Config("No campaign factory address provided".to_string()))
    }

    pub fn deployment(&self, contract_params: CampaignParams) -> DeploymentRequest {
        DeploymentRequest {
            client_id: self.client_id.clone(),
            chain_id: self.chain_id,
            contract_id: self.contract_id.clone(),
            publisher: self.publisher,
            version: self.version.clone(),
            contract_params,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> AppConfig {
    AppConfig {
        client_id: "test-client".to_string(),
        factory_address: Some(address!("00000000000000000000000000000000000000fa")),
        ..AppConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_fills_defaults() {
        let config = AppConfig::from_json(
            r#"{"clientId":"abc","factoryAddress":"0x00000000000000000000000000000000000000fa"}"#,
        )
        .unwrap();

        assert_eq!(config.client_id, "abc");
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.contract_id, "Crowdfunding");
        assert_eq!(config.publisher, DEFAULT_PUBLISHER);
        assert_eq!(config.version, "1.0.1");
    }

    #[test]
    fn test_missing_client_id() {
        let err = AppConfig::from_json(
            r#"{"clientId":"  ","factoryAddress":"0x00000000000000000000000000000000000000fa"}"#,
        )
        .unwrap_err();
        assert_eq!(err, CrowdfundError::Config("No client ID provided".to_string()));
    }

    #[test]
    fn test_missing_factory() {
        let err = AppConfig::from_json(r#"{"clientId":"abc","factoryAddress":null}"#).unwrap_err();
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_chain_id_must_fit_u32() {
        let err = AppConfig::from_json(
            r#"{"clientId":"abc","chainId":4294967296,"factoryAddress":"0x00000000000000000000000000000000000000fa"}"#,
        )
        .unwrap_err();
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(CrowdfundError::Config(_))
        ));
    }

    #[test]
    fn test_deployment_carries_publisher_identity() {
        let config = test_config();
        let params = CampaignParams {
            name: "n".into(),
            description: "d".into(),
            goal: alloy_primitives::U256::from(1u64),
            deadline: 86_400,
        };
        let request = config.deployment(params.clone());

        assert_eq!(request.contract_id, DEFAULT_CONTRACT_ID);
        assert_eq!(request.publisher, DEFAULT_PUBLISHER);
        assert_eq!(request.version, DEFAULT_VERSION);
        assert_eq!(request.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(request.contract_params, params);
    }
}

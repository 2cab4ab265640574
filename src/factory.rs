use crate::bridge;
use crate::campaign::Campaign;
use crate::config::{AppConfig, DeploymentRequest};
use crate::error::{CrowdfundError, CrowdfundResult};
use alloy_primitives::Address;
use async_trait::async_trait;
use gloo_utils::format::JsValueSerdeExt;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Chain access needed by the dashboard: list a user's campaigns and deploy a
/// new one from the published template.
#[async_trait(?Send)]
pub trait CampaignFactory {
    async fn user_campaigns(&self, owner: Address) -> CrowdfundResult<Vec<Campaign>>;

    async fn deploy_campaign(&self, request: &DeploymentRequest) -> CrowdfundResult<Address>;
}

/// Shared factory handle for component props. Equal only to clones of itself.
#[derive(Clone)]
pub struct FactoryHandle(pub Rc<dyn CampaignFactory>);

impl FactoryHandle {
    pub fn new(factory: impl CampaignFactory + 'static) -> Self {
        Self(Rc::new(factory))
    }
}

impl PartialEq for FactoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FactoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FactoryHandle")
    }
}

impl std::ops::Deref for FactoryHandle {
    type Target = dyn CampaignFactory;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// [`CampaignFactory`] backed by the thirdweb SDK through the JS bridge.
pub struct ThirdwebFactory {
    config: Rc<AppConfig>,
}

impl ThirdwebFactory {
    pub fn new(config: Rc<AppConfig>) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl CampaignFactory for ThirdwebFactory {
    async fn user_campaigns(&self, owner: Address) -> CrowdfundResult<Vec<Campaign>> {
        let factory = self.config.factory()?;
        let raw = bridge::get_user_campaigns(
            &self.config.client_id,
            self.config.chain_id,
            &factory.to_string(),
            &owner.to_string(),
        )
        .await?;

        let campaigns: Vec<Campaign> = raw
            .into_serde()
            .map_err(|e| CrowdfundError::Decode(e.to_string()))?;
        log::debug!("Loaded {} campaigns for {}", campaigns.len(), owner);
        Ok(campaigns)
    }

    async fn deploy_campaign(&self, request: &DeploymentRequest) -> CrowdfundResult<Address> {
        let payload = JsValue::from_serde(request)
            .map_err(|e| CrowdfundError::Deployment(e.to_string()))?;
        let address = bridge::deploy_published_contract(payload).await?;

        address
            .parse()
            .map_err(|e| CrowdfundError::Decode(format!("deployed address {}: {}", address, e)))
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeFactory;
    use super::*;
    use alloy_primitives::address;

    #[tokio::test]
    async fn test_fake_filters_by_owner() {
        let mine = address!("00000000000000000000000000000000000000a1");
        let theirs = address!("00000000000000000000000000000000000000b2");
        let fake = FakeFactory::default();
        fake.campaigns.borrow_mut().extend([
            Campaign {
                campaign_address: address!("00000000000000000000000000000000000000c1"),
                owner: mine,
                name: "Mine".into(),
                creation_time: 1,
            },
            Campaign {
                campaign_address: address!("00000000000000000000000000000000000000c2"),
                owner: theirs,
                name: "Theirs".into(),
                creation_time: 2,
            },
        ]);

        let handle = FactoryHandle::new(fake);
        let campaigns = handle.user_campaigns(mine).await.unwrap();
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].name, "Mine");
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = FactoryHandle::new(FakeFactory::default());
        let b = FactoryHandle::new(FakeFactory::default());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}

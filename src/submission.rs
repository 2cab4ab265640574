use crate::campaign::CampaignDraft;
use crate::config::{AppConfig, DeploymentRequest};
use crate::error::{CrowdfundError, CrowdfundResult};
use crate::factory::CampaignFactory;
use alloy_primitives::Address;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(Address),
    Failed(String),
}

/// The create-campaign modal: its fields and the state of its one deploy request.
#[derive(Debug, Clone, Default)]
pub struct CreateCampaignForm {
    pub draft: CampaignDraft,
    state: SubmitState,
}

impl CreateCampaignForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_in_flight() {
            "Creating Campaign..."
        } else {
            "Create Campaign"
        }
    }

    /// Validate the draft and enter `Submitting`. On error the state is untouched
    /// and no deploy should be made.
    pub fn begin(&mut self, now: DateTime<Utc>, config: &AppConfig) -> CrowdfundResult<DeploymentRequest> {
        if self.is_in_flight() {
            return Err(CrowdfundError::SubmissionInFlight);
        }
        let params = self.draft.prepare(now)?;
        self.state = SubmitState::Submitting;
        Ok(config.deployment(params))
    }

    /// Record the deploy outcome and return the text to alert. Field values are
    /// kept either way so a failed attempt can be retried as is.
    pub fn finish(&mut self, result: &CrowdfundResult<Address>) -> String {
        match result {
            Ok(address) => {
                self.state = SubmitState::Succeeded(*address);
                "Campaign created successfully!".to_string()
            }
            Err(e) => {
                self.state = SubmitState::Failed(e.to_string());
                e.user_message()
            }
        }
    }
}

/// The one external call of a submission: deploy the campaign and log the result.
pub async fn deploy<F>(factory: &F, request: &DeploymentRequest) -> CrowdfundResult<Address>
where
    F: CampaignFactory + ?Sized,
{
    log::info!("Deploying campaign contract {:?}", request.contract_params.name);
    let result = factory.deploy_campaign(request).await;
    match &result {
        Ok(address) => log::info!("Campaign deployed at {}", address),
        Err(e) => log::error!("Error deploying campaign: {}", e),
    }
    result
}

/// Run one submission end to end against `factory`: `begin`, `deploy`, `finish`.
pub async fn submit<F>(
    form: &mut CreateCampaignForm,
    factory: &F,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> CrowdfundResult<Address>
where
    F: CampaignFactory + ?Sized,
{
    let request = form.begin(now, config)?;
    let result = deploy(factory, &request).await;
    form.finish(&result);
    result
}

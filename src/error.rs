use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrowdfundError {
    // Validation errors
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount has {digits} fractional digits, at most {max} allowed")]
    ExcessPrecision { digits: usize, max: u8 },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Campaign goal must be greater than zero")]
    ZeroGoal,

    #[error("A campaign deployment is already in flight")]
    SubmissionInFlight,

    // Chain errors
    #[error("Deployment failed: {0}")]
    Deployment(String),

    #[error("Campaign read failed: {0}")]
    CampaignRead(String),

    #[error("Malformed bridge response: {0}")]
    Decode(String),

    #[error("Wallet connection failed: {0}")]
    WalletConnection(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CrowdfundError {
    /// Validation errors abort a submission before any external call is made.
    pub fn is_validation(&self) -> bool {
        self.category() == "validation"
    }

    pub fn category(&self) -> &'static str {
        match self {
            CrowdfundError::InvalidAmount(_)
            | CrowdfundError::ExcessPrecision { .. }
            | CrowdfundError::MissingField(_)
            | CrowdfundError::ZeroGoal
            | CrowdfundError::SubmissionInFlight => "validation",

            CrowdfundError::Deployment(_) => "deployment",

            CrowdfundError::CampaignRead(_) | CrowdfundError::Decode(_) => "read",

            CrowdfundError::WalletConnection(_) => "wallet",

            CrowdfundError::Config(_) => "configuration",
        }
    }

    /// Text shown in the alert prompt. Network failures, rejected signatures and
    /// reverts all collapse to the same deployment message.
    pub fn user_message(&self) -> String {
        match self {
            CrowdfundError::MissingField(_) => "Please fill in all fields".to_string(),
            CrowdfundError::Deployment(_) => "Failed to create campaign. Please try again.".to_string(),
            CrowdfundError::CampaignRead(_) | CrowdfundError::Decode(_) => {
                "Failed to load campaigns.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type CrowdfundResult<T> = Result<T, CrowdfundError>;

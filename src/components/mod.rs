pub mod campaign_card;
pub mod create_campaign;
pub mod dashboard;
pub mod wallet;

use crate::error::{CrowdfundError, CrowdfundResult};
use crate::units::{self, parse_ether};
use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A campaign owned by the connected account, as reported by the factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub campaign_address: Address,
    pub owner: Address,
    pub name: String,
    pub creation_time: u64,
}

impl Campaign {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.creation_time).ok()?, 0)
    }
}

/// Constructor arguments of the published Crowdfunding contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignParams {
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub goal: U256,
    pub deadline: u64,
}

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Unix timestamp `days` whole days after `now`.
pub fn deadline_timestamp(now: DateTime<Utc>, days: u32) -> u64 {
    let now = u64::try_from(now.timestamp()).unwrap_or(0);
    now + u64::from(days) * SECONDS_PER_DAY
}

/// Unsubmitted form fields of the create-campaign modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub goal: String,
    pub deadline_days: u32,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            goal: "1".to_string(),
            deadline_days: 1,
        }
    }
}

impl CampaignDraft {
    /// Accept the new goal text only if it still looks like an amount.
    pub fn set_goal(&mut self, value: &str) -> bool {
        if units::is_amount_input(value) {
            self.goal = value.to_string();
            true
        } else {
            false
        }
    }

    pub fn set_deadline_days(&mut self, value: i64) {
        self.deadline_days = u32::try_from(value.max(1)).unwrap_or(u32::MAX);
    }

    /// Raw number-input text; unparsable text counts as below the minimum.
    pub fn set_deadline_input(&mut self, value: &str) {
        self.set_deadline_days(value.trim().parse().unwrap_or(1));
    }

    pub fn prepare(&self, now: DateTime<Utc>) -> CrowdfundResult<CampaignParams> {
        let name = self.name.trim();
        let description = self.description.trim();

        if name.is_empty() {
            return Err(CrowdfundError::MissingField("name"));
        }
        if description.is_empty() {
            return Err(CrowdfundError::MissingField("description"));
        }
        if self.goal.is_empty() {
            return Err(CrowdfundError::MissingField("goal"));
        }
        if self.deadline_days == 0 {
            return Err(CrowdfundError::MissingField("deadline"));
        }

        let goal = parse_ether(&self.goal)?;
        if goal.is_zero() {
            return Err(CrowdfundError::ZeroGoal);
        }

        Ok(CampaignParams {
            name: name.to_string(),
            description: description.to_string(),
            goal,
            deadline: deadline_timestamp(now, self.deadline_days),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(goal: &str, days: u32) -> CampaignDraft {
        CampaignDraft {
            name: "Community garden".to_string(),
            description: "Raised beds for the block".to_string(),
            goal: goal.to_string(),
            deadline_days: days,
        }
    }

    #[test]
    fn test_defaults() {
        let draft = CampaignDraft::default();
        assert_eq!(draft.goal, "1");
        assert_eq!(draft.deadline_days, 1);
        assert!(draft.name.is_empty());
    }

    #[test]
    fn test_prepare_one_and_a_half_for_a_week() {
        let now = Utc::now();
        let params = filled("1.5", 7).prepare(now).unwrap();

        assert_eq!(params.goal, U256::from(1_500_000_000_000_000_000u64));
        let expected = Utc::now().timestamp() as u64 + 604_800;
        assert!(params.deadline.abs_diff(expected) <= 1);
    }

    #[test]
    fn test_prepare_two_for_a_day() {
        let params = filled("2", 1).prepare(Utc::now()).unwrap();
        assert_eq!(params.goal, U256::from(2_000_000_000_000_000_000u64));
    }

    #[test]
    fn test_deadline_is_whole_days_after_now() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        for days in [1u32, 2, 30, 365] {
            assert_eq!(
                deadline_timestamp(now, days),
                1_700_000_000 + u64::from(days) * 86_400
            );
        }
    }

    #[test]
    fn test_missing_fields() {
        let now = Utc::now();
        let cases = [
            (CampaignDraft { name: " ".into(), ..filled("1", 1) }, "name"),
            (CampaignDraft { description: String::new(), ..filled("1", 1) }, "description"),
            (filled("", 1), "goal"),
            (filled("1", 0), "deadline"),
        ];
        for (draft, field) in cases {
            assert_eq!(draft.prepare(now), Err(CrowdfundError::MissingField(field)));
        }
    }

    #[test]
    fn test_zero_goal() {
        let now = Utc::now();
        for goal in ["0", "0.0", ".", "00"] {
            let err = filled(goal, 3).prepare(now).unwrap_err();
            assert!(err.is_validation(), "goal {:?} gave {:?}", goal, err);
        }
        assert_eq!(filled("0.000", 3).prepare(now), Err(CrowdfundError::ZeroGoal));
    }

    #[test]
    fn test_set_goal_filters_keystrokes() {
        let mut draft = CampaignDraft::default();
        assert!(draft.set_goal("2.5"));
        assert!(!draft.set_goal("2.5x"));
        assert_eq!(draft.goal, "2.5");
        assert!(draft.set_goal(""));
        assert_eq!(draft.goal, "");
    }

    #[test]
    fn test_deadline_days_clamped() {
        let mut draft = CampaignDraft::default();
        draft.set_deadline_days(-4);
        assert_eq!(draft.deadline_days, 1);
        draft.set_deadline_days(0);
        assert_eq!(draft.deadline_days, 1);
        draft.set_deadline_days(14);
        assert_eq!(draft.deadline_days, 14);
        draft.set_deadline_input("");
        assert_eq!(draft.deadline_days, 1);
        draft.set_deadline_input("21");
        assert_eq!(draft.deadline_days, 21);
    }

    #[test]
    fn test_params_serialize_goal_as_decimal() {
        let params = filled("1.5", 1).prepare(DateTime::from_timestamp(0, 0).unwrap()).unwrap();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["goal"], "1500000000000000000");
        assert_eq!(json["deadline"], 86_400);
    }

    #[test]
    fn test_campaign_decodes_from_bridge_json() {
        let campaign: Campaign = serde_json::from_str(
            r#"{
                "campaignAddress": "0x00000000000000000000000000000000000000c1",
                "owner": "0x707cD5894f028b29a4CD52054C721095Bf3D4b43",
                "name": "Garden",
                "creationTime": 1700000000
            }"#,
        )
        .unwrap();
        assert_eq!(campaign.name, "Garden");
        assert_eq!(campaign.created_at().unwrap().timestamp(), 1_700_000_000);
    }
}

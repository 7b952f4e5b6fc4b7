use serde::{Deserialize, Serialize};
use validator::Validate;

/// Server shard a player queues on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Ru,
    Tr,
}

/// Ranked ladder a standing belongs to
///
/// Only the solo ladder is matched against; upstream supplies the
/// solo-queue entry for each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueType {
    #[serde(rename = "RANKED_SOLO_5x5")]
    RankedSolo5x5,
    #[serde(rename = "RANKED_FLEX_SR")]
    RankedFlexSr,
}

/// Competitive tier bands, lowest to highest
///
/// The enumeration is closed: an unknown label fails deserialization at
/// the boundary instead of being defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Unranked,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Challenger,
}

/// Map position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Top,
    Jungle,
    Middle,
    Bottom,
    Support,
}

/// Voice chat stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoicePreference {
    Yes,
    No,
    Sometimes,
}

/// Age bracket shown on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "13-17")]
    Teen,
    #[serde(rename = "18-24")]
    YoungAdult,
    #[serde(rename = "25+")]
    Adult,
}

/// One ranked-ladder placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CompetitiveStanding {
    #[serde(rename = "queueType")]
    pub queue: QueueType,
    pub tier: Tier,
    /// Division within the tier, 1 (best) to 5 (worst). Apex tiers carry none.
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub division: Option<u8>,
}

impl CompetitiveStanding {
    /// Division with the league-only default applied: a standing known only
    /// by tier counts as the lowest division of that tier.
    pub fn effective_division(&self) -> u8 {
        self.division.unwrap_or(5)
    }
}

/// A player's acceptance constraints for a prospective duo partner
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Criteria {
    pub positions: Vec<Position>,
    #[serde(rename = "voiceChat")]
    pub voice_chat: Vec<VoicePreference>,
    #[serde(rename = "ageGroups")]
    pub age_groups: Vec<AgeGroup>,
    #[serde(rename = "ignoreLanguage", default)]
    pub ignore_language: bool,
}

/// Player profile with ladder and preference data
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Player {
    #[serde(rename = "playerId")]
    #[validate(length(min = 1))]
    pub player_id: String,
    pub name: String,
    pub region: Region,
    #[serde(rename = "voiceChat")]
    pub voice_chat: Vec<VoicePreference>,
    /// Lowercase language codes, e.g. "en", "de"
    pub languages: Vec<String>,
    #[serde(rename = "ageGroup")]
    pub age_group: AgeGroup,
    pub positions: Vec<Position>,
    #[validate(nested)]
    pub standing: CompetitiveStanding,
    #[validate(nested)]
    pub criteria: Criteria,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_division_default() {
        let standing = CompetitiveStanding {
            queue: QueueType::RankedSolo5x5,
            tier: Tier::Diamond,
            division: None,
        };
        assert_eq!(standing.effective_division(), 5);
    }

    #[test]
    fn test_effective_division_explicit() {
        let standing = CompetitiveStanding {
            queue: QueueType::RankedSolo5x5,
            tier: Tier::Gold,
            division: Some(2),
        };
        assert_eq!(standing.effective_division(), 2);
    }

    #[test]
    fn test_tier_labels_round_trip() {
        let json = serde_json::to_string(&Tier::Challenger).unwrap();
        assert_eq!(json, "\"CHALLENGER\"");

        let tier: Tier = serde_json::from_str("\"UNRANKED\"").unwrap();
        assert_eq!(tier, Tier::Unranked);
    }

    #[test]
    fn test_unknown_tier_label_rejected() {
        let result: Result<Tier, _> = serde_json::from_str("\"WOOD\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_division_out_of_range_rejected() {
        let standing = CompetitiveStanding {
            queue: QueueType::RankedSolo5x5,
            tier: Tier::Gold,
            division: Some(0),
        };
        assert!(standing.validate().is_err());

        let standing = CompetitiveStanding {
            queue: QueueType::RankedSolo5x5,
            tier: Tier::Gold,
            division: Some(6),
        };
        assert!(standing.validate().is_err());
    }
}

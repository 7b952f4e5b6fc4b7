use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Player;

/// Request to evaluate duo compatibility for one pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluatePairRequest {
    #[validate(nested)]
    pub player: Player,
    #[validate(nested)]
    pub candidate: Player,
}

/// Request to filter a candidate list down to the compatible ones
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FilterCandidatesRequest {
    #[validate(nested)]
    pub player: Player,
    #[validate(nested)]
    pub candidates: Vec<Player>,
}

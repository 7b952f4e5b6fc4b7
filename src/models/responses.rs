use serde::{Deserialize, Serialize};

/// Response for the pair evaluation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatePairResponse {
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub compatible: bool,
}

/// Response for the candidate filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCandidatesResponse {
    #[serde(rename = "compatibleIds")]
    pub compatible_ids: Vec<String>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

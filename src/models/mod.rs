// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeGroup, CompetitiveStanding, Criteria, Player, Position, QueueType, Region, Tier,
    VoicePreference,
};
pub use requests::{EvaluatePairRequest, FilterCandidatesRequest};
pub use responses::{
    ErrorResponse, EvaluatePairResponse, FilterCandidatesResponse, HealthResponse,
};

//! Duo Algo - Duo compatibility service for the RiftDuo ranked team finder
//!
//! This library provides the compatibility decision core used by the
//! RiftDuo duo finder: a layered predicate chain over ladder standings,
//! declared partner criteria, and shared-context checks, plus the thin
//! HTTP surface wrapped around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{queue_compatible, satisfies, MatchEvaluator};
pub use crate::models::{
    AgeGroup, CompetitiveStanding, Criteria, Player, Position, QueueType, Region, Tier,
    VoicePreference,
};

use crate::core::{
    criteria::{intersects, satisfies},
    rank::queue_compatible,
};
use crate::models::Player;

/// Pair evaluator - combines the compatibility gates into one verdict
///
/// # Gates
/// 1. Shared language, unless both sides opted out of the language check
/// 2. No self-matching
/// 3. Same region and queue-compatible ladder standings
/// 4. Player's criteria accept the candidate
/// 5. Candidate's criteria accept the player
///
/// Every gate short-circuits, and the whole chain is symmetric in its
/// arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEvaluator;

impl MatchEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether two players may queue together and mutually accept
    /// each other.
    pub fn is_match(&self, player: &Player, candidate: &Player) -> bool {
        let language_ok = intersects(&player.languages, &candidate.languages)
            || (player.criteria.ignore_language && candidate.criteria.ignore_language);
        if !language_ok {
            return false;
        }

        if player.player_id == candidate.player_id {
            return false;
        }

        if player.region != candidate.region
            || !queue_compatible(player.standing, candidate.standing)
        {
            return false;
        }

        satisfies(&player.criteria, candidate) && satisfies(&candidate.criteria, player)
    }

    /// Evaluate one player against a list of candidates, keeping the
    /// compatible ones in input order.
    pub fn filter_candidates<'a>(
        &self,
        player: &Player,
        candidates: &'a [Player],
    ) -> Vec<&'a Player> {
        candidates
            .iter()
            .filter(|candidate| self.is_match(player, candidate))
            .collect()
    }
}

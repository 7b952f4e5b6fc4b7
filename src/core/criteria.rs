use crate::models::{Criteria, Player};

/// Check whether two small preference sets share at least one value
#[inline]
pub fn intersects<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().any(|value| b.contains(value))
}

/// Check whether one side's declared criteria accept the other side's profile
///
/// Voice and position are intersection tests between what the criteria
/// accept and what the profile offers; age group is plain membership.
#[inline]
pub fn satisfies(criteria: &Criteria, profile: &Player) -> bool {
    if !intersects(&criteria.voice_chat, &profile.voice_chat) {
        return false;
    }

    if !intersects(&criteria.positions, &profile.positions) {
        return false;
    }

    criteria.age_groups.contains(&profile.age_group)
}

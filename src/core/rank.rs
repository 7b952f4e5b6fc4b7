use crate::models::{CompetitiveStanding, Tier};

/// Ladder ordinal for a tier
///
/// UNRANKED sits level with SILVER, and the apex tiers MASTER and
/// CHALLENGER share one rung. The match is exhaustive over the closed
/// tier enumeration.
#[inline]
pub fn tier_ordinal(tier: Tier) -> u8 {
    match tier {
        Tier::Bronze => 1,
        Tier::Unranked | Tier::Silver => 2,
        Tier::Gold => 3,
        Tier::Platinum => 4,
        Tier::Diamond => 5,
        Tier::Master | Tier::Challenger => 6,
    }
}

/// Tiers where a one-tier gap queues freely, with no division-level checks
#[inline]
fn is_loose_tier(tier: Tier) -> bool {
    matches!(
        tier,
        Tier::Unranked | Tier::Bronze | Tier::Silver | Tier::Gold | Tier::Platinum
    )
}

/// Order two standings as (high, low)
///
/// Greater tier ordinal wins; on an ordinal tie the better (lower)
/// effective division wins. On a full tie the first argument is returned
/// as high, a stable default rather than a ranking claim.
pub fn order_standings(
    a: CompetitiveStanding,
    b: CompetitiveStanding,
) -> (CompetitiveStanding, CompetitiveStanding) {
    let ord_a = tier_ordinal(a.tier);
    let ord_b = tier_ordinal(b.tier);

    if ord_a > ord_b {
        (a, b)
    } else if ord_b > ord_a {
        (b, a)
    } else if b.effective_division() < a.effective_division() {
        (b, a)
    } else {
        (a, b)
    }
}

/// Decide whether two ladder standings are close enough to queue together
///
/// Same tier always queues, a one-tier gap queues freely up through
/// PLATINUM, and the top of the ladder falls through to the
/// division-level restrictions. DIAMOND I is restricted even against its
/// own tier, so it is checked before the same-tier rule.
pub fn queue_compatible(a: CompetitiveStanding, b: CompetitiveStanding) -> bool {
    let (high, low) = order_standings(a, b);
    let tier_diff = tier_ordinal(high.tier) - tier_ordinal(low.tier);

    // Only explicit division-1 diamonds take this branch: an absent
    // division reads as 5.
    if high.tier == Tier::Diamond && high.effective_division() == 1 {
        return rank_compatible(high, low);
    }

    if tier_diff == 0 {
        return true;
    }

    if tier_diff == 1 {
        if is_loose_tier(high.tier) {
            return true;
        }
        return rank_compatible(high, low);
    }

    false
}

/// Division-level restrictions near the top of the ladder
///
/// Mirrors the duo eligibility table published for ranked play: the apex
/// tiers only accept partners placed division 3 or better, and each
/// DIAMOND division carries its own band of acceptable partners.
fn rank_compatible(high: CompetitiveStanding, low: CompetitiveStanding) -> bool {
    debug_assert!(
        !is_loose_tier(high.tier),
        "division restrictions only apply from DIAMOND upward, got {:?}",
        high.tier
    );

    let low_division = low.effective_division();

    if matches!(high.tier, Tier::Master | Tier::Challenger) {
        return (1..=3).contains(&low_division);
    }

    match high.effective_division() {
        1 => low.tier == high.tier && (1..=4).contains(&low_division),
        // DIAMOND II never reaches down into PLATINUM.
        2 => false,
        3 => low_division == 1,
        4 => (1..=2).contains(&low_division),
        5 => (1..=3).contains(&low_division),
        other => unreachable!("division {} outside the 1..=5 ladder range", other),
    }
}

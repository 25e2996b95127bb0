//! Tier-biased choice between the generated candidates.

use std::cmp::Ordering;

use pulse_core::{Decision, DispatchPlan, Tier};

use crate::candidates::Candidate;

/// Scores closer than this are treated as a tie.
const SCORE_TOLERANCE: f64 = 0.01;

/// Solo penalty in the normal tier once a bundle is on the table.
const NORMAL_BUNDLE_BIAS: f64 = 5.0;

/// Solo penalty in the eco tier once any alternative is on the table.
const ECO_ALTERNATIVE_BIAS: f64 = 8.0;

/// Pick the winning plan from the always-present solo candidate and any
/// alternatives.
///
/// Candidates are compared pairwise in generation order and the incumbent is
/// only replaced by a strictly better challenger, so equal candidates keep
/// the earlier one.
pub(crate) fn select(
    tier: Tier,
    solo: Candidate,
    alternatives: impl IntoIterator<Item = Candidate>,
) -> DispatchPlan {
    let alternatives: Vec<Candidate> = alternatives.into_iter().collect();
    let bias = solo_bias(tier, &alternatives);
    let solo_score = adjusted(solo.score, bias);

    let (winner, _) = alternatives
        .into_iter()
        .map(|candidate| {
            let score = candidate.score;
            (candidate.plan, score)
        })
        .fold((solo.plan, solo_score), |best, challenger| {
            if compare(&challenger, &best) == Ordering::Less {
                challenger
            } else {
                best
            }
        });
    log::debug!(
        "selected {:?} plan for tier {tier} with courier {}",
        winner.decision,
        winner.courier_id
    );
    winner
}

/// Penalty added to the solo score so the tier's preferred alternative wins
/// close calls.
fn solo_bias(tier: Tier, alternatives: &[Candidate]) -> f64 {
    let has = |decision: Decision| alternatives.iter().any(|c| c.plan.decision == decision);
    match tier {
        Tier::Normal if has(Decision::Bundle) => NORMAL_BUNDLE_BIAS,
        Tier::Eco if has(Decision::Bundle) || has(Decision::Hub) => ECO_ALTERNATIVE_BIAS,
        Tier::Fast | Tier::Normal | Tier::Eco => 0.0,
    }
}

#[expect(clippy::float_arithmetic, reason = "score adjustment")]
fn adjusted(score: f64, bias: f64) -> f64 {
    score + bias
}

/// Order two scored plans: score first, then ETA, then distance.
#[expect(clippy::float_arithmetic, reason = "tolerance comparison of scores")]
fn compare(lhs: &(DispatchPlan, f64), rhs: &(DispatchPlan, f64)) -> Ordering {
    let (lhs_plan, lhs_score) = lhs;
    let (rhs_plan, rhs_score) = rhs;
    if (lhs_score - rhs_score).abs() > SCORE_TOLERANCE {
        return lhs_score.total_cmp(rhs_score);
    }
    lhs_plan.eta_minutes.cmp(&rhs_plan.eta_minutes).then_with(|| {
        lhs_plan
            .metrics
            .total_distance_km
            .total_cmp(&rhs_plan.metrics.total_distance_km)
    })
}

//! Relay through a fixed hub: courier → pickup → hub → drop-off.
//!
//! A hub plan is only worth proposing when it beats the solo eco score by a
//! clear margin, so candidates are filtered against the solo baseline before
//! the cheapest survivor is kept.

use pulse_core::geometry::{distance_km, road_km, travel_minutes};
use pulse_core::{Decision, DispatchPlan, Hub, PlanMetrics};

use super::{Candidate, CandidateContext, Estimate};

/// Eco-score margin a hub must win by over the solo plan.
const HUB_MIN_IMPROVEMENT: f64 = 1.0;

/// Best qualifying hub relay among `hubs`, or `None` when the tier does not
/// relay or no hub improves on the solo baseline.
#[expect(clippy::float_arithmetic, reason = "improvement threshold")]
pub(crate) fn best_hub(
    ctx: &CandidateContext<'_>,
    hubs: &[Hub],
    solo_score: f64,
    solo_eta: u32,
) -> Option<Candidate> {
    if !ctx.tier.allows_hub() {
        return None;
    }
    let threshold = solo_score - HUB_MIN_IMPROVEMENT;
    let best = hubs
        .iter()
        .map(|hub| (hub, evaluate(ctx, hub)))
        .filter(|(hub, estimate)| {
            let score = estimate.eco_score();
            log::debug!(
                "hub {} for order {}: eta {} min, score {score:.2} against {threshold:.2}",
                hub.id,
                ctx.order.id,
                estimate.eta_minutes
            );
            score <= threshold
        })
        .fold(None, |best: Option<(&Hub, Estimate)>, (hub, estimate)| {
            match best {
                Some((_, current)) if estimate.eco_score() >= current.eco_score() => best,
                _ => Some((hub, estimate)),
            }
        });

    best.map(|(hub, estimate)| into_candidate(ctx, hub, &estimate, solo_eta))
}

#[expect(clippy::float_arithmetic, reason = "sums leg durations in minutes")]
fn evaluate(ctx: &CandidateContext<'_>, hub: &Hub) -> Estimate {
    let config = ctx.config;
    let legs = [
        distance_km(ctx.courier.location, ctx.order.pickup),
        distance_km(ctx.order.pickup, hub.location),
        distance_km(hub.location, ctx.order.drop),
    ];
    let raw_minutes = config.prep_minutes
        + legs.iter().copied().map(travel_minutes).sum::<f64>()
        + config.pickup_service_minutes
        + config.hub_handling_minutes
        + config.drop_service_minutes;
    ctx.estimate(raw_minutes, road_km(&legs))
}

fn into_candidate(
    ctx: &CandidateContext<'_>,
    hub: &Hub,
    estimate: &Estimate,
    solo_eta: u32,
) -> Candidate {
    Candidate {
        plan: DispatchPlan {
            tier: ctx.tier,
            decision: Decision::Hub,
            courier_id: ctx.courier.id.clone(),
            bundled_order_ids: Vec::new(),
            hub_id: Some(hub.id.to_owned()),
            eta_minutes: estimate.eta_minutes,
            fee_qr: ctx.tier.config().fee_qr,
            explanation: vec![
                format!(
                    "Eco selected → efficiency mode (target {} min).",
                    ctx.tier.config().target_eta_minutes
                ),
                format!(
                    "Hub relay chosen: {} improved distance-weighted eco score.",
                    hub.name
                ),
                format!(
                    "ETA {} min • late risk {:.2}.",
                    estimate.eta_minutes, estimate.late_risk
                ),
            ],
            route_steps: vec![
                "Courier → pickup".to_owned(),
                format!("Relay via hub: {}", hub.name),
                "Hub → drop-off".to_owned(),
            ],
            metrics: PlanMetrics {
                detour_minutes: estimate.detour_over(solo_eta),
                late_risk_score: estimate.late_risk,
                total_distance_km: estimate.display_km(),
            },
        },
        score: estimate.eco_score(),
    }
}

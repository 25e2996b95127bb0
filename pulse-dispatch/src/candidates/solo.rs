//! Direct courier → pickup → drop-off delivery. Always produced.

use pulse_core::geometry::{distance_km, road_km, travel_minutes};
use pulse_core::{Decision, DispatchPlan, PlanMetrics, Tier};

use super::{Candidate, CandidateContext, Estimate};

/// Build the solo candidate for the proposed courier.
#[expect(clippy::float_arithmetic, reason = "sums leg durations in minutes")]
pub(crate) fn candidate(ctx: &CandidateContext<'_>) -> Candidate {
    let config = ctx.config;
    let to_pickup = distance_km(ctx.courier.location, ctx.order.pickup);
    let to_drop = distance_km(ctx.order.pickup, ctx.order.drop);
    let raw_minutes = config.prep_minutes
        + travel_minutes(to_pickup)
        + config.pickup_service_minutes
        + travel_minutes(to_drop)
        + config.drop_service_minutes;
    let estimate = ctx.estimate(raw_minutes, road_km(&[to_pickup, to_drop]));
    let score = score(ctx.tier, &estimate);
    log::debug!(
        "solo candidate for order {}: eta {} min, risk {:.2}, score {score:.2}",
        ctx.order.id,
        estimate.eta_minutes,
        estimate.late_risk
    );

    Candidate {
        plan: DispatchPlan {
            tier: ctx.tier,
            decision: Decision::Solo,
            courier_id: ctx.courier.id.clone(),
            bundled_order_ids: Vec::new(),
            hub_id: None,
            eta_minutes: estimate.eta_minutes,
            fee_qr: ctx.tier.config().fee_qr,
            explanation: explanation(ctx.tier, &estimate),
            route_steps: vec!["Courier → pickup".to_owned(), "Pickup → drop-off".to_owned()],
            metrics: PlanMetrics {
                detour_minutes: 0,
                late_risk_score: estimate.late_risk,
                total_distance_km: estimate.display_km(),
            },
        },
        score,
    }
}

/// Tier-dependent solo score: SLA-weighted for fast and normal, eco score
/// otherwise.
#[expect(clippy::float_arithmetic, reason = "weighted sum of ETA and risk")]
fn score(tier: Tier, estimate: &Estimate) -> f64 {
    let eta = f64::from(estimate.eta_minutes);
    match tier {
        Tier::Fast => eta + 6.0 * estimate.late_risk,
        Tier::Normal => eta + 4.0 * estimate.late_risk,
        Tier::Eco => estimate.eco_score(),
    }
}

fn explanation(tier: Tier, estimate: &Estimate) -> Vec<String> {
    let target = tier.config().target_eta_minutes;
    let (headline, reason) = match tier {
        Tier::Fast => (
            format!("Fast selected → protect SLA (target {target} min)."),
            "Solo dispatch only (no bundling/hubs).",
        ),
        Tier::Normal => (
            "Normal selected → bundling attempted (size 2).".to_owned(),
            "No better partner within caps → solo.",
        ),
        Tier::Eco => (
            format!("Eco selected → efficiency mode (target {target} min)."),
            "No better bundle/hub option → solo.",
        ),
    };
    vec![
        headline,
        reason.to_owned(),
        format!(
            "ETA {} min • late risk {:.2}.",
            estimate.eta_minutes, estimate.late_risk
        ),
    ]
}

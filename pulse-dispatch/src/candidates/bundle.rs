//! Two-order bundles with one unassigned in-flight order.
//!
//! The bundled route is courier → new pickup → partner pickup → new drop-off
//! → partner drop-off. Partners are pre-filtered by proximity, then every
//! survivor is timed, checked against the tier's [`BundleCaps`] and scored.
//! The best feasible partner wins; ties keep the first partner found.

use pulse_core::geometry::{distance_km, road_km, travel_minutes};
use pulse_core::{BundleCaps, Decision, DispatchPlan, Order, PlanMetrics, Tier};

use super::{Candidate, CandidateContext, Estimate};

/// Flat penalty for the extra stop on normal-tier bundles.
const EXTRA_STOP_PENALTY: f64 = 2.0;

/// Weight of drop-off separation in the partner pre-filter.
const DROP_PROXIMITY_WEIGHT: f64 = 0.5;

/// A feasible partner and the metrics of the combined route.
#[derive(Debug, Clone, Copy)]
struct BundleOption<'a> {
    partner: &'a Order,
    estimate: Estimate,
    detour_minutes: u32,
    score: f64,
}

/// Build the best bundle candidate, if the tier bundles and any partner is
/// feasible.
pub(crate) fn best_bundle(
    ctx: &CandidateContext<'_>,
    all_orders: &[Order],
    solo_eta: u32,
) -> Option<Candidate> {
    let caps = ctx.tier.bundle_caps()?;
    let best = partner_pool(ctx.order, all_orders, ctx.config.partner_pool_size)
        .into_iter()
        .filter_map(|partner| evaluate(ctx, partner, solo_eta, caps))
        .fold(None, |best: Option<BundleOption<'_>>, option| match best {
            Some(current) if option.score >= current.score || option.score.is_nan() => {
                Some(current)
            }
            _ => Some(option),
        });

    let Some(option) = best else {
        log::debug!("no feasible bundle partner for order {}", ctx.order.id);
        return None;
    };
    log::debug!(
        "bundle candidate for order {} with {}: eta {} min, detour {} min, score {:.2}",
        ctx.order.id,
        option.partner.id,
        option.estimate.eta_minutes,
        option.detour_minutes,
        option.score
    );
    Some(into_candidate(ctx, &option))
}

/// Unassigned orders other than `order`, nearest first, at most `limit`.
///
/// Proximity is pickup separation plus half the drop-off separation.
#[expect(clippy::float_arithmetic, reason = "weighted proximity score")]
pub(crate) fn partner_pool<'a>(
    order: &Order,
    all_orders: &'a [Order],
    limit: usize,
) -> Vec<&'a Order> {
    let mut ranked: Vec<(f64, &Order)> = all_orders
        .iter()
        .filter(|other| other.id != order.id && !other.assigned)
        .map(|other| {
            let proximity = distance_km(order.pickup, other.pickup)
                + DROP_PROXIMITY_WEIGHT * distance_km(order.drop, other.drop);
            (proximity, other)
        })
        .collect();
    ranked.sort_by(|(lhs, _), (rhs, _)| lhs.total_cmp(rhs));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, other)| other).collect()
}

#[expect(clippy::float_arithmetic, reason = "sums leg durations and scores")]
fn evaluate<'a>(
    ctx: &CandidateContext<'_>,
    partner: &'a Order,
    solo_eta: u32,
    caps: BundleCaps,
) -> Option<BundleOption<'a>> {
    let config = ctx.config;
    let legs = [
        distance_km(ctx.courier.location, ctx.order.pickup),
        distance_km(ctx.order.pickup, partner.pickup),
        distance_km(partner.pickup, ctx.order.drop),
        distance_km(ctx.order.drop, partner.drop),
    ];
    let eco_hold = if ctx.tier == Tier::Eco {
        config.eco_hold_minutes
    } else {
        0.0
    };
    let raw_minutes = config.prep_minutes
        + legs.iter().copied().map(travel_minutes).sum::<f64>()
        + 2.0 * config.pickup_service_minutes
        + 2.0 * config.drop_service_minutes
        + eco_hold;
    let estimate = ctx.estimate(raw_minutes, road_km(&legs));
    let detour_minutes = estimate.detour_over(solo_eta);

    if detour_minutes > caps.max_detour_minutes || estimate.late_risk > caps.max_late_risk {
        log::debug!(
            "bundle with {} rejected: detour {detour_minutes} min, risk {:.2}",
            partner.id,
            estimate.late_risk
        );
        return None;
    }

    let score = match ctx.tier {
        Tier::Eco => estimate.eco_score(),
        Tier::Fast | Tier::Normal => {
            f64::from(estimate.eta_minutes)
                + 4.0 * estimate.late_risk
                + f64::from(detour_minutes)
                + EXTRA_STOP_PENALTY
        }
    };
    Some(BundleOption {
        partner,
        estimate,
        detour_minutes,
        score,
    })
}

fn into_candidate(ctx: &CandidateContext<'_>, option: &BundleOption<'_>) -> Candidate {
    let partner_id = option.partner.id.clone();
    let estimate = option.estimate;
    let status = format!(
        "ETA {} min • late risk {:.2}.",
        estimate.eta_minutes, estimate.late_risk
    );
    let explanation = if ctx.tier == Tier::Eco {
        vec![
            format!(
                "Eco selected → efficiency mode (target {} min).",
                ctx.tier.config().target_eta_minutes
            ),
            format!(
                "Eco hold (+{} min) used to form bundle.",
                ctx.config.eco_hold_minutes
            ),
            format!("Bundled with order {partner_id}."),
            status,
        ]
    } else {
        vec![
            "Normal selected → bundling allowed (size 2).".to_owned(),
            format!(
                "Bundled with order {partner_id} • detour +{} min.",
                option.detour_minutes
            ),
            status,
        ]
    };

    Candidate {
        plan: DispatchPlan {
            tier: ctx.tier,
            decision: Decision::Bundle,
            courier_id: ctx.courier.id.clone(),
            bundled_order_ids: vec![partner_id.clone()],
            hub_id: None,
            eta_minutes: estimate.eta_minutes,
            fee_qr: ctx.tier.config().fee_qr,
            explanation,
            route_steps: vec![
                "Courier → pickup".to_owned(),
                format!("Pickup partner order {partner_id}"),
                format!("Drop-off order {}", ctx.order.id),
                format!("Drop-off order {partner_id}"),
            ],
            metrics: PlanMetrics {
                detour_minutes: option.detour_minutes,
                late_risk_score: estimate.late_risk,
                total_distance_km: estimate.display_km(),
            },
        },
        score: option.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DispatchConfig;
    use pulse_core::test_support::{AL_SADD, available_courier, reference_order};
    use pulse_core::{Courier, lat_lon};
    use rstest::{fixture, rstest};

    #[fixture]
    fn courier() -> Courier {
        available_courier("C1", AL_SADD, 2)
    }

    fn context<'a>(
        tier: Tier,
        order: &'a Order,
        courier: &'a Courier,
        config: &'a DispatchConfig,
    ) -> CandidateContext<'a> {
        CandidateContext {
            tier,
            order,
            courier,
            promised_minutes: f64::from(tier.config().target_eta_minutes),
            config,
        }
    }

    fn nearby_partner(id: &str) -> Order {
        Order::new(id, lat_lon(25.2890, 51.4990), lat_lon(25.3310, 51.5320))
    }

    #[rstest]
    fn pool_skips_self_and_assigned_orders() {
        let order = reference_order();
        let others = vec![
            reference_order(),
            nearby_partner("TAKEN").assigned(),
            nearby_partner("FREE"),
        ];
        let pool = partner_pool(&order, &others, 15);
        let ids: Vec<&str> = pool.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["FREE"]);
    }

    #[rstest]
    fn pool_ranks_by_proximity_and_truncates() {
        let order = reference_order();
        let others = vec![
            Order::new("FAR", lat_lon(25.40, 51.40), lat_lon(25.45, 51.45)),
            nearby_partner("NEAR"),
            Order::new("MID", lat_lon(25.30, 51.50), lat_lon(25.33, 51.53)),
        ];
        let pool = partner_pool(&order, &others, 2);
        let ids: Vec<&str> = pool.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["NEAR", "MID"]);
    }

    #[rstest]
    fn fast_tier_never_bundles(courier: Courier) {
        let order = reference_order();
        let config = DispatchConfig::default();
        let ctx = context(Tier::Fast, &order, &courier, &config);
        assert!(best_bundle(&ctx, &[nearby_partner("P1")], 30).is_none());
    }

    #[rstest]
    fn eco_bundle_adds_hold_and_eco_score(courier: Courier) {
        let order = reference_order();
        let config = DispatchConfig::default();
        let ctx = context(Tier::Eco, &order, &courier, &config);
        let bundle = best_bundle(&ctx, &[nearby_partner("P1")], 35).expect("feasible bundle");
        // 34.52 raw minutes plus the 2 minute eco hold.
        assert_eq!(bundle.plan.eta_minutes, 37);
        assert_eq!(bundle.plan.metrics.detour_minutes, 2);
        assert_eq!(bundle.plan.metrics.total_distance_km, 7.71);
        assert_eq!(bundle.plan.bundled_order_ids, vec!["P1".to_owned()]);
        assert!((bundle.score - 30.9264).abs() < 1e-3, "score {}", bundle.score);
    }

    #[rstest]
    fn normal_bundle_pays_detour_and_stop_penalty(courier: Courier) {
        let order = reference_order();
        let config = DispatchConfig::default();
        let ctx = context(Tier::Normal, &order, &courier, &config);
        let bundle = best_bundle(&ctx, &[nearby_partner("P1")], 30).expect("feasible bundle");
        assert_eq!(bundle.plan.eta_minutes, 35);
        assert_eq!(bundle.plan.metrics.detour_minutes, 5);
        assert!((bundle.score - 42.4).abs() < 1e-9, "score {}", bundle.score);
        assert_eq!(bundle.plan.route_steps.len(), 4);
    }

    #[rstest]
    fn detour_over_cap_is_rejected(courier: Courier) {
        let order = reference_order();
        let config = DispatchConfig::default();
        let ctx = context(Tier::Normal, &order, &courier, &config);
        // Partner drop-off well past West Bay adds far more than 10 minutes.
        let partner = Order::new(
            "LUSAIL",
            lat_lon(25.2890, 51.4990),
            lat_lon(25.4202, 51.5287),
        );
        assert!(best_bundle(&ctx, &[partner], 30).is_none());
    }

    #[rstest]
    fn ties_keep_the_first_partner(courier: Courier) {
        let order = reference_order();
        let config = DispatchConfig::default();
        let ctx = context(Tier::Normal, &order, &courier, &config);
        let partners = [nearby_partner("FIRST"), nearby_partner("SECOND")];
        let bundle = best_bundle(&ctx, &partners, 30).expect("feasible bundle");
        assert_eq!(bundle.plan.bundled_order_ids, vec!["FIRST".to_owned()]);
    }
}

//! Test-only fixtures and a fixed-answer [`Dispatcher`] used by unit and
//! behaviour tests across the workspace.

use geo::Coord;

use crate::{
    Courier, CourierStatus, Decision, DispatchPlan, DispatchRequest, Dispatcher, Order,
    PlanMetrics, Tier, lat_lon,
};

/// Pickup used by the reference Al Sadd → West Bay order.
pub const AL_SADD: Coord<f64> = lat_lon(25.2859, 51.4965);

/// Drop-off used by the reference Al Sadd → West Bay order.
pub const WEST_BAY: Coord<f64> = lat_lon(25.3295, 51.5298);

/// The reference order from Al Sadd to West Bay.
#[must_use]
pub fn reference_order() -> Order {
    Order::new("NEW", AL_SADD, WEST_BAY)
}

/// An idle courier with room for `capacity` orders.
#[must_use]
pub fn available_courier(id: &str, location: Coord<f64>, capacity: u32) -> Courier {
    Courier::new(id, location, CourierStatus::Available, capacity, 0)
}

/// A courier that is offline.
#[must_use]
pub fn offline_courier(id: &str, location: Coord<f64>) -> Courier {
    Courier::new(id, location, CourierStatus::Offline, 1, 0)
}

/// Build a request from its parts.
#[must_use]
pub fn request(
    tier: Tier,
    new_order: Order,
    all_orders: Vec<Order>,
    couriers: Vec<Courier>,
) -> DispatchRequest {
    DispatchRequest {
        tier,
        new_order,
        all_orders,
        couriers,
    }
}

/// A solo plan with the given courier and ETA, for stubbing dispatchers.
#[must_use]
pub fn solo_plan(tier: Tier, courier_id: &str, eta_minutes: u32) -> DispatchPlan {
    DispatchPlan {
        tier,
        decision: Decision::Solo,
        courier_id: courier_id.to_owned(),
        bundled_order_ids: Vec::new(),
        hub_id: None,
        eta_minutes,
        fee_qr: tier.config().fee_qr,
        explanation: vec!["stub".to_owned()],
        route_steps: vec!["Courier → pickup".to_owned(), "Pickup → drop-off".to_owned()],
        metrics: PlanMetrics {
            detour_minutes: 0,
            late_risk_score: 0.10,
            total_distance_km: 1.0,
        },
    }
}

/// `Dispatcher` that answers every request with the same plan, retagged
/// with the request's tier.
#[derive(Debug, Clone)]
pub struct StaticDispatcher {
    plan: DispatchPlan,
}

impl StaticDispatcher {
    /// Answer every request with `plan`.
    #[must_use]
    pub const fn new(plan: DispatchPlan) -> Self {
        Self { plan }
    }
}

impl Dispatcher for StaticDispatcher {
    fn dispatch(&self, request: &DispatchRequest) -> DispatchPlan {
        DispatchPlan {
            tier: request.tier,
            ..self.plan.clone()
        }
    }
}

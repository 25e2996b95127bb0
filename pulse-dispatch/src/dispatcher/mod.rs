//! `PulseDispatcher`, the default [`Dispatcher`] implementation.
//!
//! One call runs the whole pipeline for a single new order: shortlist the
//! couriers, build the solo plan and the tier's alternatives for the nearest
//! courier, then let the selector pick the winner.

use pulse_core::{DispatchPlan, DispatchRequest, Dispatcher, HUBS};

use crate::candidates::{CandidateContext, bundle, hub, solo};
use crate::selector;
use crate::shortlist::Shortlist;

/// Tunable sizes and service times for [`PulseDispatcher`].
///
/// The defaults reproduce the production policy; tests and experiments can
/// override individual fields with struct update syntax.
///
/// # Examples
/// ```rust
/// use pulse_dispatch::DispatchConfig;
///
/// let config = DispatchConfig {
///     shortlist_size: 5,
///     ..DispatchConfig::default()
/// };
/// assert_eq!(config.fallback_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchConfig {
    /// Couriers with spare capacity kept on the primary shortlist.
    pub shortlist_size: usize,
    /// Online couriers kept when nobody has spare capacity.
    pub fallback_size: usize,
    /// Nearest in-flight orders evaluated as bundle partners.
    pub partner_pool_size: usize,
    /// Merchant preparation time, applied once per route.
    pub prep_minutes: f64,
    /// Time spent at each pickup.
    pub pickup_service_minutes: f64,
    /// Time spent at each drop-off.
    pub drop_service_minutes: f64,
    /// Handling delay when an order is relayed through a hub.
    pub hub_handling_minutes: f64,
    /// Matching window reserved when forming eco bundles.
    pub eco_hold_minutes: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            shortlist_size: 10,
            fallback_size: 20,
            partner_pool_size: 15,
            prep_minutes: 10.0,
            pickup_service_minutes: 2.0,
            drop_service_minutes: 2.0,
            hub_handling_minutes: 5.0,
            eco_hold_minutes: 2.0,
        }
    }
}

/// Rule-based dispatcher choosing between solo, bundle and hub fulfilment.
///
/// The dispatcher holds no state besides its configuration, so a single
/// instance can serve concurrent requests.
///
/// # Examples
/// ```rust
/// use pulse_core::{Courier, CourierStatus, Decision, DispatchRequest, Dispatcher, Order, Tier, lat_lon};
/// use pulse_dispatch::PulseDispatcher;
///
/// let pickup = lat_lon(25.2859, 51.4965);
/// let request = DispatchRequest {
///     tier: Tier::Fast,
///     new_order: Order::new("NEW", pickup, lat_lon(25.3295, 51.5298)),
///     all_orders: Vec::new(),
///     couriers: vec![Courier::new("C1", pickup, CourierStatus::Available, 1, 0)],
/// };
/// let plan = PulseDispatcher::new().dispatch(&request);
/// assert_eq!(plan.decision, Decision::Solo);
/// assert_eq!(plan.courier_id, "C1");
/// assert_eq!(plan.fee_qr, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PulseDispatcher {
    config: DispatchConfig,
}

impl PulseDispatcher {
    /// Construct a dispatcher with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DispatchConfig::default())
    }

    /// Construct a dispatcher with explicit configuration.
    #[must_use]
    pub const fn with_config(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }
}

impl Dispatcher for PulseDispatcher {
    fn dispatch(&self, request: &DispatchRequest) -> DispatchPlan {
        let order = &request.new_order;
        let shortlist = Shortlist::build(order, &request.couriers, &self.config);
        let Some(courier) = shortlist.proposed() else {
            log::warn!(
                "no online courier for order {}; returning queue fallback",
                order.id
            );
            return DispatchPlan::no_courier(request.tier);
        };
        log::debug!(
            "order {}: proposing courier {} from {} shortlisted (fallback: {})",
            order.id,
            courier.id,
            shortlist.couriers.len(),
            shortlist.fallback
        );

        let ctx = CandidateContext {
            tier: request.tier,
            order,
            courier,
            promised_minutes: request.promised_minutes(),
            config: &self.config,
        };
        let solo = solo::candidate(&ctx);
        let bundle = bundle::best_bundle(&ctx, &request.all_orders, solo.plan.eta_minutes);
        let hub = hub::best_hub(&ctx, &HUBS, solo.score, solo.plan.eta_minutes);
        selector::select(request.tier, solo, bundle.into_iter().chain(hub))
    }
}

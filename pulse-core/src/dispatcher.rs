use crate::{Courier, DispatchPlan, Order, Tier};

/// Inputs for one dispatch decision.
///
/// `all_orders` may include `new_order` itself; engines must skip it by id.
/// The JSON form carries coordinates as `geo` `{x: lon, y: lat}` pairs, as
/// documented on [`Order`].
///
/// # Examples
/// ```rust
/// use pulse_core::{DispatchRequest, Order, Tier, lat_lon};
///
/// let request = DispatchRequest {
///     tier: Tier::Normal,
///     new_order: Order::new("NEW", lat_lon(25.2859, 51.4965), lat_lon(25.32, 51.525)),
///     all_orders: Vec::new(),
///     couriers: Vec::new(),
/// };
/// assert_eq!(request.promised_minutes(), 45.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchRequest {
    /// Service tier requested by the customer.
    pub tier: Tier,
    /// The order to place.
    pub new_order: Order,
    /// In-flight orders that may be bundled with the new one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub all_orders: Vec<Order>,
    /// Fleet snapshot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub couriers: Vec<Courier>,
}

impl DispatchRequest {
    /// Promised minutes for the new order, defaulting to the tier target.
    #[must_use]
    pub fn promised_minutes(&self) -> f64 {
        self.new_order
            .promised_or(f64::from(self.tier.config().target_eta_minutes))
    }
}

/// Decide how to fulfil a new order.
///
/// Dispatching is infallible: every expected business outcome, including an
/// empty fleet, is expressed as a [`DispatchPlan`]. Implementations must be
/// pure functions of the request and `Send + Sync` so independent orders can
/// be dispatched concurrently.
pub trait Dispatcher: Send + Sync {
    /// Produce the plan for `request`.
    fn dispatch(&self, request: &DispatchRequest) -> DispatchPlan;
}

//! Couriers and their availability.

use geo::Coord;

/// Courier availability as reported by the fleet feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CourierStatus {
    /// Idle and ready for work.
    #[default]
    Available,
    /// Carrying orders.
    Busy,
    /// Not taking work.
    Offline,
    /// About to finish current work.
    FreeSoon,
}

/// A courier that may be proposed for a new order.
///
/// # Examples
/// ```
/// use pulse_core::{Courier, CourierStatus, lat_lon};
///
/// let courier = Courier::new("C-01", lat_lon(25.28, 51.50), CourierStatus::Available, 2, 1);
/// assert!(courier.can_take_new_order());
/// assert!(!courier.clone().with_current_orders(2).can_take_new_order());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Courier {
    /// Unique courier identifier.
    pub id: String,
    /// Current position.
    pub location: Coord<f64>,
    /// Reported availability.
    pub status: CourierStatus,
    /// Maximum concurrent orders.
    pub capacity: u32,
    /// Orders currently carried.
    pub current_orders: u32,
}

impl Courier {
    /// Construct a courier.
    pub fn new(
        id: impl Into<String>,
        location: Coord<f64>,
        status: CourierStatus,
        capacity: u32,
        current_orders: u32,
    ) -> Self {
        Self {
            id: id.into(),
            location,
            status,
            capacity,
            current_orders,
        }
    }

    /// Replace the current order count.
    #[must_use]
    pub const fn with_current_orders(mut self, current_orders: u32) -> Self {
        self.current_orders = current_orders;
        self
    }

    /// Whether the courier is reachable at all.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status != CourierStatus::Offline
    }

    /// Whether the courier is online with a free slot for one more order.
    #[must_use]
    pub fn can_take_new_order(&self) -> bool {
        self.is_online() && self.current_orders.saturating_add(1) <= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use rstest::rstest;

    #[rstest]
    #[case(CourierStatus::Available, 1, 0, true)]
    #[case(CourierStatus::Busy, 2, 1, true)]
    #[case(CourierStatus::FreeSoon, 1, 0, true)]
    #[case(CourierStatus::Busy, 1, 1, false)]
    #[case(CourierStatus::Offline, 3, 0, false)]
    #[case(CourierStatus::Available, 0, 0, false)]
    fn eligibility_requires_online_and_capacity(
        #[case] status: CourierStatus,
        #[case] capacity: u32,
        #[case] current: u32,
        #[case] eligible: bool,
    ) {
        let courier = Courier::new("C", lat_lon(0.0, 0.0), status, capacity, current);
        assert_eq!(courier.can_take_new_order(), eligible);
    }

    #[rstest]
    fn offline_courier_is_not_online() {
        let courier = Courier::new("C", lat_lon(0.0, 0.0), CourierStatus::Offline, 1, 0);
        assert!(!courier.is_online());
    }
}

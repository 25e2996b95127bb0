//! Nearest-courier shortlisting.

use pulse_core::geometry::distance_km;
use pulse_core::{Courier, Order};

use crate::DispatchConfig;

/// Couriers considered for one order, nearest to the pickup first.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Shortlist<'a> {
    pub(crate) couriers: Vec<&'a Courier>,
    /// Set when no courier had spare capacity and busy couriers were used.
    pub(crate) fallback: bool,
}

impl<'a> Shortlist<'a> {
    /// Rank online couriers with spare capacity by distance to the pickup.
    ///
    /// When none qualify, any online courier is ranked instead, up to the
    /// larger fallback size. Offline couriers are never listed. Couriers at
    /// the same distance keep their input order.
    pub(crate) fn build(order: &Order, couriers: &'a [Courier], config: &DispatchConfig) -> Self {
        let ready = nearest(
            order,
            couriers,
            config.shortlist_size,
            Courier::can_take_new_order,
        );
        if !ready.is_empty() {
            return Self {
                couriers: ready,
                fallback: false,
            };
        }

        let online = nearest(order, couriers, config.fallback_size, Courier::is_online);
        if !online.is_empty() {
            log::warn!(
                "no courier has spare capacity for order {}; falling back to {} busy courier(s)",
                order.id,
                online.len()
            );
        }
        Self {
            couriers: online,
            fallback: true,
        }
    }

    /// The courier the engine proposes: the nearest listed one.
    pub(crate) fn proposed(&self) -> Option<&'a Courier> {
        self.couriers.first().copied()
    }
}

fn nearest<'a>(
    order: &Order,
    couriers: &'a [Courier],
    limit: usize,
    eligible: impl Fn(&Courier) -> bool,
) -> Vec<&'a Courier> {
    let mut ranked: Vec<(f64, &Courier)> = couriers
        .iter()
        .filter(|&courier| eligible(courier))
        .map(|courier| (distance_km(courier.location, order.pickup), courier))
        .collect();
    ranked.sort_by(|(lhs, _), (rhs, _)| lhs.total_cmp(rhs));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, courier)| courier).collect()
}

//! Dispatch plans produced by a [`Dispatcher`](crate::Dispatcher).

use crate::Tier;

/// Courier identifier reported when no courier could be proposed.
pub const NO_COURIER_ID: &str = "NONE";

/// How the new order is fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Decision {
    /// Direct single-order delivery.
    Solo,
    /// Combined route with one in-flight order.
    Bundle,
    /// Delivery relayed through a hub.
    Hub,
}

/// Quality measurements attached to a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanMetrics {
    /// Extra minutes over the solo baseline; zero for solo plans.
    pub detour_minutes: u32,
    /// Lateness severity in `0.0..=1.0`; `0.10` when on time.
    pub late_risk_score: f64,
    /// Road-adjusted route length, rounded to two decimals.
    pub total_distance_km: f64,
}

/// The engine's answer for one new order.
///
/// Built once per dispatch call and never modified afterwards. The
/// `explanation` and `route_steps` lines are display hints; only their
/// presence per decision type is stable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchPlan {
    /// Tier the plan was computed for.
    pub tier: Tier,
    /// Chosen fulfilment strategy.
    pub decision: Decision,
    /// Proposed courier, or [`NO_COURIER_ID`].
    pub courier_id: String,
    /// Partner orders carried on the same route; empty unless bundled.
    pub bundled_order_ids: Vec<String>,
    /// Relay hub identifier; set only for hub plans.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub hub_id: Option<String>,
    /// Displayed ETA, clamped to the tier window.
    pub eta_minutes: u32,
    /// Tier fee in Qatari riyal.
    pub fee_qr: u32,
    /// Human-readable reasoning, in display order.
    pub explanation: Vec<String>,
    /// Ordered route step labels.
    pub route_steps: Vec<String>,
    /// Quality measurements.
    pub metrics: PlanMetrics,
}

impl DispatchPlan {
    /// Degraded plan returned when no courier is online.
    ///
    /// The ETA is the tier target plus ten minutes and the late risk is
    /// saturated, signalling a manual or queued fallback.
    ///
    /// # Examples
    /// ```
    /// use pulse_core::{Decision, DispatchPlan, NO_COURIER_ID, Tier};
    ///
    /// let plan = DispatchPlan::no_courier(Tier::Fast);
    /// assert_eq!(plan.decision, Decision::Solo);
    /// assert_eq!(plan.courier_id, NO_COURIER_ID);
    /// assert_eq!(plan.eta_minutes, 45);
    /// ```
    #[must_use]
    pub fn no_courier(tier: Tier) -> Self {
        let cfg = tier.config();
        Self {
            tier,
            decision: Decision::Solo,
            courier_id: NO_COURIER_ID.to_owned(),
            bundled_order_ids: Vec::new(),
            hub_id: None,
            eta_minutes: cfg.target_eta_minutes.saturating_add(10),
            fee_qr: cfg.fee_qr,
            explanation: vec!["No couriers available → manual/queue fallback.".to_owned()],
            route_steps: Vec::new(),
            metrics: PlanMetrics {
                detour_minutes: 0,
                late_risk_score: 1.0,
                total_distance_km: 0.0,
            },
        }
    }

    /// Whether the plan carries a real courier.
    #[must_use]
    pub fn has_courier(&self) -> bool {
        self.courier_id != NO_COURIER_ID
    }
}

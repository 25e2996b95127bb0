//! Candidate plan generators.
//!
//! Each generator returns a fully formed [`DispatchPlan`] with the score the
//! selector ranks it by. Lower scores are better.

use pulse_core::geometry::{clamp_eta, late_risk};
use pulse_core::{Courier, DispatchPlan, Order, Tier};

use crate::DispatchConfig;

pub(crate) mod bundle;
pub(crate) mod hub;
pub(crate) mod solo;

/// A scored plan awaiting selection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) plan: DispatchPlan,
    pub(crate) score: f64,
}

/// Values shared by every generator for one dispatch call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CandidateContext<'a> {
    pub(crate) tier: Tier,
    pub(crate) order: &'a Order,
    pub(crate) courier: &'a Courier,
    pub(crate) promised_minutes: f64,
    pub(crate) config: &'a DispatchConfig,
}

impl CandidateContext<'_> {
    /// Clamp a raw route duration and score its lateness.
    pub(crate) fn estimate(&self, raw_minutes: f64, road_km: f64) -> Estimate {
        let eta_minutes = clamp_eta(raw_minutes, self.tier);
        Estimate {
            eta_minutes,
            late_risk: late_risk(f64::from(eta_minutes), self.promised_minutes),
            road_km,
        }
    }
}

/// Clamped timing of one candidate route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Estimate {
    pub(crate) eta_minutes: u32,
    pub(crate) late_risk: f64,
    pub(crate) road_km: f64,
}

impl Estimate {
    /// Distance-weighted efficiency score used for eco comparisons.
    #[expect(clippy::float_arithmetic, reason = "weighted sum of route metrics")]
    pub(crate) fn eco_score(&self) -> f64 {
        0.7 * f64::from(self.eta_minutes) + 0.3 * (self.road_km * 2.0) + 4.0 * self.late_risk
    }

    /// Minutes over `baseline_eta`, floored at zero.
    pub(crate) const fn detour_over(&self, baseline_eta: u32) -> u32 {
        self.eta_minutes.saturating_sub(baseline_eta)
    }

    /// Road distance rounded to two decimals for display.
    #[expect(clippy::float_arithmetic, reason = "decimal rounding")]
    pub(crate) fn display_km(&self) -> f64 {
        (self.road_km * 100.0).round() / 100.0
    }
}

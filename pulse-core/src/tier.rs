//! Service tiers and their constant policy table.
//!
//! # Examples
//! ```
//! use pulse_core::Tier;
//!
//! assert_eq!(Tier::Fast.config().fee_qr, 10);
//! assert_eq!(Tier::Eco.to_string(), "ECO");
//! assert!(Tier::Fast.bundle_caps().is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Service class controlling target ETA, fee and eligible decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Tier {
    /// Solo dispatch only, strict SLA protection.
    Fast,
    /// Solo plus a two-order bundle attempt.
    Normal,
    /// Solo, bundle and hub relay, tuned for efficiency.
    Eco,
}

/// Per-tier constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierConfig {
    /// Promised delivery minutes when the order carries none.
    pub target_eta_minutes: u32,
    /// Flat delivery fee in Qatari riyal.
    pub fee_qr: u32,
    /// Lowest ETA ever displayed.
    pub min_eta_minutes: u32,
    /// Highest ETA ever displayed.
    pub max_eta_minutes: u32,
}

/// Feasibility limits for a bundled route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleCaps {
    /// Maximum extra minutes over the solo baseline.
    pub max_detour_minutes: u32,
    /// Maximum late-risk score.
    pub max_late_risk: f64,
}

const FAST: TierConfig = TierConfig {
    target_eta_minutes: 35,
    fee_qr: 10,
    min_eta_minutes: 25,
    max_eta_minutes: 50,
};

const NORMAL: TierConfig = TierConfig {
    target_eta_minutes: 45,
    fee_qr: 5,
    min_eta_minutes: 30,
    max_eta_minutes: 60,
};

const ECO: TierConfig = TierConfig {
    target_eta_minutes: 60,
    fee_qr: 0,
    min_eta_minutes: 35,
    max_eta_minutes: 80,
};

const NORMAL_BUNDLE_CAPS: BundleCaps = BundleCaps {
    max_detour_minutes: 10,
    max_late_risk: 0.40,
};

const ECO_BUNDLE_CAPS: BundleCaps = BundleCaps {
    max_detour_minutes: 15,
    max_late_risk: 0.60,
};

impl Tier {
    /// Every tier, cheapest last.
    pub const ALL: [Self; 3] = [Self::Fast, Self::Normal, Self::Eco];

    /// Return the constant configuration for this tier.
    #[must_use]
    pub const fn config(self) -> TierConfig {
        match self {
            Self::Fast => FAST,
            Self::Normal => NORMAL,
            Self::Eco => ECO,
        }
    }

    /// Bundle feasibility caps, or `None` when the tier never bundles.
    #[must_use]
    pub const fn bundle_caps(self) -> Option<BundleCaps> {
        match self {
            Self::Fast => None,
            Self::Normal => Some(NORMAL_BUNDLE_CAPS),
            Self::Eco => Some(ECO_BUNDLE_CAPS),
        }
    }

    /// Whether the tier considers bundling with an in-flight order.
    #[must_use]
    pub const fn allows_bundle(self) -> bool {
        self.bundle_caps().is_some()
    }

    /// Whether the tier considers relaying through a hub.
    #[must_use]
    pub const fn allows_hub(self) -> bool {
        matches!(self, Self::Eco)
    }

    /// Return the tier as an uppercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "FAST",
            Self::Normal => "NORMAL",
            Self::Eco => "ECO",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tier '{0}' (expected FAST, NORMAL or ECO)")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FAST" => Ok(Self::Fast),
            "NORMAL" => Ok(Self::Normal),
            "ECO" => Ok(Self::Eco),
            _ => Err(ParseTierError(s.to_owned())),
        }
    }
}

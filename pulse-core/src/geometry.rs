//! Great-circle distance and travel-time helpers.
//!
//! Coordinates use the [`geo`] convention of `x = longitude` and
//! `y = latitude`, both in degrees. Every function here is pure and total:
//! non-finite input propagates as a non-finite result instead of panicking.

use geo::Coord;

use crate::Tier;

/// Mean Earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Multiplier approximating road detours over straight-line distance.
pub const CIRCUITY_FACTOR: f64 = 1.25;

/// Average courier speed in kilometres per hour.
pub const SPEED_KMH: f64 = 28.0;

/// Late-risk score reported for any on-time ETA.
pub const BASELINE_LATE_RISK: f64 = 0.10;

/// Minutes late at which the late-risk score saturates at `1.0`.
pub const LATE_RISK_HORIZON_MINUTES: f64 = 15.0;

/// Build a coordinate from latitude and longitude in degrees.
///
/// # Examples
/// ```
/// use pulse_core::lat_lon;
///
/// let al_sadd = lat_lon(25.2859, 51.4965);
/// assert_eq!(al_sadd.y, 25.2859);
/// assert_eq!(al_sadd.x, 51.4965);
/// ```
#[must_use]
pub const fn lat_lon(lat: f64, lon: f64) -> Coord<f64> {
    Coord { x: lon, y: lat }
}

/// Haversine distance in kilometres between two coordinates.
///
/// # Examples
/// ```
/// use pulse_core::{geometry::distance_km, lat_lon};
///
/// let a = lat_lon(25.2859, 51.4965);
/// assert_eq!(distance_km(a, a), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
pub fn distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let d_lat = (to.y - from.y).to_radians();
    let d_lon = (to.x - from.x).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + from.y.to_radians().cos() * to.y.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Convert a straight-line distance into riding minutes.
///
/// Applies [`CIRCUITY_FACTOR`] and [`SPEED_KMH`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "travel time is a linear conversion of distance"
)]
pub fn travel_minutes(km: f64) -> f64 {
    km * CIRCUITY_FACTOR / SPEED_KMH * 60.0
}

/// Road-adjusted length of a route whose legs are straight-line kilometres.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "sums leg distances")]
pub fn road_km(legs: &[f64]) -> f64 {
    legs.iter().sum::<f64>() * CIRCUITY_FACTOR
}

/// Score how late an ETA is against the promised minutes.
///
/// On-time deliveries score [`BASELINE_LATE_RISK`]. Late deliveries score
/// the overrun as a fraction of [`LATE_RISK_HORIZON_MINUTES`], saturating at
/// `1.0`. A delivery only slightly late therefore scores below the on-time
/// baseline.
///
/// # Examples
/// ```
/// use pulse_core::geometry::late_risk;
///
/// assert_eq!(late_risk(40.0, 45.0), 0.10);
/// assert_eq!(late_risk(48.0, 45.0), 0.2);
/// assert_eq!(late_risk(75.0, 45.0), 1.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "risk is a ratio of minutes")]
pub fn late_risk(eta_minutes: f64, promised_minutes: f64) -> f64 {
    if eta_minutes <= promised_minutes {
        return BASELINE_LATE_RISK;
    }
    let overrun = (eta_minutes - promised_minutes) / LATE_RISK_HORIZON_MINUTES;
    overrun.min(1.0)
}

/// Round a raw ETA to whole minutes and clamp it to the tier's window.
///
/// Non-finite input clamps to the tier maximum.
///
/// # Examples
/// ```
/// use pulse_core::{Tier, geometry::clamp_eta};
///
/// assert_eq!(clamp_eta(12.4, Tier::Fast), 25);
/// assert_eq!(clamp_eta(30.5, Tier::Fast), 31);
/// assert_eq!(clamp_eta(f64::NAN, Tier::Eco), 80);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped into the tier's u32 window before the cast"
)]
pub fn clamp_eta(raw_minutes: f64, tier: Tier) -> u32 {
    let cfg = tier.config();
    if !raw_minutes.is_finite() {
        return cfg.max_eta_minutes;
    }
    let clamped = raw_minutes.round().clamp(
        f64::from(cfg.min_eta_minutes),
        f64::from(cfg.max_eta_minutes),
    );
    clamped as u32
}

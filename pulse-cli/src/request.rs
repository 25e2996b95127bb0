//! JSON request describing the order to place.

use pulse_core::{Order, ParseTierError, Tier, lat_lon};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ORDER_ID: &str = "NEW_ORDER";
const DEFAULT_PICKUP: Coordinates = Coordinates {
    lat: 25.2859,
    lon: 51.4965,
};
const DEFAULT_DROP: Coordinates = Coordinates {
    lat: 25.3200,
    lon: 51.5250,
};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub(crate) struct Coordinates {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

/// New-order request read by `pulse dispatch`.
///
/// Every field is optional; omitted fields fall back to an Al Sadd to West
/// Bay order at the NORMAL tier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct NewOrderRequest {
    pub(crate) order_id: Option<String>,
    pub(crate) tier: Option<String>,
    pub(crate) pickup: Option<Coordinates>,
    pub(crate) drop: Option<Coordinates>,
    pub(crate) promised_eta_min: Option<f64>,
}

/// Reasons a [`NewOrderRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestValidationError {
    /// A latitude lies outside `[-90, 90]` or is not a number.
    #[error("{field} latitude {value} is outside [-90, 90]")]
    Latitude {
        /// Which point was invalid.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A longitude lies outside `[-180, 180]` or is not a number.
    #[error("{field} longitude {value} is outside [-180, 180]")]
    Longitude {
        /// Which point was invalid.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The promised ETA is not a positive, finite number of minutes.
    #[error("promised ETA {0} must be a positive number of minutes")]
    PromisedEta(f64),
    /// The tier name is not recognised.
    #[error(transparent)]
    Tier(#[from] ParseTierError),
}

impl NewOrderRequest {
    /// Resolve defaults and validate, returning the requested tier and order.
    pub(crate) fn into_order(self) -> Result<(Tier, Order), RequestValidationError> {
        let tier = self
            .tier
            .as_deref()
            .map_or(Ok(Tier::Normal), str::parse::<Tier>)?;
        let pickup = validated("pickup", self.pickup.unwrap_or(DEFAULT_PICKUP))?;
        let drop = validated("drop", self.drop.unwrap_or(DEFAULT_DROP))?;
        let id = self
            .order_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORDER_ID.to_owned());
        let mut order = Order::new(
            id,
            lat_lon(pickup.lat, pickup.lon),
            lat_lon(drop.lat, drop.lon),
        );
        if let Some(minutes) = self.promised_eta_min {
            if !(minutes.is_finite() && minutes > 0.0) {
                return Err(RequestValidationError::PromisedEta(minutes));
            }
            order = order.with_promised_eta(minutes);
        }
        Ok((tier, order))
    }
}

fn validated(
    field: &'static str,
    point: Coordinates,
) -> Result<Coordinates, RequestValidationError> {
    if !(-90.0..=90.0).contains(&point.lat) {
        return Err(RequestValidationError::Latitude {
            field,
            value: point.lat,
        });
    }
    if !(-180.0..=180.0).contains(&point.lon) {
        return Err(RequestValidationError::Longitude {
            field,
            value: point.lon,
        });
    }
    Ok(point)
}

//! Delivery orders.

use geo::Coord;

/// A delivery order, either the one being dispatched or one already in flight.
///
/// Orders are read-only inputs; the engine only consults [`Order::assigned`]
/// to exclude committed orders from bundling.
///
/// With the `serde` feature, coordinates use `geo`'s field names, so a
/// pickup at latitude 25.2859, longitude 51.4965 is written as
/// `{"x": 51.4965, "y": 25.2859}`.
///
/// # Examples
/// ```
/// use pulse_core::{Order, lat_lon};
///
/// let order = Order::new("DOH-0001", lat_lon(25.2859, 51.4965), lat_lon(25.3295, 51.5298))
///     .with_promised_eta(40.0);
/// assert_eq!(order.promised_eta_minutes, Some(40.0));
/// assert!(!order.assigned);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Unique order identifier.
    pub id: String,
    /// Merchant pickup location.
    pub pickup: Coord<f64>,
    /// Customer drop-off location.
    pub drop: Coord<f64>,
    /// Creation timestamp as supplied by the data source.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_ts: Option<f64>,
    /// Promised delivery minutes; the tier target applies when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub promised_eta_minutes: Option<f64>,
    /// Whether the order is already committed to a courier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub assigned: bool,
}

impl Order {
    /// Construct an unassigned order with no timestamp or promise.
    pub fn new(id: impl Into<String>, pickup: Coord<f64>, drop: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            pickup,
            drop,
            created_ts: None,
            promised_eta_minutes: None,
            assigned: false,
        }
    }

    /// Set the promised delivery minutes.
    #[must_use]
    pub const fn with_promised_eta(mut self, minutes: f64) -> Self {
        self.promised_eta_minutes = Some(minutes);
        self
    }

    /// Mark the order as committed to a courier.
    #[must_use]
    pub const fn assigned(mut self) -> Self {
        self.assigned = true;
        self
    }

    /// Promised minutes, falling back to `default_minutes`.
    #[must_use]
    pub fn promised_or(&self, default_minutes: f64) -> f64 {
        self.promised_eta_minutes.unwrap_or(default_minutes)
    }
}

//! Fixed relay hubs used by the eco tier.

use geo::Coord;

use crate::lat_lon;

/// A static handling point a courier may relay an order through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hub {
    /// Stable identifier reported in plans.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Hub position.
    pub location: Coord<f64>,
}

/// The relay hubs around Doha, in evaluation order.
///
/// # Examples
/// ```
/// use pulse_core::HUBS;
///
/// assert_eq!(HUBS.len(), 3);
/// assert!(HUBS.iter().any(|hub| hub.id == "WEST_BAY"));
/// ```
pub const HUBS: [Hub; 3] = [
    Hub {
        id: "EDUCATION_CITY",
        name: "Education City",
        location: lat_lon(25.314, 51.440),
    },
    Hub {
        id: "WEST_BAY",
        name: "West Bay",
        location: lat_lon(25.320, 51.520),
    },
    Hub {
        id: "MSHEIREB",
        name: "Msheireb",
        location: lat_lon(25.286, 51.528),
    },
];

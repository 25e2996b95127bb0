//! Facade crate for the Pulse dispatch engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! dispatcher and the CSV loader behind feature flags.
//!
//! # Examples
//! ```
//! use pulse_engine::{
//!     Courier, CourierStatus, Decision, DispatchRequest, Dispatcher, Order, PulseDispatcher,
//!     Tier, lat_lon,
//! };
//!
//! let request = DispatchRequest {
//!     tier: Tier::Fast,
//!     new_order: Order::new("A1", lat_lon(25.2859, 51.4965), lat_lon(25.3295, 51.5298)),
//!     all_orders: Vec::new(),
//!     couriers: vec![Courier::new(
//!         "C1",
//!         lat_lon(25.2859, 51.4965),
//!         CourierStatus::Available,
//!         1,
//!         0,
//!     )],
//! };
//! let plan = PulseDispatcher::new().dispatch(&request);
//! assert_eq!(plan.decision, Decision::Solo);
//! assert_eq!(plan.courier_id, "C1");
//! ```

#![forbid(unsafe_code)]

pub use pulse_core::{
    BundleCaps, Courier, CourierStatus, Decision, DispatchPlan, DispatchRequest, Dispatcher,
    HUBS, Hub, NO_COURIER_ID, Order, ParseTierError, PlanMetrics, Tier, TierConfig, geometry,
    lat_lon,
};

#[cfg(feature = "dispatcher")]
pub use pulse_dispatch::{DispatchConfig, PulseDispatcher};

#[cfg(feature = "loader")]
pub use pulse_data::{LoadError, load_couriers, load_orders};

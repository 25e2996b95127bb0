//! Core domain types for the Pulse dispatch engine.
//!
//! The crate defines the inputs to a dispatch decision ([`Order`],
//! [`Courier`]), the per-tier policy table ([`Tier`], [`TierConfig`]), the
//! fixed relay [`Hub`] set, the output [`DispatchPlan`], and the
//! [`Dispatcher`] trait implemented by decision engines. The [`geometry`]
//! module holds the pure distance and timing helpers shared by every
//! candidate generator.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod courier;
mod dispatcher;
pub mod geometry;
mod hub;
mod order;
mod plan;
mod tier;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use courier::{Courier, CourierStatus};
pub use dispatcher::{DispatchRequest, Dispatcher};
pub use geometry::lat_lon;
pub use hub::{HUBS, Hub};
pub use order::Order;
pub use plan::{Decision, DispatchPlan, NO_COURIER_ID, PlanMetrics};
pub use tier::{BundleCaps, ParseTierError, Tier, TierConfig};

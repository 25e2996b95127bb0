//! Tabular data loading for the Pulse dispatch engine.
//!
//! Order books and courier snapshots arrive as CSV exports whose column names
//! vary between sources. This crate reads such files leniently with the `csv`
//! crate and maps every row onto the strictly typed [`Order`] and [`Courier`]
//! records from `pulse-core`, so alias handling never leaks into the engine.
//!
//! [`Order`]: pulse_core::Order
//! [`Courier`]: pulse_core::Courier

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod normalise;
mod source;
mod table;

pub use error::LoadError;
pub use normalise::{courier_from_row, order_from_row};
pub use source::{file_is_file, load_couriers, load_orders, open_utf8_file};
pub use table::{Row, read_table};

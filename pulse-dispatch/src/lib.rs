//! Rule-based dispatch engine for Pulse.
//!
//! This crate provides [`PulseDispatcher`], the default implementation of the
//! [`Dispatcher`](pulse_core::Dispatcher) trait. For each new order it
//! shortlists the nearest couriers with spare capacity, builds a solo plan for
//! the nearest one, adds a two-order bundle (normal and eco tiers) and a hub
//! relay (eco tier) when they are feasible, and selects the winner with a
//! tier-specific bias toward consolidation.
//!
//! Every call is a pure function of its [`DispatchRequest`](pulse_core::DispatchRequest):
//! there is no I/O, no shared state and no randomness.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidates;
mod dispatcher;
mod selector;
mod shortlist;

pub use dispatcher::{DispatchConfig, PulseDispatcher};

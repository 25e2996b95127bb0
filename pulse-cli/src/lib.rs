//! Command-line interface for the Pulse dispatch engine.
//!
//! `pulse dispatch` places one new order against CSV snapshots of the order
//! book and the fleet; `pulse demo` runs the reference Doha orders through
//! every tier. Both print JSON plans on standard output.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod demo;
mod dispatch;
mod error;
mod output;
mod request;
mod sources;

use demo::{DemoArgs, run_demo};
use dispatch::{DispatchArgs, run_dispatch};

pub use error::CliError;
pub use request::RequestValidationError;

const ARG_DISPATCH_REQUEST: &str = "request";
const ARG_DATA_DIR: &str = "data-dir";
const ARG_ORDERS: &str = "orders";
const ARG_COURIERS: &str = "couriers";
const ARG_TIER: &str = "tier";
const ENV_DISPATCH_REQUEST: &str = "PULSE_CMDS_DISPATCH_REQUEST_PATH";

/// Run the Pulse CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, when
/// input files cannot be read, or when the plan cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Dispatch(args) => run_dispatch(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pulse",
    about = "Dispatch decisions for a Doha last-mile delivery fleet",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decide how to fulfil one new order.
    Dispatch(DispatchArgs),
    /// Run the reference orders through every tier.
    Demo(DemoArgs),
}

#[cfg(test)]
mod tests;

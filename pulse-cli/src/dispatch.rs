//! Dispatch command implementation for the Pulse CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pulse_core::{DispatchPlan, DispatchRequest, Dispatcher, Tier};
use pulse_data::open_utf8_file;
use pulse_dispatch::PulseDispatcher;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::output::write_json;
use crate::request::NewOrderRequest;
use crate::sources::{DataSources, require_existing};
use crate::{
    ARG_COURIERS, ARG_DATA_DIR, ARG_DISPATCH_REQUEST, ARG_ORDERS, ARG_TIER, CliError,
    ENV_DISPATCH_REQUEST,
};

/// CLI arguments for the `dispatch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Decide how to fulfil a new order. The order is read from a \
                 JSON request file; the order book and fleet snapshot come \
                 from orders.csv and couriers.csv in the data directory \
                 unless overridden.",
    about = "Dispatch one new order"
)]
#[ortho_config(prefix = "PULSE")]
pub(crate) struct DispatchArgs {
    /// Path to a JSON file describing the new order.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Directory containing `orders.csv` and `couriers.csv`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the order table.
    #[arg(long = ARG_ORDERS, value_name = "path")]
    #[serde(default)]
    pub(crate) orders: Option<Utf8PathBuf>,
    /// Override the path to the courier table.
    #[arg(long = ARG_COURIERS, value_name = "path")]
    #[serde(default)]
    pub(crate) couriers: Option<Utf8PathBuf>,
    /// Service tier (FAST, NORMAL or ECO), overriding the request's tier.
    #[arg(long = ARG_TIER, value_name = "tier")]
    #[serde(default)]
    pub(crate) tier: Option<Tier>,
}

impl DispatchArgs {
    pub(crate) fn into_config(self) -> Result<DispatchCommandConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DispatchCommandConfig::try_from(merged)
    }
}

/// Resolved `dispatch` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DispatchCommandConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Order and courier tables.
    pub(crate) sources: DataSources,
    /// Tier forced from the command line or configuration.
    pub(crate) tier: Option<Tier>,
}

impl DispatchCommandConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_DISPATCH_REQUEST)?;
        self.sources.validate()
    }
}

impl TryFrom<DispatchArgs> for DispatchCommandConfig {
    type Error = CliError;

    fn try_from(args: DispatchArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_DISPATCH_REQUEST,
            env: ENV_DISPATCH_REQUEST,
        })?;
        Ok(Self {
            request_path,
            sources: DataSources::resolve(args.data_dir, args.orders, args.couriers),
            tier: args.tier,
        })
    }
}

pub(super) fn run_dispatch(args: DispatchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let dispatcher = PulseDispatcher::new();
    run_dispatch_with(args, &dispatcher, &mut stdout)
}

pub(super) fn run_dispatch_with(
    args: DispatchArgs,
    dispatcher: &dyn Dispatcher,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let plan = execute_dispatch(args, dispatcher)?;
    write_json(writer, &plan)
}

fn execute_dispatch(
    args: DispatchArgs,
    dispatcher: &dyn Dispatcher,
) -> Result<DispatchPlan, CliError> {
    let config = resolve_dispatch_config(args)?;
    let (requested_tier, new_order) = load_dispatch_request(&config.request_path)?
        .into_order()
        .map_err(|source| CliError::InvalidDispatchRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let (all_orders, couriers) = config.sources.load()?;
    let tier = config.tier.unwrap_or(requested_tier);
    log::debug!("dispatching order {} at tier {tier}", new_order.id);
    Ok(dispatcher.dispatch(&DispatchRequest {
        tier,
        new_order,
        all_orders,
        couriers,
    }))
}

fn resolve_dispatch_config(args: DispatchArgs) -> Result<DispatchCommandConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`NewOrderRequest`] from disk.
pub(super) fn load_dispatch_request(path: &Utf8Path) -> Result<NewOrderRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDispatchRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseDispatchRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DispatchCommandConfig, CliError> {
    let merged = DispatchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DispatchCommandConfig::try_from(merged)
}

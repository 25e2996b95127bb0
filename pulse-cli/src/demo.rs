//! Demo command: the reference Doha orders through every tier.

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pulse_core::{Courier, DispatchPlan, DispatchRequest, Dispatcher, Order, Tier, lat_lon};
use pulse_dispatch::PulseDispatcher;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::output::write_json;
use crate::sources::DataSources;
use crate::{ARG_COURIERS, ARG_DATA_DIR, ARG_ORDERS, CliError};

/// A fixed order exercised by `pulse demo`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DemoOrder {
    pub(crate) label: &'static str,
    pub(crate) order_id: &'static str,
    pub(crate) pickup: Coord<f64>,
    pub(crate) drop: Coord<f64>,
}

pub(crate) const DEMO_ORDERS: [DemoOrder; 3] = [
    DemoOrder {
        label: "Al Sadd → West Bay",
        order_id: "DEMO_ORDER_1",
        pickup: lat_lon(25.2859, 51.4965),
        drop: lat_lon(25.3295, 51.5298),
    },
    DemoOrder {
        label: "Msheireb → The Pearl",
        order_id: "DEMO_ORDER_2",
        pickup: lat_lon(25.2853, 51.5338),
        drop: lat_lon(25.3664, 51.5488),
    },
    DemoOrder {
        label: "West Bay → Lusail",
        order_id: "DEMO_ORDER_3",
        pickup: lat_lon(25.3295, 51.5298),
        drop: lat_lon(25.4202, 51.5287),
    },
];

/// CLI arguments for the `demo` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Dispatch three reference orders (Al Sadd to West Bay, \
                 Msheireb to The Pearl, West Bay to Lusail) at the FAST, \
                 NORMAL and ECO tiers against the supplied order book and \
                 fleet snapshot.",
    about = "Run the reference orders through every tier"
)]
#[ortho_config(prefix = "PULSE")]
pub(crate) struct DemoArgs {
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
}

impl DemoArgs {
    pub(crate) fn into_sources(self) -> Result<DataSources, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(DataSources::from(merged))
    }
}

impl From<DemoArgs> for DataSources {
    fn from(args: DemoArgs) -> Self {
        Self::resolve(args.data_dir, args.orders, args.couriers)
    }
}

/// One plan in the demo output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DemoEntry {
    pub(crate) label: String,
    pub(crate) order_id: String,
    pub(crate) tier: Tier,
    pub(crate) plan: DispatchPlan,
}

pub(super) fn run_demo(args: DemoArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let dispatcher = PulseDispatcher::new();
    run_demo_with(args, &dispatcher, &mut stdout)
}

pub(super) fn run_demo_with(
    args: DemoArgs,
    dispatcher: &dyn Dispatcher,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let sources = args.into_sources()?;
    sources.validate()?;
    let (all_orders, couriers) = sources.load()?;
    let entries = demo_entries(dispatcher, &all_orders, &couriers);
    write_json(writer, &entries)
}

/// Dispatch every demo order at every tier, orders outermost.
pub(crate) fn demo_entries(
    dispatcher: &dyn Dispatcher,
    all_orders: &[Order],
    couriers: &[Courier],
) -> Vec<DemoEntry> {
    DEMO_ORDERS
        .iter()
        .flat_map(|demo| Tier::ALL.into_iter().map(move |tier| (demo, tier)))
        .map(|(demo, tier)| {
            let request = DispatchRequest {
                tier,
                new_order: Order::new(demo.order_id, demo.pickup, demo.drop),
                all_orders: all_orders.to_vec(),
                couriers: couriers.to_vec(),
            };
            DemoEntry {
                label: demo.label.to_owned(),
                order_id: demo.order_id.to_owned(),
                tier,
                plan: dispatcher.dispatch(&request),
            }
        })
        .collect()
}

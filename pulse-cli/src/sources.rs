//! Order and courier table locations shared by the subcommands.

use camino::{Utf8Path, Utf8PathBuf};
use pulse_core::{Courier, Order};
use pulse_data::{file_is_file, load_couriers, load_orders};

use crate::{ARG_COURIERS, ARG_ORDERS, CliError};

const ORDERS_FILE: &str = "orders.csv";
const COURIERS_FILE: &str = "couriers.csv";

/// Resolved paths of the order book and fleet snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DataSources {
    /// Path to the order table.
    pub(crate) orders: Utf8PathBuf,
    /// Path to the courier table.
    pub(crate) couriers: Utf8PathBuf,
}

impl DataSources {
    /// Fill unset table paths with their default names inside `data_dir`,
    /// which itself defaults to the working directory.
    pub(crate) fn resolve(
        data_dir: Option<Utf8PathBuf>,
        orders: Option<Utf8PathBuf>,
        couriers: Option<Utf8PathBuf>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        Self {
            orders: orders.unwrap_or_else(|| data_dir.join(ORDERS_FILE)),
            couriers: couriers.unwrap_or_else(|| data_dir.join(COURIERS_FILE)),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CliError> {
        require_existing(&self.orders, ARG_ORDERS)?;
        require_existing(&self.couriers, ARG_COURIERS)?;
        Ok(())
    }

    /// Load both tables.
    pub(crate) fn load(&self) -> Result<(Vec<Order>, Vec<Courier>), CliError> {
        let orders = load_orders(&self.orders)?;
        let couriers = load_couriers(&self.couriers)?;
        log::debug!(
            "loaded {} orders and {} couriers",
            orders.len(),
            couriers.len()
        );
        Ok((orders, couriers))
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

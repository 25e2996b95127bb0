//! Capability-based file access for order and courier tables.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use pulse_core::{Courier, Order};

use crate::{LoadError, Row, courier_from_row, order_from_row, read_table};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Returns an error when the parent directory cannot be opened, when the
/// path has no file name, or when metadata lookup fails.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Load and normalise every order in the CSV file at `path`.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened and the
/// [`read_table`] errors when it cannot be read.
pub fn load_orders(path: &Utf8Path) -> Result<Vec<Order>, LoadError> {
    let orders: Vec<Order> = rows(path)?
        .iter()
        .enumerate()
        .map(|(index, row)| order_from_row(row, index))
        .collect();
    log::debug!("loaded {} orders from {path}", orders.len());
    Ok(orders)
}

/// Load and normalise every courier in the CSV file at `path`.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened and the
/// [`read_table`] errors when it cannot be read.
pub fn load_couriers(path: &Utf8Path) -> Result<Vec<Courier>, LoadError> {
    let couriers: Vec<Courier> = rows(path)?
        .iter()
        .enumerate()
        .map(|(index, row)| courier_from_row(row, index))
        .collect();
    log::debug!("loaded {} couriers from {path}", couriers.len());
    Ok(couriers)
}

fn rows(path: &Utf8Path) -> Result<Vec<Row>, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(io::BufReader::new(file))
}

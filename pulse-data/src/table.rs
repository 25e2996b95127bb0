//! Lenient CSV table reading.

use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::LoadError;

/// One data row keyed by trimmed header name.
///
/// When a header repeats, the right-most column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Build a row from `(header, value)` pairs.
    ///
    /// # Examples
    /// ```
    /// use pulse_data::Row;
    ///
    /// let row = Row::from_pairs([("order_id", "A1"), ("pickup_lat", "")]);
    /// assert_eq!(row.get("order_id"), Some("A1"));
    /// assert_eq!(row.first_non_empty(&["pickup_lat", "order_id"]), Some("A1"));
    /// ```
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Value stored under `header`, if the column exists.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// The first value among `aliases` that is present and not empty.
    #[must_use]
    pub fn first_non_empty(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|alias| self.get(alias))
            .find(|value| !value.is_empty())
    }

    fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        let values = record.iter().chain(std::iter::repeat(""));
        Self::from_pairs(headers.iter().zip(values))
    }
}

/// Read a header row followed by data rows.
///
/// Headers and values are trimmed and blank lines are skipped. Rows shorter
/// than the header are padded with empty values; longer rows are dropped
/// with a warning. A table without data rows yields an empty list.
///
/// # Errors
/// Returns [`LoadError::Header`] when the header cannot be read and
/// [`LoadError::Read`] when the underlying reader fails.
///
/// # Examples
/// ```
/// use pulse_data::read_table;
///
/// let csv = "order_id, pickup_lat\nA1, 25.28\n\nA2\n";
/// let rows = read_table(csv.as_bytes()).expect("table");
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].get("pickup_lat"), Some(""));
/// ```
pub fn read_table<R: Read>(reader: R) -> Result<Vec<Row>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|source| LoadError::Header { source })?
        .clone();
    if headers.iter().all(str::is_empty) {
        log::warn!("CSV table has no header row");
        return Ok(Vec::new());
    }

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(source) if source.is_io_error() => return Err(LoadError::Read { source }),
            Err(err) => {
                log::warn!("skipping unreadable CSV row {}: {err}", index + 1);
                continue;
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() > headers.len() {
            log::warn!(
                "dropping CSV row {} with {} fields for {} columns",
                index + 1,
                record.len(),
                headers.len()
            );
            continue;
        }
        rows.push(Row::from_record(&headers, &record));
    }

    if rows.is_empty() {
        log::warn!("CSV table has no data rows");
    }
    Ok(rows)
}

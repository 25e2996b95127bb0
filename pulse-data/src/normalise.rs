//! Mapping of loosely named CSV columns onto typed records.
//!
//! Exports from different order and fleet systems spell the same column in
//! several ways. Each field lists its accepted spellings; the first present,
//! non-empty one wins.

use std::str::FromStr;

use pulse_core::{Courier, CourierStatus, Order, lat_lon};

use crate::Row;

const ORDER_ID: &[&str] = &["order_id", "id", "Order_ID"];
const PICKUP_LAT: &[&str] = &["pickup_lat", "pickup_latitude", "pickupLat"];
const PICKUP_LON: &[&str] = &["pickup_lon", "pickup_lng", "pickup_longitude", "pickupLon"];
const DROP_LAT: &[&str] = &["drop_lat", "drop_latitude", "dropoff_lat", "dropLat"];
const DROP_LON: &[&str] = &[
    "drop_lon",
    "dropoff_lng",
    "drop_lng",
    "dropoff_lon",
    "drop_longitude",
    "dropLon",
];
const CREATED_TS: &[&str] = &["created_ts", "created_at", "timestamp"];
const PROMISED_ETA: &[&str] = &["promised_eta_min", "promised_eta", "sla_minutes"];
const ASSIGNED: &[&str] = &["assigned", "is_assigned"];

const COURIER_ID: &[&str] = &["courier_id", "id", "Courier_ID"];
const COURIER_LAT: &[&str] = &["lat", "courier_lat", "latitude"];
const COURIER_LON: &[&str] = &["lon", "lng", "courier_lng", "longitude"];
const STATUS: &[&str] = &["status", "courier_status"];
const CAPACITY: &[&str] = &["capacity", "bundle_capacity", "max_orders"];
const CURRENT_ORDERS: &[&str] = &["current_orders", "active_orders"];

/// Map a table row onto an [`Order`].
///
/// `index` is the zero-based data row number, used to derive an id when the
/// row has none. Missing coordinates default to zero and the order is
/// unassigned unless an assignment column reads `true` or `1`.
///
/// # Examples
/// ```
/// use pulse_data::{Row, order_from_row};
///
/// let row = Row::from_pairs([
///     ("id", "A7"),
///     ("pickupLat", "25.2859"),
///     ("pickup_lng", "51.4965"),
///     ("dropoff_lat", "25.3295"),
///     ("dropLon", "51.5298"),
///     ("is_assigned", "1"),
/// ]);
/// let order = order_from_row(&row, 0);
/// assert_eq!(order.id, "A7");
/// assert_eq!(order.pickup.y, 25.2859);
/// assert!(order.assigned);
/// ```
#[must_use]
pub fn order_from_row(row: &Row, index: usize) -> Order {
    let id = row
        .first_non_empty(ORDER_ID)
        .map_or_else(|| format!("ord_{index}"), str::to_owned);
    let pickup = lat_lon(
        number_or(row, PICKUP_LAT, 0.0),
        number_or(row, PICKUP_LON, 0.0),
    );
    let drop = lat_lon(number_or(row, DROP_LAT, 0.0), number_or(row, DROP_LON, 0.0));
    Order {
        id,
        pickup,
        drop,
        created_ts: number(row, CREATED_TS),
        promised_eta_minutes: number(row, PROMISED_ETA),
        assigned: flag(row, ASSIGNED),
    }
}

/// Map a table row onto a [`Courier`].
///
/// `index` is the zero-based data row number, used to derive an id when the
/// row has none. Capacity defaults to one and the current load to zero.
///
/// # Examples
/// ```
/// use pulse_core::CourierStatus;
/// use pulse_data::{Row, courier_from_row};
///
/// let row = Row::from_pairs([("lat", "25.3"), ("lng", "51.5"), ("status", "BUSY")]);
/// let courier = courier_from_row(&row, 4);
/// assert_eq!(courier.id, "cour_4");
/// assert_eq!(courier.status, CourierStatus::Busy);
/// assert_eq!(courier.capacity, 1);
/// ```
#[must_use]
pub fn courier_from_row(row: &Row, index: usize) -> Courier {
    let id = row
        .first_non_empty(COURIER_ID)
        .map_or_else(|| format!("cour_{index}"), str::to_owned);
    Courier {
        id,
        location: lat_lon(
            number_or(row, COURIER_LAT, 0.0),
            number_or(row, COURIER_LON, 0.0),
        ),
        status: status(row),
        capacity: count_or(row, CAPACITY, 1),
        current_orders: count_or(row, CURRENT_ORDERS, 0),
    }
}

/// Parse the first non-empty alias, logging and discarding bad values.
fn number<T: FromStr>(row: &Row, aliases: &[&str]) -> Option<T> {
    let raw = row.first_non_empty(aliases)?;
    raw.parse().map_or_else(
        |_| {
            log::warn!("ignoring unparseable value {raw:?} for column {aliases:?}");
            None
        },
        Some,
    )
}

fn number_or<T: FromStr>(row: &Row, aliases: &[&str], default: T) -> T {
    number(row, aliases).unwrap_or(default)
}

/// Parse a whole-number count, accepting float spellings such as `2.0`.
fn count_or(row: &Row, aliases: &[&str], default: u32) -> u32 {
    let Some(value) = number::<f64>(row, aliases) else {
        return default;
    };
    whole_count(value).unwrap_or_else(|| {
        log::warn!("ignoring non-count value {value} for column {aliases:?}");
        default
    })
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is checked to be a whole number within u32 range before the cast"
)]
fn whole_count(value: f64) -> Option<u32> {
    let in_range = value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value);
    (in_range && value.fract() == 0.0).then(|| value as u32)
}

fn flag(row: &Row, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .any(|value| value.eq_ignore_ascii_case("true") || value == "1")
}

fn status(row: &Row) -> CourierStatus {
    let raw = row.first_non_empty(STATUS).unwrap_or_default();
    match raw.to_ascii_lowercase().as_str() {
        "offline" => CourierStatus::Offline,
        "busy" => CourierStatus::Busy,
        "free_soon" => CourierStatus::FreeSoon,
        _ => CourierStatus::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn canonical_order_columns() {
        let row = Row::from_pairs([
            ("order_id", "O1"),
            ("pickup_lat", "25.1"),
            ("pickup_lon", "51.1"),
            ("drop_lat", "25.2"),
            ("drop_lon", "51.2"),
            ("created_ts", "1700000000"),
            ("promised_eta_min", "40"),
            ("assigned", "false"),
        ]);
        let order = order_from_row(&row, 3);
        assert_eq!(order.id, "O1");
        assert_eq!(order.pickup, lat_lon(25.1, 51.1));
        assert_eq!(order.drop, lat_lon(25.2, 51.2));
        assert_eq!(order.created_ts, Some(1_700_000_000.0));
        assert_eq!(order.promised_eta_minutes, Some(40.0));
        assert!(!order.assigned);
    }

    #[rstest]
    #[case("order_id")]
    #[case("id")]
    #[case("Order_ID")]
    fn order_id_aliases(#[case] column: &str) {
        let order = order_from_row(&Row::from_pairs([(column, "X")]), 0);
        assert_eq!(order.id, "X");
    }

    #[rstest]
    fn missing_order_fields_default() {
        let order = order_from_row(&Row::default(), 7);
        assert_eq!(order.id, "ord_7");
        assert_eq!(order.pickup, lat_lon(0.0, 0.0));
        assert!(order.created_ts.is_none());
        assert!(order.promised_eta_minutes.is_none());
        assert!(!order.assigned);
    }

    #[rstest]
    fn empty_alias_falls_through_to_next() {
        let row = Row::from_pairs([("drop_lat", ""), ("dropoff_lat", "25.4")]);
        assert_eq!(order_from_row(&row, 0).drop.y, 25.4);
    }

    #[rstest]
    fn unparseable_number_uses_default() {
        let row = Row::from_pairs([("pickup_lat", "north"), ("promised_eta", "soon")]);
        let order = order_from_row(&row, 0);
        assert_eq!(order.pickup.y, 0.0);
        assert!(order.promised_eta_minutes.is_none());
    }

    #[rstest]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("1", true)]
    #[case("yes", false)]
    #[case("0", false)]
    fn assignment_flag(#[case] value: &str, #[case] expected: bool) {
        let row = Row::from_pairs([("is_assigned", value)]);
        assert_eq!(order_from_row(&row, 0).assigned, expected);
    }

    #[rstest]
    #[case("offline", CourierStatus::Offline)]
    #[case("Busy", CourierStatus::Busy)]
    #[case("FREE_SOON", CourierStatus::FreeSoon)]
    #[case("available", CourierStatus::Available)]
    #[case("on_break", CourierStatus::Available)]
    fn courier_status_parsing(#[case] value: &str, #[case] expected: CourierStatus) {
        let row = Row::from_pairs([("courier_status", value)]);
        assert_eq!(courier_from_row(&row, 0).status, expected);
    }

    #[rstest]
    fn courier_aliases_and_defaults() {
        let row = Row::from_pairs([
            ("Courier_ID", "K9"),
            ("latitude", "25.3"),
            ("courier_lng", "51.5"),
            ("max_orders", "3"),
            ("active_orders", "2"),
        ]);
        let courier = courier_from_row(&row, 0);
        assert_eq!(courier.id, "K9");
        assert_eq!(courier.location, lat_lon(25.3, 51.5));
        assert_eq!(courier.status, CourierStatus::Available);
        assert_eq!(courier.capacity, 3);
        assert_eq!(courier.current_orders, 2);
    }

    #[rstest]
    #[case("2", "1", 2, 1)]
    #[case("2.0", "1.0", 2, 1)]
    #[case("1.0", "1.0", 1, 1)]
    #[case("1.5", "-1", 1, 0)]
    #[case("NaN", "inf", 1, 0)]
    #[case("many", "", 1, 0)]
    fn courier_counts_accept_float_spellings(
        #[case] capacity: &str,
        #[case] load: &str,
        #[case] expected_capacity: u32,
        #[case] expected_load: u32,
    ) {
        let row = Row::from_pairs([("capacity", capacity), ("current_orders", load)]);
        let courier = courier_from_row(&row, 0);
        assert_eq!(courier.capacity, expected_capacity);
        assert_eq!(courier.current_orders, expected_load);
    }

    #[rstest]
    fn float_formatted_full_courier_stays_full() {
        let row = Row::from_pairs([("capacity", "1.0"), ("current_orders", "1.0")]);
        assert!(!courier_from_row(&row, 0).can_take_new_order());
    }

    #[rstest]
    fn missing_courier_fields_default() {
        let courier = courier_from_row(&Row::default(), 2);
        assert_eq!(courier.id, "cour_2");
        assert_eq!(courier.capacity, 1);
        assert_eq!(courier.current_orders, 0);
    }
}

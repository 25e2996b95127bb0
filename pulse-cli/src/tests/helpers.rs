//! Test helpers for laying out request files and data tables on disk.

use camino::{Utf8Path, Utf8PathBuf};
use pulse_core::Tier;
use pulse_core::test_support::{StaticDispatcher, solo_plan};
use std::fs;
use tempfile::TempDir;

/// Order book with one bundleable partner near Al Sadd and one assigned order.
pub(super) const ORDERS_CSV: &str = "\
order_id,pickup_lat,pickup_lon,drop_lat,drop_lon,assigned
P1,25.2890,51.4990,25.3310,51.5320,false
P2,25.2870,51.4975,25.3300,51.5310,true
";

/// One idle courier in Al Sadd and one offline courier.
pub(super) const COURIERS_CSV: &str = "\
courier_id,lat,lon,status,capacity
C1,25.2859,51.4965,available,2
OFF,25.2900,51.5000,offline,1
";

/// Al Sadd to West Bay with an explicit tier.
pub(super) fn request_json(tier: &str) -> String {
    format!(
        r#"{{
  "order_id": "REQ-1",
  "tier": "{tier}",
  "pickup": {{ "lat": 25.2859, "lon": 51.4965 }},
  "drop": {{ "lat": 25.3295, "lon": 51.5298 }}
}}"#
    )
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write file");
}

pub(super) fn stub_dispatcher() -> StaticDispatcher {
    StaticDispatcher::new(solo_plan(Tier::Normal, "STUB", 33))
}

/// Temporary directory holding a request and both data tables.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    /// An empty workspace.
    pub(super) fn empty() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    /// A workspace with `orders.csv` and `couriers.csv` in its root.
    pub(super) fn with_tables() -> Self {
        let workspace = Self::empty();
        write_utf8(&workspace.orders_path(), ORDERS_CSV.as_bytes());
        write_utf8(&workspace.couriers_path(), COURIERS_CSV.as_bytes());
        workspace
    }

    pub(super) fn request_path(&self) -> Utf8PathBuf {
        self.root.join("request.json")
    }

    pub(super) fn orders_path(&self) -> Utf8PathBuf {
        self.root.join("orders.csv")
    }

    pub(super) fn couriers_path(&self) -> Utf8PathBuf {
        self.root.join("couriers.csv")
    }

    pub(super) fn write_request(&self, payload: &str) {
        write_utf8(&self.request_path(), payload.as_bytes());
    }
}

//! Behavioural tests for CSV loading using rstest-bdd.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use pulse_core::{Courier, CourierStatus, Order};
use pulse_data::{LoadError, load_couriers, load_orders};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct LoadWorld {
    path: RefCell<Option<Utf8PathBuf>>,
    orders: RefCell<Option<Result<Vec<Order>, LoadError>>>,
    couriers: RefCell<Option<Result<Vec<Courier>, LoadError>>>,
}

impl LoadWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn path(&self) -> Utf8PathBuf {
        self.path.borrow().clone().expect("table path should be set")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn orders(&self) -> Vec<Order> {
        match self.orders.borrow().as_ref().expect("orders should be loaded") {
            Ok(orders) => orders.clone(),
            Err(err) => panic!("orders failed to load: {err}"),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn couriers(&self) -> Vec<Courier> {
        match self
            .couriers
            .borrow()
            .as_ref()
            .expect("couriers should be loaded")
        {
            Ok(couriers) => couriers.clone(),
            Err(err) => panic!("couriers failed to load: {err}"),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn order(&self, id: &str) -> Order {
        self.orders()
            .into_iter()
            .find(|order| order.id == id)
            .expect("order should exist")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn courier(&self, id: &str) -> Courier {
        self.couriers()
            .into_iter()
            .find(|courier| courier.id == id)
            .expect("courier should exist")
    }
}

fn fixture_path(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[fixture]
fn world() -> LoadWorld {
    LoadWorld::default()
}

#[given("the order table {name}")]
fn given_order_table(name: String, world: &LoadWorld) {
    world.path.replace(Some(fixture_path(&name)));
}

#[given("the courier table {name}")]
fn given_courier_table(name: String, world: &LoadWorld) {
    world.path.replace(Some(fixture_path(&name)));
}

#[when("the orders are loaded")]
fn when_orders_loaded(world: &LoadWorld) {
    let outcome = load_orders(&world.path());
    world.orders.replace(Some(outcome));
}

#[when("the couriers are loaded")]
fn when_couriers_loaded(world: &LoadWorld) {
    let outcome = load_couriers(&world.path());
    world.couriers.replace(Some(outcome));
}

#[then("{count} orders are loaded")]
fn then_order_count(count: usize, world: &LoadWorld) {
    assert_eq!(world.orders().len(), count);
}

#[then("order {id} is assigned")]
fn then_assigned(id: String, world: &LoadWorld) {
    assert!(world.order(&id).assigned);
}

#[then("order {id} is not assigned")]
fn then_not_assigned(id: String, world: &LoadWorld) {
    assert!(!world.order(&id).assigned);
}

#[then("order {id} promises {minutes} minutes")]
fn then_promise(id: String, minutes: f64, world: &LoadWorld) {
    assert_eq!(world.order(&id).promised_eta_minutes, Some(minutes));
}

#[then("the order in row {index} has the generated id {id}")]
fn then_generated_id(index: usize, id: String, world: &LoadWorld) {
    let orders = world.orders();
    assert_eq!(orders.get(index).map(|order| order.id.as_str()), Some(id.as_str()));
}

#[then("{count} couriers are loaded")]
fn then_courier_count(count: usize, world: &LoadWorld) {
    assert_eq!(world.couriers().len(), count);
}

#[then("courier {id} is offline")]
fn then_offline(id: String, world: &LoadWorld) {
    assert_eq!(world.courier(&id).status, CourierStatus::Offline);
}

#[then("courier {id} has capacity {capacity}")]
fn then_capacity(id: String, capacity: u32, world: &LoadWorld) {
    assert_eq!(world.courier(&id).capacity, capacity);
}

#[then("loading fails because the file cannot be opened")]
fn then_open_error(world: &LoadWorld) {
    let outcome = world.orders.borrow();
    assert!(matches!(outcome.as_ref(), Some(Err(LoadError::Open { .. }))));
}

#[scenario(path = "tests/features/loading.feature", index = 0)]
fn orders_are_normalised(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/loading.feature", index = 1)]
fn couriers_are_normalised(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/loading.feature", index = 2)]
fn missing_table(world: LoadWorld) {
    let _ = world;
}

//! Behavioural tests for `SqliteItineraryStore` using rstest-bdd.
#![cfg(feature = "store-sqlite")]

use std::cell::RefCell;

use chrono::NaiveDate;
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use roamer_core::{
    Algorithm, Itinerary, ItineraryStore, NewItinerary, Place, Route, RouteEdge,
    SqliteItineraryStore,
};
use tempfile::TempDir;

/// Shared state for store scenarios. The temporary directory outlives the
/// store so the database file stays put.
#[derive(Debug)]
struct StoreWorld {
    temp_dir: TempDir,
    store: RefCell<Option<SqliteItineraryStore>>,
    saved: RefCell<Vec<Itinerary>>,
}

impl StoreWorld {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
            store: RefCell::new(None),
            saved: RefCell::new(Vec::new()),
        }
    }

    fn with_store<T>(&self, f: impl FnOnce(&mut SqliteItineraryStore) -> T) -> T {
        let mut borrowed = self.store.borrow_mut();
        let store = borrowed.as_mut().expect("store should be open");
        f(store)
    }

    fn first_id(&self) -> String {
        self.saved
            .borrow()
            .first()
            .map(|it| it.id.clone())
            .expect("an itinerary should have been saved")
    }

    fn listed_names(&self) -> Vec<String> {
        self.with_store(|store| store.list().expect("list itineraries"))
            .into_iter()
            .map(|it| it.name)
            .collect()
    }
}

#[fixture]
fn world() -> StoreWorld {
    StoreWorld::new()
}

fn draft(name: &str) -> NewItinerary {
    let places = vec![
        Place::new("eiffel", "Eiffel Tower", Coord { x: 2.2945, y: 48.8584 }),
        Place::new("louvre", "Louvre Museum", Coord { x: 2.3376, y: 48.8606 }),
    ];
    let edges = vec![RouteEdge::new("eiffel", "louvre", 4.5, 25.0)];
    let route = Route::from_path(places, edges, Algorithm::Dfs).expect("valid route");
    let date = NaiveDate::from_ymd_opt(2025, 5, 17).expect("valid date");
    NewItinerary::new(name, date, route)
}

#[given("an empty SQLite itinerary store")]
fn empty_store(world: &StoreWorld) {
    let path = world.temp_dir.path().join("itineraries.db");
    let store = SqliteItineraryStore::open(path).expect("open store");
    world.store.replace(Some(store));
}

#[when("I save itineraries named \"Museums\" and \"Markets\"")]
fn save_two(world: &StoreWorld) {
    let saved: Vec<_> = ["Museums", "Markets"]
        .into_iter()
        .map(|name| world.with_store(|store| store.save(draft(name)).expect("save itinerary")))
        .collect();
    world.saved.replace(saved);
}

#[when("I delete the first itinerary")]
fn delete_first(world: &StoreWorld) {
    let id = world.first_id();
    let removed = world.with_store(|store| store.delete(&id).expect("delete itinerary"));
    assert!(removed, "first delete should remove a row");
}

#[when("I rename the first itinerary to \"Galleries\"")]
fn rename_first(world: &StoreWorld) {
    let mut first = world
        .saved
        .borrow()
        .first()
        .cloned()
        .expect("an itinerary should have been saved");
    first.name = "Galleries".to_owned();
    let replaced = world.with_store(|store| store.replace(first).expect("replace itinerary"));
    assert!(replaced);
}

#[then("listing returns \"Museums\" then \"Markets\"")]
fn listed_in_order(world: &StoreWorld) {
    assert_eq!(world.listed_names(), ["Museums", "Markets"]);
}

#[then("listing returns \"Galleries\" then \"Markets\"")]
fn listed_after_rename(world: &StoreWorld) {
    assert_eq!(world.listed_names(), ["Galleries", "Markets"]);
}

#[then("listing returns only \"Markets\"")]
fn listed_after_delete(world: &StoreWorld) {
    assert_eq!(world.listed_names(), ["Markets"]);
}

#[then("each itinerary has a generated id")]
fn generated_ids(world: &StoreWorld) {
    let saved = world.saved.borrow();
    assert!(saved.iter().all(|it| it.id.starts_with("itinerary-")));
    let stored = world.with_store(|store| store.list().expect("list itineraries"));
    assert_eq!(*saved, stored);
}

#[then("deleting the first itinerary again reports nothing removed")]
fn delete_again(world: &StoreWorld) {
    let id = world.first_id();
    let removed = world.with_store(|store| store.delete(&id).expect("delete itinerary"));
    assert!(!removed);
}

#[scenario(path = "tests/features/sqlite_itinerary_store.feature", index = 0)]
fn listed_in_save_order(world: StoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sqlite_itinerary_store.feature", index = 1)]
fn delete_removes_one(world: StoreWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sqlite_itinerary_store.feature", index = 2)]
fn replace_keeps_position(world: StoreWorld) {
    let _ = world;
}

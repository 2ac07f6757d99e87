//! Behaviour-driven step definitions driving the itinerary CLI scenarios.

use super::helpers::{Workspace, argv, run_cli, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use chrono::NaiveDate;
use roamer_core::{Algorithm, Itinerary, OptimizeFor, RouteEdge};
use roamer_data::sample::{paris_edges, paris_places};
use roamer_search::find_best_route;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct ItineraryWorld {
    _workspace: Workspace,
    db: Utf8PathBuf,
    route: Utf8PathBuf,
    saved_id: RefCell<Option<String>>,
    stdout: RefCell<String>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ItineraryWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let db = workspace.path("store/itineraries.db");
        let route = workspace.path("route.json");
        Self {
            _workspace: workspace,
            db,
            route,
            saved_id: RefCell::new(None),
            stdout: RefCell::new(String::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, args: &[&str]) {
        let mut full = args.to_vec();
        full.extend(["--db", self.db.as_str()]);
        let (outcome, stdout) = run_cli(&argv(full));
        self.stdout.replace(stdout);
        self.result.replace(Some(outcome));
    }

    fn succeeded(&self) {
        let borrowed = self.result.borrow();
        if let Some(Err(err)) = borrowed.as_ref() {
            panic!("expected success, found {err:?}");
        }
    }

    fn saved_id(&self) -> String {
        self.saved_id.borrow().clone().expect("an itinerary was saved")
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }
}

#[fixture]
fn world() -> ItineraryWorld {
    ItineraryWorld::new()
}

#[given("a planned route saved to disk")]
fn planned_route(#[from(world)] world: &ItineraryWorld) {
    let places: Vec<_> = paris_places().into_iter().take(4).collect();
    let route = find_best_route(&places, &paris_edges(), Algorithm::Ucs, OptimizeFor::Distance, None)
        .expect("sample route exists");
    let payload = serde_json::to_vec_pretty(&route).expect("serialize route");
    write_utf8(&world.route, &payload);
}

#[given("a route file whose edges do not join its places")]
fn tampered_route(#[from(world)] world: &ItineraryWorld) {
    let places: Vec<_> = paris_places().into_iter().take(2).collect();
    let edge = RouteEdge::new("place-3", "place-4", 5.8, 28.0);
    let payload = serde_json::json!({
        "places": places,
        "edges": [edge],
        "totalDistance": 5.8,
        "totalDuration": 28,
        "algorithm": "ucs",
    });
    write_utf8(&world.route, payload.to_string().as_bytes());
}

#[when("I save the route as {name} on {date}")]
fn save_route(#[from(world)] world: &ItineraryWorld, name: String, date: NaiveDate) {
    let name = name.trim_matches('"').to_owned();
    let date = date.to_string();
    world.run(&[
        "save",
        "--route",
        world.route.as_str(),
        "--name",
        &name,
        "--date",
        &date,
    ]);
    let stdout = world.stdout.borrow().clone();
    if let Ok(saved) = serde_json::from_str::<Itinerary>(&stdout) {
        world.saved_id.replace(Some(saved.id));
    }
}

#[when("I list the itineraries")]
fn list_itineraries(#[from(world)] world: &ItineraryWorld) {
    world.run(&["list"]);
}

#[when("I show the saved itinerary")]
fn show_saved(#[from(world)] world: &ItineraryWorld) {
    let id = world.saved_id();
    world.run(&["show", &id]);
}

#[when("I show itinerary {id}")]
fn show_by_id(#[from(world)] world: &ItineraryWorld, id: String) {
    world.run(&["show", id.trim_matches('"')]);
}

#[when("I delete the saved itinerary")]
fn delete_saved(#[from(world)] world: &ItineraryWorld) {
    let id = world.saved_id();
    world.run(&["delete", &id]);
    world.succeeded();
    assert_eq!(world.stdout.borrow().trim(), format!("deleted {id}"));
}

#[then("{count} itinerary is listed")]
fn listed_count(#[from(world)] world: &ItineraryWorld, count: usize) {
    world.succeeded();
    let listed: Vec<Itinerary> =
        serde_json::from_str(&world.stdout.borrow()).expect("list output is JSON");
    assert_eq!(listed.len(), count);
}

#[then("the listed itinerary is named {name}")]
fn listed_name(#[from(world)] world: &ItineraryWorld, name: String) {
    let listed: Vec<Itinerary> =
        serde_json::from_str(&world.stdout.borrow()).expect("list output is JSON");
    let first = listed.first().expect("one itinerary listed");
    assert_eq!(first.name, name.trim_matches('"'));
    assert_eq!(first.route.places.len(), 4);
}

#[then("the shown itinerary is dated {date}")]
fn shown_date(#[from(world)] world: &ItineraryWorld, date: NaiveDate) {
    world.succeeded();
    let shown: Itinerary = serde_json::from_str(&world.stdout.borrow()).expect("show output is JSON");
    assert_eq!(shown.date, date);
    assert_eq!(shown.id, world.saved_id());
}

#[then("the command fails because the itinerary does not exist")]
fn fails_not_found(#[from(world)] world: &ItineraryWorld) {
    let error = world.error();
    assert!(error.starts_with("ItineraryNotFound"), "expected ItineraryNotFound, found {error}");
}

#[then("the command fails because the route is invalid")]
fn fails_invalid_route(#[from(world)] world: &ItineraryWorld) {
    let error = world.error();
    assert!(error.starts_with("InvalidRoute"), "expected InvalidRoute, found {error}");
}

macro_rules! register_itinerary_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/itinerary_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ItineraryWorld) {
            let _ = world;
        }
    };
}

register_itinerary_scenario!(itinerary_list, "listing a saved itinerary");
register_itinerary_scenario!(itinerary_show, "showing a saved itinerary");
register_itinerary_scenario!(itinerary_delete, "deleting a saved itinerary");
register_itinerary_scenario!(itinerary_unknown, "showing an unknown itinerary");
register_itinerary_scenario!(itinerary_tampered, "rejecting a tampered route");

//! CLI integration tests: run the binary against the bundled catalog with
//! favorites kept in a temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn property_search(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("property-search").unwrap();
    cmd.env_remove("PROPERTY_CATALOG")
        .env_remove("MAPS_API_KEY")
        .env("RUST_LOG", "off")
        .arg("--store-dir")
        .arg(store.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("saved"))
        .stdout(predicate::str::contains("open"));
}

#[test]
fn test_search_without_filters_lists_catalog() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: prop1"))
        .stdout(predicate::str::contains("ID: prop7"))
        .stdout(predicate::str::contains("Favorites: 0 saved"));
}

#[test]
fn test_search_by_type_and_postcode() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .args(["search", "--type", "Flat", "--postcode", "nw1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: prop3"))
        .stdout(predicate::str::contains("ID: prop4").not())
        .stdout(predicate::str::contains("ID: prop2").not());
}

#[test]
fn test_search_ignores_unparseable_price() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .args(["search", "--min-price", "lots", "--added-after", "2023-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: prop4"))
        .stdout(predicate::str::contains("ID: prop6"))
        .stdout(predicate::str::contains("ID: prop1").not());
}

#[test]
fn test_search_with_no_matches() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .args(["search", "--max-price", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No properties found matching your criteria.",
        ));
}

#[test]
fn test_save_and_unsave_persist() {
    let store = TempDir::new().unwrap();

    property_search(&store)
        .args(["save", "prop2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved prop2"));

    property_search(&store)
        .args(["save", "prop2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prop2 is already saved"));

    property_search(&store)
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: prop2"));

    property_search(&store)
        .args(["unsave", "prop2"])
        .assert()
        .success();

    let stored = fs::read_to_string(store.path().join("favorites.json")).unwrap();
    assert_eq!(stored, "[]");

    property_search(&store)
        .args(["open", "/saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved properties."));
}

#[test]
fn test_corrupt_favorites_file_is_ignored() {
    let store = TempDir::new().unwrap();
    fs::write(store.path().join("favorites.json"), "not json at all").unwrap();

    property_search(&store)
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved properties."));
}

#[test]
fn test_show_unknown_property() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .args(["show", "prop99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Property not found"));
}

#[test]
fn test_show_floor_plan_tab() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .args(["show", "prop1", "--tab", "floor-plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("House - 3 Bedrooms"))
        .stdout(predicate::str::contains("£750,000"))
        .stdout(predicate::str::contains("Gallery: 6 images"))
        .stdout(predicate::str::contains("Floor plan: /images/prop1-floorplan.jpg"));
}

#[test]
fn test_map_tab_without_api_key() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .args(["show", "prop1", "--tab", "map"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Map unavailable"));
}

#[test]
fn test_open_unknown_route_fails() {
    let store = TempDir::new().unwrap();
    property_search(&store)
        .args(["open", "/nowhere"])
        .assert()
        .failure();
}

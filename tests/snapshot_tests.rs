//! Wire-format tests for the serialized game snapshot.
//!
//! The league server and the on-disk backups both consume this exact
//! shape; these tests pin it against literal JSON.

use serde_json::Value;
use ultibook::{Bookkeeper, Line, Team};

fn line(names: &[&str]) -> Line {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn keeper() -> Bookkeeper {
    Bookkeeper::new(
        "ocl-2024",
        7,
        Team::new("Karma Down Under", 12),
        Team::new("Flick Nation", 34),
    )
}

/// Two completed points: away scores off the opening pull, then home
/// answers.
fn played_keeper() -> Bookkeeper {
    let mut book = keeper();
    book.record_active_players(line(&["Ana", "Al"]), line(&["Bea", "Bob"]));

    book.record_first_actor("Al", true);
    book.record_pull();
    book.record_first_actor("Bea", false);
    book.record_pass("Bob");
    book.record_point();

    book.record_active_players(line(&["Ana", "Al"]), line(&["Bea", "Bob"]));
    book.record_first_actor("Ana", true);
    book.record_pass("Al");
    book.record_point();

    book
}

#[test]
fn test_empty_game_snapshot() {
    let json = serde_json::to_value(keeper().serialize()).unwrap();

    assert_eq!(json["league_id"], "ocl-2024");
    assert_eq!(json["week"], 7);
    assert_eq!(json["homeTeam"], "Karma Down Under");
    assert_eq!(json["awayTeam"], "Flick Nation");
    assert_eq!(json["homeTeamId"], 12);
    assert_eq!(json["awayTeamId"], 34);
    assert_eq!(json["homeScore"], "0");
    assert_eq!(json["awayScore"], "0");
    assert_eq!(json["homeRoster"], Value::Array(vec![]));
    assert_eq!(json["awayRoster"], Value::Array(vec![]));
    assert_eq!(json["points"], Value::Array(vec![]));
}

#[test]
fn test_scores_serialize_as_strings() {
    let json = serde_json::to_value(played_keeper().serialize()).unwrap();

    assert_eq!(json["homeScore"], "1");
    assert_eq!(json["awayScore"], "1");
    assert!(json["homeScore"].is_string());
}

#[test]
fn test_points_are_event_lists() {
    let json = serde_json::to_value(played_keeper().serialize()).unwrap();

    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);

    let first = points[0].as_array().unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first[0]["type"], "PULL");
    assert_eq!(first[0]["firstActor"], "Al");
    assert!(first[0]["secondActor"].is_null());
    assert_eq!(first[1]["type"], "PASS");
    assert_eq!(first[1]["firstActor"], "Bea");
    assert_eq!(first[1]["secondActor"], "Bob");
    assert_eq!(first[2]["type"], "POINT");
    assert_eq!(first[2]["firstActor"], "Bob");

    let second = points[1].as_array().unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[1]["type"], "POINT");
    assert_eq!(second[1]["firstActor"], "Al");
}

#[test]
fn test_events_carry_no_timestamps_on_the_wire() {
    let json = serde_json::to_value(played_keeper().serialize()).unwrap();

    let event = json["points"][0][0].as_object().unwrap();
    assert_eq!(event.len(), 3);
    assert!(event.contains_key("type"));
    assert!(event.contains_key("firstActor"));
    assert!(event.contains_key("secondActor"));
    assert!(!event.contains_key("timestamp"));
}

#[test]
fn test_rosters_are_sorted_participant_unions() {
    let json = serde_json::to_value(played_keeper().serialize()).unwrap();

    assert_eq!(json["homeRoster"], serde_json::json!(["Al", "Ana"]));
    assert_eq!(json["awayRoster"], serde_json::json!(["Bea", "Bob"]));
}

#[test]
fn test_participants_accumulate_across_lines() {
    let mut book = keeper();
    book.record_active_players(line(&["Ana", "Al"]), line(&["Bea"]));
    book.record_first_actor("Ana", true);
    book.record_point();

    // A substitution: Cleo comes on for the next point.
    book.record_active_players(line(&["Ana", "Cleo"]), line(&["Bea"]));
    book.record_first_actor("Cleo", true);
    book.record_point();

    let json = serde_json::to_value(book.serialize()).unwrap();
    assert_eq!(json["homeRoster"], serde_json::json!(["Al", "Ana", "Cleo"]));
}

#[test]
fn test_record_point_autosaves_in_background() {
    use std::time::{Duration, Instant};

    let dir = tempfile::tempdir().unwrap();
    let mut book = keeper().with_autosave(dir.path());
    book.record_active_players(line(&["Ana"]), line(&["Bea"]));
    book.record_first_actor("Ana", true);

    book.record_point();

    // The write happens on a detached thread; poll until the snapshot
    // parses, with a generous deadline.
    let deadline = Instant::now() + Duration::from_secs(5);
    let json = loop {
        if let Some(json) = read_autosave(dir.path()) {
            break json;
        }
        assert!(Instant::now() < deadline, "no autosave appeared");
        std::thread::sleep(Duration::from_millis(10));
    };

    assert_eq!(json["homeScore"], "1");
    assert_eq!(json["points"].as_array().unwrap().len(), 1);
}

/// Look for a parseable snapshot under `<root>/<date>/`.
fn read_autosave(root: &std::path::Path) -> Option<Value> {
    let dated = std::fs::read_dir(root).ok()?.next()?.ok()?.path();
    let file = std::fs::read_dir(dated).ok()?.next()?.ok()?.path();
    serde_json::from_str(&std::fs::read_to_string(file).ok()?).ok()
}

#[test]
fn test_snapshot_is_detached_from_the_live_game() {
    let mut book = played_keeper();
    let snapshot = book.serialize();

    book.record_active_players(line(&["Ana", "Al"]), line(&["Bea", "Bob"]));
    book.record_first_actor("Bob", false);
    book.record_point();

    assert_eq!(snapshot.points.len(), 2);
    assert_eq!(snapshot.home_score, "1");
    assert_eq!(book.point_count(), 3);
}

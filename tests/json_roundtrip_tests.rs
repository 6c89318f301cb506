use transit_scheme_editor::{parse_scheme, write_scheme, LabelPosition, LineStyle};

const SAMPLE: &str = include_str!("fixtures/sample_scheme.json");

#[test]
fn test_sample_fixture_parses_completely() {
    let scheme = parse_scheme(SAMPLE).expect("Fixture sollte parsen");

    assert_eq!(scheme.stop_count(), 5);
    assert_eq!(scheme.route_count(), 2);
    assert_eq!(scheme.segments().count(), 4);
    scheme
        .check_invariants()
        .expect("Fixture sollte alle Invarianten erfüllen");

    let zoo = scheme.stop("004").expect("Haltestelle 004");
    assert_eq!(zoo.name, "Zoo & Park");
    assert_eq!(zoo.label_position, LabelPosition::Left);
    assert!(zoo.is_terminal);

    let night = scheme.route("r2").expect("Linie r2");
    assert_eq!(night.line_style, LineStyle::Dashed);
    assert_eq!(night.name, None);

    let klinikum = scheme.stop("005").expect("Haltestelle 005");
    assert!(klinikum.route_memberships().is_empty());
}

#[test]
fn test_write_then_parse_is_identical() {
    let scheme = parse_scheme(SAMPLE).expect("Fixture sollte parsen");

    let json = write_scheme(&scheme).expect("Serialisierung sollte funktionieren");
    let reparsed = parse_scheme(&json).expect("Export sollte wieder parsen");

    assert_eq!(scheme, reparsed);
}

#[test]
fn test_export_contains_memberships_and_camel_case() {
    let scheme = parse_scheme(SAMPLE).expect("Fixture sollte parsen");
    let json = write_scheme(&scheme).expect("Serialisierung sollte funktionieren");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");

    assert_eq!(value["stops"][0]["routes"], serde_json::json!(["r1", "r2"]));
    assert_eq!(value["stops"][0]["isTerminal"], serde_json::json!(true));
    assert_eq!(value["routes"][1]["lineStyle"], serde_json::json!("dashed"));
    assert_eq!(value["routes"][0]["lineWidth"], serde_json::json!(4.0));
    assert_eq!(
        value["routes"][0]["segments"][1]["points"]
            .as_array()
            .map(Vec::len),
        Some(3)
    );
}

#[test]
fn test_stale_memberships_are_recomputed_on_import() {
    let json = r##"{
        "stops": [
            { "id": "001", "name": "A", "x": 0, "y": 0, "routes": ["r9"] }
        ],
        "routes": []
    }"##;

    let scheme = parse_scheme(json).expect("Schema erwartet");
    assert!(scheme
        .stop("001")
        .expect("Haltestelle erwartet")
        .route_memberships()
        .is_empty());
}

#[test]
fn test_adding_stop_after_imported_max_id_does_not_overflow() {
    let json = r#"{
        "stops": [
            { "id": "18446744073709551615", "name": "Max", "x": 0, "y": 0 }
        ],
        "routes": []
    }"#;
    let mut scheme = parse_scheme(json).expect("Schema erwartet");

    let id = scheme.add_stop("B", None).expect("Haltestelle anlegen");

    assert_eq!(id, "001");
    assert_eq!(scheme.stop_count(), 2);
    scheme.check_invariants().expect("Invarianten");
}

use super::*;
use crate::core::{LabelPosition, LineStyle};

#[test]
fn test_optional_fields_default() {
    let json = r##"{
        "stops": [
            { "id": "001", "name": "A", "x": 10, "y": 20 }
        ],
        "routes": [
            { "id": "r1", "number": "5", "color": "#DC2626", "lineWidth": 4,
              "stops": ["001"], "segments": [] }
        ]
    }"##;

    let scheme = parse_scheme(json).expect("Schema erwartet");
    let stop = scheme.stop("001").expect("Haltestelle erwartet");
    assert_eq!(stop.label_position, LabelPosition::Top);
    assert!(!stop.is_terminal);
    assert_eq!(stop.route_memberships().len(), 1);

    let route = scheme.route("r1").expect("Linie erwartet");
    assert_eq!(route.line_style, LineStyle::Solid);
    assert_eq!(route.name, None);
}

#[test]
fn test_missing_routes_is_import_error() {
    let err = parse_scheme(r#"{ "stops": [] }"#).expect_err("Parser sollte fehlschlagen");
    assert!(matches!(err, EditError::ImportFormat(_)));
}

#[test]
fn test_invalid_json_is_import_error() {
    let err = parse_scheme("{ kein json").expect_err("Parser sollte fehlschlagen");
    assert!(matches!(err, EditError::ImportFormat(_)));
}

#[test]
fn test_duplicate_route_ids_are_rejected() {
    let json = r##"{
        "stops": [],
        "routes": [
            { "id": "r1", "number": "1", "color": "#000", "lineWidth": 4, "stops": [] },
            { "id": "r1", "number": "2", "color": "#000", "lineWidth": 4, "stops": [] }
        ]
    }"##;

    let err = parse_scheme(json).expect_err("Parser sollte fehlschlagen");
    assert!(matches!(err, EditError::ImportFormat(_)));
}

#[test]
fn test_invalid_references_are_dropped() {
    let json = r##"{
        "stops": [
            { "id": "001", "name": "A", "x": 0, "y": 0, "routes": ["falsch"] },
            { "id": "002", "name": "B", "x": 100, "y": 0 }
        ],
        "routes": [
            { "id": "r1", "number": "5", "color": "#DC2626", "lineWidth": 4,
              "stops": ["001", "404", "002", "001"],
              "segments": [
                { "from": "001", "to": "002", "points": [{"x": 0, "y": 0}, {"x": 100, "y": 0}] },
                { "from": "002", "to": "001", "points": [{"x": 100, "y": 0}, {"x": 0, "y": 0}] },
                { "from": "001", "to": "002", "points": [{"x": 0, "y": 0}, {"x": 100, "y": 0}] }
              ] }
        ]
    }"##;

    let scheme = parse_scheme(json).expect("Schema erwartet");
    let route = scheme.route("r1").expect("Linie erwartet");

    assert_eq!(route.stops(), ["001".to_string(), "002".to_string()].as_slice());
    assert_eq!(route.segment_count(), 1);
    let memberships: Vec<&str> = scheme
        .stop("001")
        .map(|stop| stop.route_memberships().iter().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(memberships, vec!["r1"]);
    assert!(scheme.check_invariants().is_ok());
}

#[test]
fn test_segment_with_single_point_is_dropped() {
    let json = r##"{
        "stops": [
            { "id": "001", "name": "A", "x": 0, "y": 0 },
            { "id": "002", "name": "B", "x": 100, "y": 0 }
        ],
        "routes": [
            { "id": "r1", "number": "5", "color": "#DC2626", "lineWidth": 4,
              "stops": ["001", "002"],
              "segments": [ { "from": "001", "to": "002", "points": [{"x": 0, "y": 0}] } ] }
        ]
    }"##;

    let scheme = parse_scheme(json).expect("Schema erwartet");
    assert_eq!(scheme.route("r1").map(|r| r.segment_count()), Some(0));
}

#[test]
fn test_coordinates_are_rounded_to_f32() {
    let json = r#"{
        "stops": [
            { "id": "001", "name": "A", "x": 16777217, "y": 0.1 }
        ],
        "routes": []
    }"#;

    let scheme = parse_scheme(json).expect("Schema erwartet");
    let position = scheme.stop_position("001").expect("Position erwartet");
    assert_eq!(position.x, 16_777_216.0);
    assert_eq!(position.y, 0.1_f32);
}

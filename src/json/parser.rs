//! Parser für Schema-Dateien im JSON-Format.

use std::collections::HashSet;

use glam::Vec2;

use super::dto::{RouteRecord, SchemeFile, StopRecord};
use crate::core::{EditError, Route, Scheme, Segment, Stop};

/// Parsed ein Schema aus einem JSON-String.
///
/// Ungültiges JSON, fehlende Pflichtfelder und doppelte IDs führen zu
/// [`EditError::ImportFormat`]. Unbekannte Haltestellen in Linien, doppelte
/// Linien-Haltestellen und ungültige Segmente werden verworfen und geloggt.
///
/// Koordinaten werden als `f32` übernommen (wie `glam::Vec2`). Ganzzahlen
/// jenseits von 2^24 und Nachkommastellen aus Dateien mit `f64`-Koordinaten
/// werden dabei auf die nächste darstellbare `f32`-Zahl gerundet.
pub fn parse_scheme(json_content: &str) -> Result<Scheme, EditError> {
    let file: SchemeFile = serde_json::from_str(json_content)
        .map_err(|err| EditError::ImportFormat(err.to_string()))?;

    let known_stops: HashSet<String> = file.stops.iter().map(|s| s.id.clone()).collect();
    let stops: Vec<Stop> = file.stops.into_iter().map(stop_from_record).collect();
    let routes: Vec<Route> = file
        .routes
        .into_iter()
        .map(|record| route_from_record(record, &known_stops))
        .collect();

    let scheme = Scheme::from_parts(stops, routes)?;
    log::info!(
        "Schema geparst: {} Haltestellen, {} Linien",
        scheme.stop_count(),
        scheme.route_count()
    );
    Ok(scheme)
}

fn stop_from_record(record: StopRecord) -> Stop {
    let mut stop = Stop::new(record.id, record.name, Vec2::new(record.x, record.y));
    stop.label_position = record.label_position;
    stop.is_terminal = record.is_terminal;
    stop
}

fn route_from_record(record: RouteRecord, known_stops: &HashSet<String>) -> Route {
    let mut route = Route::new(
        record.id,
        record.number,
        record.color,
        record.line_width,
        record.line_style,
    );
    route.name = record.name.filter(|name| !name.trim().is_empty());

    let mut seen = HashSet::new();
    for stop_id in record.stops {
        if !known_stops.contains(&stop_id) {
            log::warn!(
                "Linie '{}': unbekannte Haltestelle '{}' verworfen",
                route.id,
                stop_id
            );
            continue;
        }
        if !seen.insert(stop_id.clone()) {
            log::warn!(
                "Linie '{}': doppelte Haltestelle '{}' verworfen",
                route.id,
                stop_id
            );
            continue;
        }
        route.stops.push(stop_id);
    }

    for segment in record.segments {
        if !route.is_adjacent_pair(&segment.from, &segment.to) {
            log::warn!(
                "Linie '{}': Segment {}-{} verbindet kein benachbartes Paar, verworfen",
                route.id,
                segment.from,
                segment.to
            );
            continue;
        }
        if segment.points.len() < 2 {
            log::warn!(
                "Linie '{}': Segment {}-{} hat weniger als 2 Wegpunkte, verworfen",
                route.id,
                segment.from,
                segment.to
            );
            continue;
        }

        let segment = Segment {
            from: segment.from,
            to: segment.to,
            points: segment
                .points
                .iter()
                .map(|point| Vec2::new(point.x, point.y))
                .collect(),
        };
        let key = segment.key();
        if route.segments.contains_key(&key) {
            log::warn!(
                "Linie '{}': Segment {}-{} doppelt, verworfen",
                route.id,
                key.from,
                key.to
            );
            continue;
        }
        route.segments.insert(key, segment);
    }

    route
}

#[cfg(test)]
mod tests;

//! Writer für Schema-Dateien im JSON-Format.

use anyhow::Result;

use super::dto::{PointRecord, RouteRecord, SchemeFile, SegmentRecord, StopRecord};
use crate::core::Scheme;

/// Schreibt ein Schema als formatiertes JSON inklusive Linienzugehörigkeiten.
pub fn write_scheme(scheme: &Scheme) -> Result<String> {
    let file = SchemeFile {
        stops: scheme
            .stops()
            .map(|stop| StopRecord {
                id: stop.id.clone(),
                name: stop.name.clone(),
                x: stop.position.x,
                y: stop.position.y,
                label_position: stop.label_position,
                is_terminal: stop.is_terminal,
                routes: Some(stop.route_memberships().iter().cloned().collect()),
            })
            .collect(),
        routes: scheme
            .routes()
            .map(|route| RouteRecord {
                id: route.id.clone(),
                number: route.number.clone(),
                name: route.name.clone(),
                color: route.color.clone(),
                line_width: route.line_width,
                line_style: route.line_style,
                stops: route.stops().to_vec(),
                segments: route
                    .segments()
                    .map(|segment| SegmentRecord {
                        from: segment.from.clone(),
                        to: segment.to.clone(),
                        points: segment
                            .points
                            .iter()
                            .map(|p| PointRecord { x: p.x, y: p.y })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&file)?;
    log::info!(
        "Schema serialisiert: {} Haltestellen, {} Linien",
        scheme.stop_count(),
        scheme.route_count()
    );
    Ok(json)
}

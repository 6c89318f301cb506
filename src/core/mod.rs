//! Core-Domänentypen: Haltestellen, Linien, Segmente, Schema, Geometrie, Treffer-Tests.

pub mod error;
pub mod geometry;
pub mod route;
/// Core-Datenmodell eines Liniennetzplans
///
/// - Scheme: Container für alle Haltestellen und Linien
/// - Stop: Haltestelle mit Position und Beschriftung
/// - Route: Linie mit geordneten Haltestellen und Segmenten
pub mod scheme;
pub mod stop;

pub use error::{EditError, EntityKind};
pub use hit_test::{find_control_point_near, find_segment_near, find_stop_near, StopHitRadii};
pub use route::{
    is_valid_line_width, LineStyle, Route, RouteUpdate, Segment, SegmentKey, SegmentRef,
    LINE_WIDTHS,
};
pub use scheme::{AlignAnchor, AlignAxis, Scheme, StopPlacement};
pub use stop::{next_stop_id, LabelPosition, Stop, StopUpdate};

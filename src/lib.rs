//! Transit Scheme Editor Library.
//! Editor-Kern für schematische Liniennetzpläne als Library exportiert für
//! Tests, CLI und Wiederverwendung durch eine UI.

pub mod app;
pub mod core;
pub mod json;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorMode, Notification, PointerButton,
    UiState,
};
pub use core::{
    AlignAnchor, AlignAxis, EditError, LabelPosition, LineStyle, Route, Scheme, Segment,
    SegmentRef, Stop,
};
pub use json::{parse_scheme, write_scheme};
pub use shared::{EditorOptions, RenderQuality, RenderScene};

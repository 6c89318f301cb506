//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod interaction;
pub mod notifications;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Schema, Selektion, Editor).
pub mod state;
pub mod use_cases;

pub use crate::core::Scheme;
pub use crate::shared::RenderQuality;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use interaction::{DragState, NudgeDirection, PointerButton};
pub use notifications::Notification;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorMode, EditorState, SelectionState, UiState};

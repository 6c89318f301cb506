//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editor ===
            AppCommand::SetEditorMode { mode } => handlers::editing::set_editor_mode(state, mode),

            // === Haltestellen ===
            AppCommand::AddStop { name, position } => {
                handlers::editing::add_stop(state, &name, position)
            }
            AppCommand::AddStopAtPosition { position } => {
                handlers::editing::add_stop_at_position(state, position)
            }
            AppCommand::UpdateStop { stop_id, update } => {
                handlers::editing::update_stop(state, &stop_id, update)
            }
            AppCommand::DeleteStop { stop_id } => handlers::editing::delete_stop(state, &stop_id),
            AppCommand::DeleteSelectedStops => handlers::editing::delete_selected(state),

            // === Linien ===
            AppCommand::AddRoute {
                number,
                name,
                color,
                line_width,
                line_style,
            } => handlers::routes::add_route(
                state,
                &number,
                name.as_deref(),
                &color,
                line_width,
                line_style,
            ),
            AppCommand::UpdateRoute { route_id, update } => {
                handlers::routes::update_route(state, &route_id, update)
            }
            AppCommand::DeleteRoute { route_id } => handlers::routes::delete_route(state, &route_id),
            AppCommand::AddStopToRoute { route_id, stop_id } => {
                handlers::routes::add_stop(state, &route_id, &stop_id)
            }
            AppCommand::RemoveStopFromRoute { route_id, stop_id } => {
                handlers::routes::remove_stop(state, &route_id, &stop_id)
            }
            AppCommand::ReorderRouteStops { route_id, stop_ids } => {
                handlers::routes::reorder_stops(state, &route_id, &stop_ids)
            }
            AppCommand::AutoRoute { route_id } => handlers::routes::auto_route(state, &route_id),

            // === Segmente ===
            AppCommand::BeginEditSegment { segment } => {
                handlers::segments::begin_edit(state, segment)
            }
            AppCommand::EndEditSegment => handlers::segments::end_edit(state),
            AppCommand::AddSegmentPoint { segment } => {
                handlers::segments::add_point(state, &segment)
            }
            AppCommand::DeleteSegmentPoint { segment, index } => {
                handlers::segments::delete_point(state, &segment, index)
            }
            AppCommand::MoveSegmentPoint {
                segment,
                index,
                position,
            } => handlers::segments::move_point(state, &segment, index, position),

            // === Selektion ===
            AppCommand::SelectStop { stop_id, additive } => {
                handlers::selection::select_stop(state, &stop_id, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::SelectAllStops => handlers::selection::select_all(state),
            AppCommand::AlignSelected { axis } => handlers::selection::align(state, axis),
            AppCommand::BeginMoveSelectedStops => handlers::selection::begin_move(state),
            AppCommand::MoveSelectedStops { delta } => {
                handlers::selection::move_selected(state, delta)
            }

            // === Drag ===
            AppCommand::BeginStopDrag { stop_id, pos } => {
                handlers::drag::begin_stop_drag(state, &stop_id, pos)
            }
            AppCommand::BeginControlPointDrag { segment, index } => {
                handlers::drag::begin_control_point_drag(state, segment, index)
            }
            AppCommand::DragTo { pos } => handlers::drag::drag_to(state, pos),
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Datei & Export ===
            AppCommand::NewScheme => handlers::file_io::new_scheme(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::ImportScheme { json } => handlers::file_io::import(state, &json),
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::ExportPng { path } => handlers::file_io::export_png(state, &path)?,
            AppCommand::ExportSvg { path } => handlers::file_io::export_svg(state, &path)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

//! Use-Case: Haltestellen anlegen, ändern und löschen.

use super::apply_scheme_edit;
use crate::app::notifications::Notification;
use crate::app::AppState;
use crate::core::StopUpdate;

/// Legt eine Haltestelle an; ohne Position wird automatisch platziert.
pub fn add_stop(state: &mut AppState, name: &str, position: Option<glam::Vec2>) -> Option<String> {
    let placement = state.options.stop_placement();
    let id = apply_scheme_edit(state, "Haltestelle anlegen", |scheme| {
        scheme.add_stop_placed(name, position, &placement)
    })?;

    log::info!("Haltestelle {} ('{}') angelegt", id, name.trim());
    state.notify(Notification::Info(format!(
        "Haltestelle \"{}\" hinzugefügt",
        name.trim()
    )));
    Some(id)
}

/// Legt per Klick eine Haltestelle an der Position an (Name: Präfix + ID).
pub fn add_stop_at_position(state: &mut AppState, position: glam::Vec2) -> Option<String> {
    let name = format!(
        "{} {}",
        state.options.new_stop_name_prefix,
        state.scheme.next_stop_id()
    );
    add_stop(state, &name, Some(position))
}

/// Übernimmt ein Teil-Update einer Haltestelle.
pub fn update_stop(state: &mut AppState, stop_id: &str, update: StopUpdate) {
    if apply_scheme_edit(state, "Haltestelle ändern", |scheme| {
        scheme.update_stop(stop_id, update)
    })
    .is_some()
    {
        log::info!("Haltestelle {} geändert", stop_id);
    }
}

/// Löscht eine Haltestelle samt aller Linien-Vorkommen.
pub fn delete_stop(state: &mut AppState, stop_id: &str) {
    let reconnect = state.options.reconnect_on_delete;
    let Some(stop) = apply_scheme_edit(state, "Haltestelle löschen", |scheme| {
        scheme.delete_stop(stop_id, reconnect)
    }) else {
        return;
    };

    log::info!(
        "Haltestelle {} gelöscht ({} Linien betroffen)",
        stop.id,
        stop.route_memberships().len()
    );
    state.notify(Notification::Info(format!(
        "Haltestelle \"{}\" gelöscht",
        stop.name
    )));
}

/// Löscht alle selektierten Haltestellen in einem Undo-Schritt.
pub fn delete_selected_stops(state: &mut AppState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let ids: Vec<String> = state.selection.selected_stop_ids.iter().cloned().collect();
    let reconnect = state.options.reconnect_on_delete;
    let deleted = apply_scheme_edit(state, "Auswahl löschen", |scheme| {
        let mut deleted = 0;
        for id in &ids {
            if scheme.stop(id).is_some() {
                scheme.delete_stop(id, reconnect)?;
                deleted += 1;
            }
        }
        Ok(deleted)
    });

    if let Some(count) = deleted {
        state.selection.ids_mut().clear();
        log::info!("{} Haltestellen gelöscht", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn click_created_stop_uses_prefix_and_id() {
        let mut state = AppState::new();
        let id = add_stop_at_position(&mut state, Vec2::new(40.0, 60.0)).expect("ID erwartet");

        let stop = state.scheme.stop(&id).expect("Haltestelle erwartet");
        assert_eq!(stop.name, "Haltestelle 001");
        assert_eq!(stop.position, Vec2::new(40.0, 60.0));
        assert!(state.can_undo());
    }

    #[test]
    fn delete_selected_clears_selection() {
        let mut state = AppState::new();
        add_stop(&mut state, "A", Some(Vec2::ZERO));
        add_stop(&mut state, "B", Some(Vec2::ONE));
        state.selection.ids_mut().insert("001".into());
        state.selection.ids_mut().insert("002".into());

        delete_selected_stops(&mut state);

        assert_eq!(state.stop_count(), 0);
        assert!(state.selection.is_empty());
    }
}

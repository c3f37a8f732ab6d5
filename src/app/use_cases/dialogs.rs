//! Use-Case-Funktionen für Marker-Interaktion und Dialog-Zustand.
//!
//! Die Darstellung der Dialoge übernimmt der Host; hier wird nur
//! festgehalten, welcher Wegpunkt wovon betroffen ist.

use crate::app::AppState;
use crate::core::WaypointId;

fn known(state: &AppState, id: WaypointId, action: &str) -> bool {
    let exists = state.route.contains(id);
    if !exists {
        log::debug!("{} ignoriert: Wegpunkt {} existiert nicht", action, id);
    }
    exists
}

/// Öffnet das Aktionsmenü (Info / Löschen) eines Wegpunkts.
pub fn open_waypoint_actions(state: &mut AppState, id: WaypointId) {
    if known(state, id, "Aktionsmenü") {
        state.ui.action_menu = Some(id);
    }
}

/// Schließt das Aktionsmenü.
pub fn close_waypoint_actions(state: &mut AppState) {
    state.ui.action_menu = None;
}

/// Öffnet das Info-Fenster eines Wegpunkts.
pub fn show_waypoint_info(state: &mut AppState, id: WaypointId) {
    if known(state, id, "Info-Fenster") {
        state.ui.info_window = Some(id);
        state.request_redraw();
    }
}

/// Merkt einen Wegpunkt zur Löschbestätigung vor.
pub fn request_delete_confirmation(state: &mut AppState, id: WaypointId) {
    if known(state, id, "Löschbestätigung") {
        state.ui.pending_delete = Some(id);
    }
}

/// Schließt die Löschbestätigung ohne zu löschen.
pub fn close_delete_confirmation(state: &mut AppState) {
    state.ui.pending_delete = None;
}

/// Beginnt das Ziehen eines Markers; ein offenes Info-Fenster wird geschlossen.
pub fn begin_waypoint_drag(state: &mut AppState, id: WaypointId) {
    if known(state, id, "Drag") {
        state.ui.dragging = Some(id);
        state.ui.info_window = None;
    }
}

/// Beendet das Ziehen eines Markers.
pub fn end_waypoint_drag(state: &mut AppState, id: WaypointId) {
    if state.ui.dragging == Some(id) {
        state.ui.dragging = None;
    }
}

/// Reiht eine Kurzmeldung für den Host ein.
pub fn show_notification(state: &mut AppState, message: String) {
    log::debug!("Kurzmeldung: {}", message);
    state.ui.notify(message);
}

//! Handler für Dialog-State und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::WaypointId;
use crate::shared::RouteOptions;

/// Öffnet das Aktionsmenü eines Wegpunkts.
pub fn open_waypoint_actions(state: &mut AppState, id: WaypointId) {
    use_cases::dialogs::open_waypoint_actions(state, id);
}

/// Schließt das Aktionsmenü.
pub fn close_waypoint_actions(state: &mut AppState) {
    use_cases::dialogs::close_waypoint_actions(state);
}

/// Öffnet das Info-Fenster eines Wegpunkts.
pub fn show_waypoint_info(state: &mut AppState, id: WaypointId) {
    use_cases::dialogs::show_waypoint_info(state, id);
}

/// Fragt die Löschbestätigung für einen Wegpunkt an.
pub fn request_delete_confirmation(state: &mut AppState, id: WaypointId) {
    use_cases::dialogs::request_delete_confirmation(state, id);
}

/// Schließt die Löschbestätigung.
pub fn close_delete_confirmation(state: &mut AppState) {
    use_cases::dialogs::close_delete_confirmation(state);
}

/// Beginnt einen Marker-Drag.
pub fn begin_waypoint_drag(state: &mut AppState, id: WaypointId) {
    use_cases::dialogs::begin_waypoint_drag(state, id);
}

/// Beendet einen Marker-Drag.
pub fn end_waypoint_drag(state: &mut AppState, id: WaypointId) {
    use_cases::dialogs::end_waypoint_drag(state, id);
}

/// Zeigt eine Kurzmeldung an.
pub fn show_notification(state: &mut AppState, message: String) {
    use_cases::dialogs::show_notification(state, message);
}

/// Übernimmt neue Optionen (und persistiert sie, falls ein Pfad gesetzt ist).
pub fn apply_options(state: &mut AppState, options: RouteOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options)
}

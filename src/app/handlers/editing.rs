//! Handler für Wegpunkt-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{GeoPoint, WaypointId};

/// Fügt einen Wegpunkt am Routenende hinzu.
pub fn add_waypoint(state: &mut AppState, position: GeoPoint, render_now: bool) {
    use_cases::editing::add_waypoint(state, position, render_now);
}

/// Verschiebt einen Wegpunkt.
pub fn move_waypoint(state: &mut AppState, id: WaypointId, position: GeoPoint, notify: bool) {
    use_cases::editing::move_waypoint(state, id, position, notify);
}

/// Entfernt einen Wegpunkt.
pub fn remove_waypoint(state: &mut AppState, id: WaypointId) {
    use_cases::editing::remove_waypoint(state, id);
}

/// Merkt den nächsten Wegpunkt zur Long-Press-Position zum Löschen vor.
pub fn request_delete_nearest(state: &mut AppState, position: GeoPoint, threshold_m: f64) {
    use_cases::editing::request_delete_nearest(state, position, threshold_m);
}

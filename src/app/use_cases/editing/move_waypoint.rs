//! Use-Case: Wegpunkt verschieben (Marker-Drag).

use crate::app::AppState;
use crate::core::{GeoPoint, WaypointId};

/// Verschiebt einen Wegpunkt. Unbekannte IDs werden still ignoriert.
///
/// Mit `notify` (Drag-Ende) wird nach erfolgreicher Verschiebung eine
/// Kurzmeldung eingereiht.
pub fn move_waypoint(state: &mut AppState, id: WaypointId, position: GeoPoint, notify: bool) {
    if !state.route.move_waypoint(id, position) {
        log::debug!("Verschieben ignoriert: Wegpunkt {} existiert nicht", id);
        return;
    }

    if notify {
        state.ui.notify("Waypoint position updated");
    }
    state.request_redraw();
    log::debug!("Wegpunkt {} verschoben nach {}", id, position);
}

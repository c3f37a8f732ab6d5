//! Use-Case: Wegpunkt löschen.

use crate::app::AppState;
use crate::core::{GeoPoint, WaypointId};

/// Entfernt einen Wegpunkt und schließt alle UI-Verweise auf ihn.
/// Unbekannte IDs werden ignoriert.
pub fn remove_waypoint(state: &mut AppState, id: WaypointId) {
    let Some(removed) = state.route.remove_waypoint(id) else {
        log::debug!("Löschen ignoriert: Wegpunkt {} existiert nicht", id);
        return;
    };

    let ui = &mut state.ui;
    for slot in [
        &mut ui.action_menu,
        &mut ui.info_window,
        &mut ui.pending_delete,
        &mut ui.dragging,
    ] {
        if *slot == Some(id) {
            *slot = None;
        }
    }

    ui.notify("Waypoint deleted");
    state.request_redraw();

    log::info!(
        "Wegpunkt {} (Rang {}) gelöscht, {} Wegpunkte verbleiben",
        id,
        removed.rank(),
        state.route.waypoint_count()
    );
}

/// Sucht den nächsten Wegpunkt zur Long-Press-Position und merkt ihn
/// zur Löschbestätigung vor. Ohne Treffer passiert nichts.
pub fn request_delete_nearest(state: &mut AppState, position: GeoPoint, threshold_m: f64) {
    match state.route.nearest_waypoint(position, threshold_m) {
        Some(hit) => {
            state.ui.pending_delete = Some(hit.waypoint_id);
            log::info!(
                "Wegpunkt {} zum Löschen vorgemerkt ({:.1} m entfernt)",
                hit.waypoint_id,
                hit.distance_m
            );
        }
        None => {
            log::debug!(
                "Kein Wegpunkt innerhalb von {:.0} m um {} gefunden",
                threshold_m,
                position
            );
        }
    }
}

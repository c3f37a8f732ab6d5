//! Use-Case-Funktionen für die Kartenansicht.

use crate::app::AppState;
use crate::core::camera::frame_points;

/// Passt die Ansicht so an, dass alle Wegpunkte sichtbar sind.
///
/// Eine leere Route erzeugt nur eine Kurzmeldung, die Ansicht bleibt unverändert.
pub fn center_on_route(state: &mut AppState) {
    let points = state.route.polyline();
    match frame_points(
        &points,
        state.options.single_point_zoom,
        state.options.frame_margin_ratio,
    ) {
        Ok(target) => {
            state.view.target = target;
            state.view.camera.apply(&target);
            state.request_redraw();
            log::info!("Ansicht auf {} Wegpunkte eingepasst", points.len());
        }
        Err(e) => {
            state.ui.notify("No waypoints to center on");
            log::info!("Zentrieren abgebrochen: {}", e);
        }
    }
}

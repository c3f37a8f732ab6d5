//! Use-Case: Neuen Wegpunkt am Routenende anfügen.

use crate::app::AppState;
use crate::core::{GeoPoint, WaypointId};

/// Hängt einen Wegpunkt an die Route an.
///
/// Mit `render_now = false` wird kein Neuzeichnen angefordert; Stapel-Aufrufe
/// (z.B. beim Start) fordern am Ende selbst einmal an.
pub fn add_waypoint(state: &mut AppState, position: GeoPoint, render_now: bool) -> WaypointId {
    let id = state.route.add_waypoint(position);

    if render_now {
        state.request_redraw();
    }

    log::info!(
        "Wegpunkt {} an Position ({:.6}, {:.6}) hinzugefügt ({} Wegpunkte, {} Pfeile)",
        id,
        position.latitude,
        position.longitude,
        state.route.waypoint_count(),
        state.route.arrow_count()
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_now_controls_redraw_request() {
        let mut state = AppState::new();

        add_waypoint(&mut state, GeoPoint::new(25.0350, 121.5674), false);
        assert!(!state.take_redraw_request());

        add_waypoint(&mut state, GeoPoint::new(25.0340, 121.5664), true);
        assert!(state.take_redraw_request());
        assert_eq!(state.route.arrow_count(), 1);
    }
}

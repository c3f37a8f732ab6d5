//! Builder für Routen-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{ArrowView, RouteScene, WaypointView};

/// Baut eine RouteScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RouteScene {
    let waypoints = state
        .route
        .waypoints_iter()
        .map(|w| WaypointView {
            id: w.id,
            position: w.position,
            rank: w.rank(),
            label: w.label(),
            title: w.title(),
        })
        .collect();

    // Brückenpfeile nach einem Löschen liegen im Speicher hinten
    let mut arrows: Vec<ArrowView> = state
        .route
        .arrows_iter()
        .map(|a| ArrowView {
            key: a.key,
            position: a.position,
            bearing_deg: a.bearing_deg,
            rotation_deg: a.marker_rotation_deg(),
        })
        .collect();
    arrows.sort_by_key(|a| {
        (
            state.route.waypoint(a.key.target).map_or(usize::MAX, |w| w.rank()),
            a.key.index,
        )
    });

    RouteScene {
        polyline: state.route.polyline(),
        waypoints,
        arrows,
        drone: state.drone.drone,
        tile_source: state.tiles.active().cloned(),
        tile_switch_label: state.tiles.switch_label(),
        view_target: state.view.target,
    }
}

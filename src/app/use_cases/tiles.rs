//! Use-Case: Kachelquelle wechseln.

use crate::app::AppState;

/// Aktiviert die nächste Kachelquelle in der Umschalt-Reihenfolge.
pub fn cycle_tile_source(state: &mut AppState) {
    let name = state.tiles.advance().name.clone();
    state.request_redraw();
    log::info!(
        "Kachelquelle gewechselt: {} (als nächstes: {})",
        name,
        state.tiles.upcoming().name
    );
}

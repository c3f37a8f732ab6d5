//! Handler für Kartenansicht und Kachelquellen.

use crate::app::use_cases;
use crate::app::AppState;

/// Passt die Ansicht auf die Route ein.
pub fn center_on_route(state: &mut AppState) {
    use_cases::camera::center_on_route(state);
}

/// Wechselt zur nächsten Kachelquelle.
pub fn cycle_tile_source(state: &mut AppState) {
    use_cases::tiles::cycle_tile_source(state);
}

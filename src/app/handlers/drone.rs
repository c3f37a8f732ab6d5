//! Handler für die simulierte Drohne.

use std::time::Instant;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Startet den Simulations-Timer.
pub fn start_timer(state: &mut AppState, now: Instant) {
    use_cases::drone::start_timer(state, now);
}

/// Stoppt den Simulations-Timer.
pub fn stop_timer(state: &mut AppState) {
    use_cases::drone::stop_timer(state);
}

/// Prüft den Timer und simuliert ggf. einen Schritt.
pub fn poll_timer(state: &mut AppState, now: Instant) {
    use_cases::drone::poll_timer(state, now);
}

/// Übernimmt eine gemeldete Drohnen-Position.
pub fn update_position(state: &mut AppState, position: GeoPoint, heading_deg: f64) {
    use_cases::drone::update_position(state, position, heading_deg);
}

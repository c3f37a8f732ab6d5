//! Use-Case-Funktionen für die simulierte Drohne.

use std::time::Instant;

use crate::app::AppState;
use crate::core::GeoPoint;

/// Plant den Simulations-Timer ein (erster Schritt beim nächsten Poll).
pub fn start_timer(state: &mut AppState, now: Instant) {
    if state.drone.timer.is_running() {
        log::debug!("Drohnen-Timer läuft bereits");
        return;
    }
    state.drone.timer.start(now);
    log::info!(
        "Drohnen-Timer gestartet (Intervall {} ms)",
        state.drone.timer.interval().as_millis()
    );
}

/// Entfernt den ausstehenden Simulations-Schritt.
pub fn stop_timer(state: &mut AppState) {
    if !state.drone.timer.is_running() {
        return;
    }
    state.drone.timer.stop();
    log::info!("Drohnen-Timer gestoppt");
}

/// Führt einen Simulations-Schritt aus, wenn der Timer fällig ist.
pub fn poll_timer(state: &mut AppState, now: Instant) {
    if !state.drone.timer.poll(now) {
        return;
    }

    let drone = &mut state.drone;
    let walk = drone.walk;
    walk.step(&mut drone.drone, &mut drone.rng);
    state.request_redraw();

    log::debug!(
        "Drohne bei {} (Kurs {:.1}°)",
        state.drone.drone.position,
        state.drone.drone.heading_deg
    );
}

/// Setzt Position und Kurs der Drohne explizit (z.B. aus Telemetrie).
pub fn update_position(state: &mut AppState, position: GeoPoint, heading_deg: f64) {
    state.drone.drone.update(position, heading_deg);
    state.request_redraw();
    log::debug!("Drohnen-Position gemeldet: {} (Kurs {:.1}°)", position, heading_deg);
}

//! Simulierte Drohne mit Zufallsbewegung.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arrow::normalize_degrees;
use super::GeoPoint;

/// Position und Kurs der Drohne
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    /// Aktuelle Position
    pub position: GeoPoint,
    /// Kurs in Grad [0, 360)
    pub heading_deg: f64,
}

impl Drone {
    /// Erstellt eine Drohne an der Startposition
    pub fn new(position: GeoPoint, heading_deg: f64) -> Self {
        Self {
            position,
            heading_deg: normalize_degrees(heading_deg),
        }
    }

    /// Setzt Position und Kurs direkt (z.B. aus echter Telemetrie).
    pub fn update(&mut self, position: GeoPoint, heading_deg: f64) {
        self.position = position;
        self.heading_deg = normalize_degrees(heading_deg);
    }
}

/// Parameter der Zufallsbewegung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneWalk {
    /// Breite des Positions-Intervalls in Grad (Δ ∈ [−step/2, step/2))
    pub step_deg: f64,
    /// Maximale Kursänderung pro Schritt in Grad (Δ ∈ [0, max))
    pub heading_step_deg: f64,
}

impl DroneWalk {
    /// Führt einen Zufallsschritt aus.
    pub fn step<R: Rng + ?Sized>(&self, drone: &mut Drone, rng: &mut R) {
        let delta_lat = (rng.random::<f64>() - 0.5) * self.step_deg;
        let delta_lon = (rng.random::<f64>() - 0.5) * self.step_deg;
        let delta_heading = rng.random::<f64>() * self.heading_step_deg;

        drone.update(
            drone.position.offset(delta_lat, delta_lon),
            drone.heading_deg + delta_heading,
        );
    }
}

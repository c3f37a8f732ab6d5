//! Einzelner Wegpunkt der Route.

use super::GeoPoint;
use serde::{Deserialize, Serialize};

/// Stabile, opake Wegpunkt-ID (wird nie wiederverwendet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaypointId(pub u64);

impl std::fmt::Display for WaypointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vom Benutzer gesetzter Wegpunkt
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Eindeutige ID
    pub id: WaypointId,
    /// Position in Grad
    pub position: GeoPoint,
    /// Laufende Nummer in der Route (1-basiert, nur Anzeige)
    rank: usize,
}

impl Waypoint {
    /// Erstellt einen neuen Wegpunkt
    pub fn new(id: WaypointId, position: GeoPoint, rank: usize) -> Self {
        Self { id, position, rank }
    }

    /// Laufende Nummer (1..N) zum Zeitpunkt der letzten Nummerierung
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Nummer als Marker-Beschriftung
    pub fn label(&self) -> String {
        self.rank.to_string()
    }

    /// Titel fuer Info-Fenster
    pub fn title(&self) -> String {
        format!("Waypoint {}", self.rank)
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}

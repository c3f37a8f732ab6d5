//! Geografischer Punkt (WGS84, Grad) und Konvertierungen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position in Grad (Breite, Länge), doppelte Genauigkeit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub latitude: f64,
    /// Längengrad in Grad
    pub longitude: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Lineare Interpolation zwischen zwei Punkten (keine Großkreis-Interpolation).
    ///
    /// `ratio = 0.0` liefert `self`, `ratio = 1.0` liefert `other`.
    pub fn lerp(self, other: GeoPoint, ratio: f64) -> GeoPoint {
        DVec2::from(self).lerp(DVec2::from(other), ratio).into()
    }

    /// Verschiebt den Punkt um ein Grad-Delta.
    pub fn offset(self, delta_lat: f64, delta_lon: f64) -> GeoPoint {
        GeoPoint::new(self.latitude + delta_lat, self.longitude + delta_lon)
    }
}

/// x = Breite, y = Länge (gleiche Reihenfolge wie die Bearing-Formel atan2(Δlon, Δlat)).
impl From<GeoPoint> for DVec2 {
    fn from(p: GeoPoint) -> Self {
        DVec2::new(p.latitude, p.longitude)
    }
}

impl From<DVec2> for GeoPoint {
    fn from(v: DVec2) -> Self {
        GeoPoint::new(v.x, v.y)
    }
}

/// geo verwendet x = Länge, y = Breite.
impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo::Coord<f64>> for GeoPoint {
    fn from(c: geo::Coord<f64>) -> Self {
        GeoPoint::new(c.y, c.x)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

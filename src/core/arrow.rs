//! Richtungspfeile entlang eines Routen-Segments.

use super::{GeoPoint, WaypointId};
use serde::{Deserialize, Serialize};

/// Schlüssel eines Pfeils: Ziel-Wegpunkt des Segments + Pfeil-Index (1..=K).
///
/// Das Segment A→B gehört immer zu B. Verschieben aktualisiert dieselben
/// Schlüssel, Löschen entfernt über dasselbe Schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrowKey {
    /// Ziel-Wegpunkt des Segments
    pub target: WaypointId,
    /// Pfeil-Index innerhalb des Segments (1-basiert)
    pub index: u32,
}

impl ArrowKey {
    /// Erstellt einen neuen Schlüssel
    pub fn new(target: WaypointId, index: u32) -> Self {
        Self { target, index }
    }

    /// Alle Schlüssel eines Segments bei `arrows_per_segment` Pfeilen.
    pub fn for_segment(target: WaypointId, arrows_per_segment: u32) -> impl Iterator<Item = Self> {
        (1..=arrows_per_segment).map(move |i| Self::new(target, i))
    }
}

impl std::fmt::Display for ArrowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.target, self.index)
    }
}

/// Obergrenze für Pfeile pro Segment
pub const MAX_ARROWS_PER_SEGMENT: u32 = 16;

/// Abgeleiteter Richtungspfeil
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowIndicator {
    /// Schlüssel (Ziel-Wegpunkt + Index)
    pub key: ArrowKey,
    /// Interpolierte Position auf dem Segment
    pub position: GeoPoint,
    /// Kurs in Grad, im Uhrzeigersinn ab Nord [0, 360)
    pub bearing_deg: f64,
}

impl ArrowIndicator {
    /// Rotation im Gegenuhrzeigersinn, wie sie die Marker der Kartenbibliothek erwarten.
    pub fn marker_rotation_deg(&self) -> f64 {
        marker_rotation(self.bearing_deg)
    }
}

/// Kurs von `from` nach `to` in Grad [0, 360), 0 = Nord, 90 = Ost.
///
/// Planare Näherung: atan2(Δlon, Δlat), keine Großkreis-Peilung.
pub fn bearing_deg(from: GeoPoint, to: GeoPoint) -> f64 {
    let raw = (to.longitude - from.longitude)
        .atan2(to.latitude - from.latitude)
        .to_degrees();
    normalize_degrees(raw)
}

/// Rechnet einen Kurs in die Marker-Rotation (Gegenuhrzeigersinn) um: (360 − bearing) mod 360.
pub fn marker_rotation(bearing_deg: f64) -> f64 {
    normalize_degrees(360.0 - bearing_deg)
}

/// Normalisiert einen Winkel auf [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let n = deg.rem_euclid(360.0);
    // rem_euclid kann für winzige negative Werte exakt 360.0 liefern
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Berechnet alle Pfeile des Segments `start` → `end`.
///
/// Die Pfeile liegen bei `i / (K + 1)` für `i = 1..=K` und teilen sich den Kurs.
pub fn segment_arrows(
    target: WaypointId,
    start: GeoPoint,
    end: GeoPoint,
    arrows_per_segment: u32,
) -> Vec<ArrowIndicator> {
    let bearing = bearing_deg(start, end);
    let step = 1.0 / (f64::from(arrows_per_segment) + 1.0);

    ArrowKey::for_segment(target, arrows_per_segment)
        .map(|key| ArrowIndicator {
            key,
            position: start.lerp(end, step * f64::from(key.index)),
            bearing_deg: bearing,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ORIGIN: GeoPoint = GeoPoint::new(0.0, 0.0);

    #[test]
    fn bearing_due_north_is_zero() {
        assert_relative_eq!(bearing_deg(ORIGIN, GeoPoint::new(1.0, 0.0)), 0.0);
    }

    #[test]
    fn bearing_due_east_is_ninety() {
        assert_relative_eq!(bearing_deg(ORIGIN, GeoPoint::new(0.0, 1.0)), 90.0);
    }

    #[test]
    fn bearing_south_and_west() {
        assert_relative_eq!(bearing_deg(ORIGIN, GeoPoint::new(-1.0, 0.0)), 180.0);
        assert_relative_eq!(bearing_deg(ORIGIN, GeoPoint::new(0.0, -1.0)), 270.0);
    }

    #[test]
    fn bearing_identische_punkte_ist_null() {
        assert_relative_eq!(bearing_deg(ORIGIN, ORIGIN), 0.0);
    }

    #[test]
    fn marker_rotation_is_counter_clockwise() {
        assert_relative_eq!(marker_rotation(0.0), 0.0);
        assert_relative_eq!(marker_rotation(90.0), 270.0);
        assert_relative_eq!(marker_rotation(270.0), 90.0);
    }

    #[test]
    fn single_arrow_sits_on_midpoint() {
        let arrows = segment_arrows(WaypointId(7), ORIGIN, GeoPoint::new(2.0, 4.0), 1);

        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].key, ArrowKey::new(WaypointId(7), 1));
        assert_relative_eq!(arrows[0].position.latitude, 1.0);
        assert_relative_eq!(arrows[0].position.longitude, 2.0);
    }

    #[test]
    fn two_arrows_are_evenly_spaced_with_shared_bearing() {
        let end = GeoPoint::new(3.0, 0.0);
        let arrows = segment_arrows(WaypointId(2), ORIGIN, end, 2);

        assert_eq!(arrows.len(), 2);
        assert_relative_eq!(arrows[0].position.latitude, 1.0, epsilon = 1e-12);
        assert_relative_eq!(arrows[1].position.latitude, 2.0, epsilon = 1e-12);
        assert_eq!(arrows[0].bearing_deg, arrows[1].bearing_deg);
        assert_eq!(arrows[1].key.to_string(), "2_2");
    }
}

//! Nächster-Wegpunkt-Suche über Großkreis-Distanzen.
//!
//! Routen bleiben klein (Dutzende Wegpunkte), daher lineare Suche statt Baum.

use geo::{Distance, Haversine};

use super::{GeoPoint, Waypoint, WaypointId};

/// Ergebnis einer Distanzabfrage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointMatch {
    /// ID des gefundenen Wegpunkts
    pub waypoint_id: WaypointId,
    /// Großkreis-Distanz zum Suchpunkt in Metern
    pub distance_m: f64,
}

/// Großkreis-Distanz (Haversine) in Metern.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine.distance(geo::Point::from(a), geo::Point::from(b))
}

/// Findet den nächstgelegenen Wegpunkt, sofern er strikt näher als `threshold_m` liegt.
///
/// Bei Gleichstand gewinnt der erste Wegpunkt in Iterationsreihenfolge.
pub fn nearest_within<'a>(
    waypoints: impl IntoIterator<Item = &'a Waypoint>,
    query: GeoPoint,
    threshold_m: f64,
) -> Option<WaypointMatch> {
    let mut best: Option<WaypointMatch> = None;

    for waypoint in waypoints {
        let distance = distance_m(waypoint.position, query);
        if best.is_none_or(|b| distance < b.distance_m) {
            best = Some(WaypointMatch {
                waypoint_id: waypoint.id,
                distance_m: distance,
            });
        }
    }

    best.filter(|m| m.distance_m < threshold_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wp(id: u64, lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(WaypointId(id), GeoPoint::new(lat, lon), id as usize)
    }

    #[test]
    fn distance_of_one_millidegree_latitude_is_about_111_meters() {
        let d = distance_m(GeoPoint::new(25.0, 121.0), GeoPoint::new(25.001, 121.0));
        assert_relative_eq!(d, 111.2, epsilon = 0.5);
    }

    #[test]
    fn nearest_returns_none_when_everything_is_far() {
        let points = [wp(1, 25.0350, 121.5674), wp(2, 25.0340, 121.5664)];

        let hit = nearest_within(&points, GeoPoint::new(25.0300, 121.5600), 50.0);
        assert!(hit.is_none());
    }

    #[test]
    fn nearest_returns_unique_candidate_within_threshold() {
        let points = [wp(1, 25.0350, 121.5674), wp(2, 25.0340, 121.5664)];

        let hit = nearest_within(&points, GeoPoint::new(25.03402, 121.56642), 50.0)
            .expect("Treffer erwartet");
        assert_eq!(hit.waypoint_id, WaypointId(2));
        assert!(hit.distance_m < 5.0);
    }

    #[test]
    fn gleichstand_bevorzugt_ersten_wegpunkt() {
        let points = [wp(1, 25.0, 121.0), wp(2, 25.0, 121.0)];

        let hit = nearest_within(&points, GeoPoint::new(25.0, 121.0), 50.0)
            .expect("Treffer erwartet");
        assert_eq!(hit.waypoint_id, WaypointId(1));
    }

    #[test]
    fn threshold_is_exclusive() {
        let points = [wp(1, 0.0, 0.0)];
        let query = GeoPoint::new(0.0, 0.0);

        assert!(nearest_within(&points, query, 0.0).is_none());
        assert!(nearest_within(std::iter::empty(), query, 50.0).is_none());
    }
}

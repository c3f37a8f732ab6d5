//! Kartenansicht: Mittelpunkt, Zoom und Einpassen der Route.

use geo::{BoundingRect, MultiPoint};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{GeoPoint, MapError};

/// Achsparallele Grenzen in Grad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Nördlichste Breite
    pub north: f64,
    /// Südlichste Breite
    pub south: f64,
    /// Östlichste Länge
    pub east: f64,
    /// Westlichste Länge
    pub west: f64,
}

impl GeoBounds {
    /// Bounding Box aller Punkte (None bei leerer Eingabe).
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let multi: MultiPoint<f64> = points.iter().map(|p| geo::Point::from(*p)).collect();
        let rect = multi.bounding_rect()?;
        Some(Self {
            north: rect.max().y,
            south: rect.min().y,
            east: rect.max().x,
            west: rect.min().x,
        })
    }

    /// Vergrößert jede Seite um `ratio` der jeweiligen Spannweite.
    pub fn with_margin(self, ratio: f64) -> Self {
        let margin = self.span() * ratio;
        Self {
            north: self.north + margin.x,
            south: self.south - margin.x,
            east: self.east + margin.y,
            west: self.west - margin.y,
        }
    }

    /// Spannweite (x = Breite, y = Länge) in Grad
    pub fn span(&self) -> DVec2 {
        DVec2::new(self.north - self.south, self.east - self.west)
    }

    /// Mittelpunkt der Grenzen
    pub fn center(&self) -> GeoPoint {
        ((DVec2::new(self.south, self.west) + DVec2::new(self.north, self.east)) * 0.5).into()
    }
}

/// Vom Renderer anzufahrendes Ziel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewTarget {
    /// Auf einen Punkt mit fester Zoomstufe animieren
    Point {
        /// Zielpunkt
        center: GeoPoint,
        /// Zoomstufe
        zoom: f64,
    },
    /// Grenzen vollständig einpassen (Zoom wählt der Renderer)
    Bounds(GeoBounds),
}

/// Kartenansicht mit Mittelpunkt und Zoom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCamera {
    /// Mittelpunkt der Ansicht
    pub center: GeoPoint,
    /// Zoomstufe der Kachelpyramide
    pub zoom: f64,
}

impl MapCamera {
    /// Erstellt eine neue Ansicht
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Übernimmt ein Ziel (bei `Bounds` nur den Mittelpunkt).
    pub fn apply(&mut self, target: &ViewTarget) {
        match *target {
            ViewTarget::Point { center, zoom } => {
                self.center = center;
                self.zoom = zoom;
            }
            ViewTarget::Bounds(bounds) => self.center = bounds.center(),
        }
    }
}

/// Berechnet das Ansichtsziel, das alle Wegpunkte zeigt.
///
/// - Keine Punkte → `MapError::EmptyRoute`
/// - Ein Punkt → Punkt mit `single_point_zoom`
/// - Sonst → Bounding Box plus `margin_ratio` Rand auf jeder Seite
pub fn frame_points(
    points: &[GeoPoint],
    single_point_zoom: f64,
    margin_ratio: f64,
) -> Result<ViewTarget, MapError> {
    match points {
        [] => Err(MapError::EmptyRoute),
        [only] => Ok(ViewTarget::Point {
            center: *only,
            zoom: single_point_zoom,
        }),
        _ => GeoBounds::from_points(points)
            .map(|b| ViewTarget::Bounds(b.with_margin(margin_ratio)))
            .ok_or(MapError::EmptyRoute),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_route_cannot_be_framed() {
        assert_eq!(frame_points(&[], 15.0, 0.1), Err(MapError::EmptyRoute));
    }

    #[test]
    fn single_point_centers_with_fixed_zoom() {
        let p = GeoPoint::new(25.0350, 121.5674);
        assert_eq!(
            frame_points(&[p], 15.0, 0.1),
            Ok(ViewTarget::Point {
                center: p,
                zoom: 15.0
            })
        );
    }

    #[test]
    fn bounds_get_ten_percent_margin_on_each_side() {
        let points = [
            GeoPoint::new(25.0350, 121.5674),
            GeoPoint::new(25.0340, 121.5664),
            GeoPoint::new(25.0330, 121.5654),
        ];

        let Ok(ViewTarget::Bounds(b)) = frame_points(&points, 15.0, 0.1) else {
            panic!("Bounds erwartet");
        };
        assert_relative_eq!(b.north, 25.0352, epsilon = 1e-9);
        assert_relative_eq!(b.south, 25.0328, epsilon = 1e-9);
        assert_relative_eq!(b.east, 121.5676, epsilon = 1e-9);
        assert_relative_eq!(b.west, 121.5652, epsilon = 1e-9);
    }

    #[test]
    fn camera_apply_bounds_moves_center_only() {
        let mut camera = MapCamera::new(GeoPoint::default(), 12.0);
        let bounds = GeoBounds {
            north: 2.0,
            south: 0.0,
            east: 4.0,
            west: 2.0,
        };

        camera.apply(&ViewTarget::Bounds(bounds));

        assert_relative_eq!(camera.center.latitude, 1.0);
        assert_relative_eq!(camera.center.longitude, 3.0);
        assert_relative_eq!(camera.zoom, 12.0);
    }
}

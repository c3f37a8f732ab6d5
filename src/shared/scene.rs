//! Routen-Szene als expliziter Übergabevertrag zwischen App und Kartenoberfläche.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use serde::Serialize;

use crate::core::{ArrowKey, Drone, GeoPoint, TileSource, ViewTarget, WaypointId};

/// Darstellungsdaten eines Wegpunkt-Markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaypointView {
    /// Stabile Identität
    pub id: WaypointId,
    /// Position des Markers
    pub position: GeoPoint,
    /// Rang in der Route (1-basiert)
    pub rank: usize,
    /// Beschriftung des Marker-Icons
    pub label: String,
    /// Titel des Info-Fensters
    pub title: String,
}

/// Darstellungsdaten eines Richtungspfeils
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowView {
    /// Schlüssel (Ziel-Wegpunkt, Index im Segment)
    pub key: ArrowKey,
    /// Position des Pfeils
    pub position: GeoPoint,
    /// Kurs im Uhrzeigersinn ab Nord
    pub bearing_deg: f64,
    /// Marker-Rotation gegen den Uhrzeigersinn
    pub rotation_deg: f64,
}

/// Read-only Daten für einen Zeichenvorgang der Karte.
#[derive(Debug, Clone, Serialize)]
pub struct RouteScene {
    /// Polylinien-Stützpunkte in Routen-Reihenfolge
    pub polyline: Vec<GeoPoint>,
    /// Wegpunkt-Marker in Routen-Reihenfolge
    pub waypoints: Vec<WaypointView>,
    /// Richtungspfeile in Routen-Reihenfolge, je Segment nach Index
    pub arrows: Vec<ArrowView>,
    /// Drohnen-Marker
    pub drone: Drone,
    /// Aktive Kachelquelle (vor dem ersten Umschalten keine)
    pub tile_source: Option<TileSource>,
    /// Beschriftung des Kartenwechsel-Buttons
    pub tile_switch_label: String,
    /// Aktuelles Ansichtsziel
    pub view_target: ViewTarget,
}

impl RouteScene {
    /// Gibt zurück, ob Wegpunkte zu zeichnen sind.
    pub fn has_route(&self) -> bool {
        !self.waypoints.is_empty()
    }
}

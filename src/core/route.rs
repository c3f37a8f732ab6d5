//! Die zentrale Route-Datenstruktur: Wegpunkt-Arena, Reihenfolge und Richtungspfeile.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::arrow::{segment_arrows, MAX_ARROWS_PER_SEGMENT};
use super::spatial::{self, WaypointMatch};
use super::{ArrowIndicator, ArrowKey, GeoPoint, MapError, Waypoint, WaypointId};

/// Geordnete Wegpunkt-Route mit abgeleiteten Richtungspfeilen.
///
/// Invarianten:
/// - `order` enthält jede ID aus `waypoints` genau einmal (Einfüge-Reihenfolge).
/// - Für jedes aufeinanderfolgende Paar (A, B) existieren genau die Pfeile
///   `ArrowKey { target: B, index: 1..=K }`, sonst keine.
#[derive(Debug, Clone)]
pub struct Route {
    /// Alle Wegpunkte, indexiert nach ihrer ID
    waypoints: HashMap<WaypointId, Waypoint>,
    /// Routen-Reihenfolge (wird beim Verschieben nicht verändert)
    order: Vec<WaypointId>,
    /// Pfeile pro Segment, in Erzeugungsreihenfolge
    arrows: IndexMap<ArrowKey, ArrowIndicator>,
    /// Anzahl Pfeile pro Segment (K)
    arrows_per_segment: u32,
    /// Nächste zu vergebende ID
    next_id: u64,
}

impl Default for Route {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Route {
    /// Erstellt eine leere Route. `arrows_per_segment` wird auf 1..=16 begrenzt.
    pub fn new(arrows_per_segment: u32) -> Self {
        Self {
            waypoints: HashMap::new(),
            order: Vec::new(),
            arrows: IndexMap::new(),
            arrows_per_segment: arrows_per_segment.clamp(1, MAX_ARROWS_PER_SEGMENT),
            next_id: 1,
        }
    }

    /// Hängt einen Wegpunkt an das Ende der Route an und berechnet das neue Endsegment.
    pub fn add_waypoint(&mut self, position: GeoPoint) -> WaypointId {
        let id = WaypointId(self.next_id);
        self.next_id += 1;

        if let Some(&last_id) = self.order.last() {
            if let Some(last) = self.waypoints.get(&last_id) {
                let start = last.position;
                self.update_segment(start, id, position);
            }
        }

        let rank = self.order.len() + 1;
        self.waypoints.insert(id, Waypoint::new(id, position, rank));
        self.order.push(id);
        id
    }

    /// Verschiebt einen Wegpunkt. Unbekannte IDs werden ignoriert (`false`).
    ///
    /// Die Pfeile beider anliegenden Segmente werden komplett neu berechnet.
    pub fn move_waypoint(&mut self, id: WaypointId, new_position: GeoPoint) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if let Some(waypoint) = self.waypoints.get_mut(&id) {
            waypoint.position = new_position;
        }

        if let Some(prev) = index.checked_sub(1).and_then(|i| self.position_at(i)) {
            self.update_segment(prev, id, new_position);
        }
        if let Some(&next_id) = self.order.get(index + 1) {
            if let Some(next) = self.position_of(next_id) {
                self.update_segment(new_position, next_id, next);
            }
        }
        true
    }

    /// Entfernt einen Wegpunkt inklusive seiner Segment-Pfeile.
    ///
    /// Hatte der Wegpunkt Vorgänger und Nachfolger, werden diese direkt
    /// überbrückt. Die verbleibenden Wegpunkte werden neu nummeriert.
    pub fn remove_waypoint(&mut self, id: WaypointId) -> Option<Waypoint> {
        let index = self.index_of(id)?;
        let next_id = self.order.get(index + 1).copied();

        // Segment Vorgänger → id
        if index > 0 {
            self.remove_segment_arrows(id);
        }
        // Segment id → Nachfolger
        if let Some(next_id) = next_id {
            self.remove_segment_arrows(next_id);
        }

        if let (Some(prev), Some(next_id)) =
            (index.checked_sub(1).and_then(|i| self.position_at(i)), next_id)
        {
            if let Some(next) = self.position_of(next_id) {
                self.update_segment(prev, next_id, next);
            }
        }

        self.order.remove(index);
        let removed = self.waypoints.remove(&id);
        self.renumber();
        removed
    }

    /// Sucht den nächsten Wegpunkt strikt innerhalb von `threshold_m` Metern.
    pub fn nearest_waypoint(&self, query: GeoPoint, threshold_m: f64) -> Option<WaypointMatch> {
        spatial::nearest_within(self.waypoints_iter(), query, threshold_m)
    }

    /// Ändert die Pfeilanzahl pro Segment und leitet alle Pfeile neu ab.
    pub fn set_arrows_per_segment(&mut self, arrows_per_segment: u32) -> Result<(), MapError> {
        if !(1..=MAX_ARROWS_PER_SEGMENT).contains(&arrows_per_segment) {
            return Err(MapError::InvalidArrowsPerSegment(arrows_per_segment));
        }
        if arrows_per_segment == self.arrows_per_segment {
            return Ok(());
        }
        self.arrows_per_segment = arrows_per_segment;
        self.rebuild_arrows();
        Ok(())
    }

    /// Baut alle Pfeile aus den aktuellen Wegpunkt-Positionen neu auf.
    pub fn rebuild_arrows(&mut self) {
        self.arrows.clear();
        let positions: Vec<(WaypointId, GeoPoint)> = self
            .waypoints_iter()
            .map(|w| (w.id, w.position))
            .collect();
        for pair in positions.windows(2) {
            let (_, start) = pair[0];
            let (target, end) = pair[1];
            self.update_segment(start, target, end);
        }
    }

    /// Polylinie der Route in Routen-Reihenfolge
    pub fn polyline(&self) -> Vec<GeoPoint> {
        self.waypoints_iter().map(|w| w.position).collect()
    }

    /// Iterator über alle Wegpunkte in Routen-Reihenfolge.
    pub fn waypoints_iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.order.iter().filter_map(|id| self.waypoints.get(id))
    }

    /// Iterator über alle Pfeile in Einfügereihenfolge (read-only).
    pub fn arrows_iter(&self) -> impl Iterator<Item = &ArrowIndicator> {
        self.arrows.values()
    }

    /// Findet einen Wegpunkt
    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(&id)
    }

    /// Findet einen Pfeil über seinen Schlüssel
    pub fn arrow(&self, key: ArrowKey) -> Option<&ArrowIndicator> {
        self.arrows.get(&key)
    }

    /// Routen-Reihenfolge als ID-Liste
    pub fn order(&self) -> &[WaypointId] {
        &self.order
    }

    /// Letzter Wegpunkt der Route
    pub fn last_waypoint(&self) -> Option<&Waypoint> {
        self.order.last().and_then(|id| self.waypoints.get(id))
    }

    /// Position eines Wegpunkts in der Route (0-basiert)
    pub fn index_of(&self, id: WaypointId) -> Option<usize> {
        self.order.iter().position(|&o| o == id)
    }

    /// Prüft ob ein Wegpunkt existiert
    pub fn contains(&self, id: WaypointId) -> bool {
        self.waypoints.contains_key(&id)
    }

    /// Gibt die Anzahl der Wegpunkte zurück
    pub fn waypoint_count(&self) -> usize {
        self.order.len()
    }

    /// Gibt die Anzahl der Pfeile zurück
    pub fn arrow_count(&self) -> usize {
        self.arrows.len()
    }

    /// Pfeile pro Segment (K)
    pub fn arrows_per_segment(&self) -> u32 {
        self.arrows_per_segment
    }

    /// Gibt `true` zurück, wenn die Route keine Wegpunkte enthält.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Setzt Ränge 1..N entlang der Routen-Reihenfolge neu.
    fn renumber(&mut self) {
        for (i, id) in self.order.iter().enumerate() {
            if let Some(waypoint) = self.waypoints.get_mut(id) {
                waypoint.set_rank(i + 1);
            }
        }
    }

    /// Erstellt oder aktualisiert die Pfeile des Segments `start` → `target`.
    fn update_segment(&mut self, start: GeoPoint, target: WaypointId, end: GeoPoint) {
        for arrow in segment_arrows(target, start, end, self.arrows_per_segment) {
            self.arrows.insert(arrow.key, arrow);
        }
    }

    fn remove_segment_arrows(&mut self, target: WaypointId) {
        for key in ArrowKey::for_segment(target, self.arrows_per_segment) {
            self.arrows.shift_remove(&key);
        }
    }

    fn position_at(&self, index: usize) -> Option<GeoPoint> {
        self.order.get(index).and_then(|&id| self.position_of(id))
    }

    fn position_of(&self, id: WaypointId) -> Option<GeoPoint> {
        self.waypoints.get(&id).map(|w| w.position)
    }
}

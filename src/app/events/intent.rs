use std::time::Instant;

use crate::core::{GeoPoint, WaypointId};
use crate::shared::RouteOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Einfacher Tap auf die Karte (fügt einen Wegpunkt an)
    MapTapped { position: GeoPoint },
    /// Long-Press auf die Karte (Löschen des nächsten Wegpunkts anfragen)
    MapLongPressed { position: GeoPoint },
    /// Klick auf einen Wegpunkt-Marker (Aktionsmenü öffnen)
    WaypointClicked { id: WaypointId },
    /// Aktionsmenü: Info anzeigen
    WaypointInfoRequested { id: WaypointId },
    /// Aktionsmenü: Wegpunkt löschen
    WaypointDeleteRequested { id: WaypointId },
    /// Marker-Drag beginnt
    WaypointDragStarted { id: WaypointId },
    /// Marker wird gezogen
    WaypointDragged { id: WaypointId, position: GeoPoint },
    /// Marker wurde losgelassen
    WaypointDragEnded { id: WaypointId, position: GeoPoint },
    /// Löschbestätigung: Ja
    DeleteConfirmed,
    /// Löschbestätigung: Nein
    DeleteCancelled,
    /// Button "Auf Route zentrieren"
    CenterOnRouteRequested,
    /// Button "Karte wechseln"
    SwitchTileSourceRequested,
    /// Kartenansicht wird sichtbar (Drohnen-Timer starten)
    ViewResumed { now: Instant },
    /// Kartenansicht wird verdeckt (Drohnen-Timer stoppen)
    ViewPaused,
    /// Frame-Takt des Hosts
    FrameTick { now: Instant },
    /// Externe Drohnen-Telemetrie
    DronePositionReported { position: GeoPoint, heading_deg: f64 },
    /// Optionen wurden geändert
    OptionsChanged { options: Box<RouteOptions> },
}

use std::time::Instant;

use crate::core::{GeoPoint, WaypointId};
use crate::shared::RouteOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Route ===
    /// Wegpunkt am Routenende anfügen
    AddWaypoint { position: GeoPoint, render_now: bool },
    /// Wegpunkt verschieben (Drag); `notify` meldet eine erfolgreiche Verschiebung
    MoveWaypoint {
        id: WaypointId,
        position: GeoPoint,
        notify: bool,
    },
    /// Wegpunkt entfernen
    RemoveWaypoint { id: WaypointId },
    /// Nächsten Wegpunkt suchen und Löschbestätigung anfragen
    RequestDeleteNearest { position: GeoPoint, threshold_m: f64 },

    // === Dialoge & Marker-Interaktion ===
    /// Aktionsmenü eines Wegpunkts öffnen
    OpenWaypointActions { id: WaypointId },
    /// Aktionsmenü schließen
    CloseWaypointActions,
    /// Info-Fenster eines Wegpunkts anzeigen
    ShowWaypointInfo { id: WaypointId },
    /// Löschbestätigung für einen Wegpunkt anfragen
    RequestDeleteConfirmation { id: WaypointId },
    /// Löschbestätigung schließen
    CloseDeleteConfirmation,
    /// Drag eines Markers beginnt
    BeginWaypointDrag { id: WaypointId },
    /// Drag eines Markers endet
    EndWaypointDrag { id: WaypointId },
    /// Kurzmeldung anzeigen
    ShowNotification { message: String },

    // === Kamera & Kacheln ===
    /// Ansicht auf alle Wegpunkte einpassen
    CenterOnRoute,
    /// Nächste Kachelquelle aktivieren
    CycleTileSource,

    // === Drohne ===
    /// Drohnen-Timer einplanen
    StartDroneTimer { now: Instant },
    /// Drohnen-Timer stoppen
    StopDroneTimer,
    /// Drohnen-Timer prüfen und ggf. einen Schritt simulieren
    PollDroneTimer { now: Instant },
    /// Drohnen-Position explizit setzen
    UpdateDronePosition { position: GeoPoint, heading_deg: f64 },

    // === Optionen ===
    /// Optionen übernehmen
    ApplyOptions { options: Box<RouteOptions> },
}

//! Application State — zentrale Datenhaltung.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::CommandLog;
use crate::core::{
    Drone, DroneWalk, MapCamera, PeriodicTimer, Route, TileSourceCycle, ViewTarget, WaypointId,
};
use crate::shared::RouteOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Kartenansicht (Mittelpunkt, Zoom)
    pub camera: MapCamera,
    /// Zuletzt angefordertes Ansichtsziel
    pub target: ViewTarget,
    /// Signalisiert dem Host, die Karte neu zu zeichnen
    pub redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand für die Startansicht.
    pub fn new(options: &RouteOptions) -> Self {
        let camera = MapCamera::new(options.initial_center, options.initial_zoom);
        Self {
            camera,
            target: ViewTarget::Point {
                center: camera.center,
                zoom: camera.zoom,
            },
            redraw_requested: false,
        }
    }
}

/// UI-bezogener Anwendungszustand (Dialoge, Info-Fenster, Kurzmeldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Wegpunkt, dessen Aktionsmenü (Info / Löschen) offen ist
    pub action_menu: Option<WaypointId>,
    /// Wegpunkt, dessen Info-Fenster offen ist
    pub info_window: Option<WaypointId>,
    /// Wegpunkt, der auf Löschbestätigung wartet
    pub pending_delete: Option<WaypointId>,
    /// Wegpunkt, der gerade gezogen wird
    pub dragging: Option<WaypointId>,
    /// Noch nicht angezeigte Kurzmeldungen
    pub notifications: Vec<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht eine Kurzmeldung ein.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push(message.into());
    }
}

/// Zustand der simulierten Drohne
#[derive(Debug, Clone)]
pub struct DroneState {
    /// Position und Kurs
    pub drone: Drone,
    /// Parameter der Zufallsbewegung
    pub walk: DroneWalk,
    /// Simulations-Timer
    pub timer: PeriodicTimer,
    /// Zufallsquelle der Simulation
    pub rng: StdRng,
}

impl DroneState {
    /// Erstellt den Drohnen-Zustand aus den Optionen.
    pub fn new(options: &RouteOptions) -> Self {
        Self {
            drone: Drone::new(options.drone_start, 0.0),
            walk: DroneWalk {
                step_deg: options.drone_step_deg,
                heading_step_deg: options.drone_heading_step_deg,
            },
            timer: PeriodicTimer::new(options.drone_interval()),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Ersetzt die Zufallsquelle durch eine deterministische (Tests, Replays).
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Wegpunkt-Route mit Richtungspfeilen
    pub route: Route,
    /// Simulierte Drohne
    pub drone: DroneState,
    /// Kachelquellen-Auswahl
    pub tiles: TileSourceCycle,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: RouteOptions,
    /// Zieldatei für geänderte Optionen (None = nicht persistieren)
    pub options_path: Option<PathBuf>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(RouteOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: RouteOptions) -> Self {
        let options = options.sanitized();
        let tiles = TileSourceCycle::new(options.tile_sources.clone()).unwrap_or_else(|e| {
            log::warn!("{}, verwende Standard-Kachelquellen", e);
            TileSourceCycle::default()
        });

        Self {
            route: Route::new(options.arrows_per_segment),
            drone: DroneState::new(&options),
            tiles,
            view: ViewState::new(&options),
            ui: UiState::new(),
            options,
            options_path: None,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Wegpunkte zurück (für UI-Anzeige)
    pub fn waypoint_count(&self) -> usize {
        self.route.waypoint_count()
    }

    /// Gibt die Anzahl der Richtungspfeile zurück (für UI-Anzeige)
    pub fn arrow_count(&self) -> usize {
        self.route.arrow_count()
    }

    /// Fordert ein Neuzeichnen der Karte an.
    pub fn request_redraw(&mut self) {
        self.view.redraw_requested = true;
    }

    /// Liefert und löscht die Neuzeichnen-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.view.redraw_requested)
    }

    /// Liefert alle ausstehenden Kurzmeldungen und leert die Warteschlange.
    pub fn drain_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ui.notifications)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

//! Zentrale Konfiguration für den Drohnen-Routenplaner.
//!
//! `RouteOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::arrow::MAX_ARROWS_PER_SEGMENT;
use crate::core::{GeoPoint, TileSource};

// ── Route ───────────────────────────────────────────────────────────

/// Richtungspfeile pro Segment (K).
pub const ARROWS_PER_SEGMENT: u32 = 1;
/// Maximaler Abstand (Meter) für Long-Press-Auswahl eines Wegpunkts.
pub const PICK_THRESHOLD_M: f64 = 50.0;

// ── Drohne ──────────────────────────────────────────────────────────

/// Intervall der Drohnen-Simulation in Millisekunden.
pub const DRONE_INTERVAL_MS: u64 = 1000;
/// Breite des Zufalls-Intervalls pro Schritt in Grad.
pub const DRONE_STEP_DEG: f64 = 0.001;
/// Maximale Kursänderung pro Schritt in Grad.
pub const DRONE_HEADING_STEP_DEG: f64 = 10.0;
/// Startposition der Drohne.
pub const DRONE_START: GeoPoint = GeoPoint::new(25.0360, 121.5674);

// ── Kamera ──────────────────────────────────────────────────────────

/// Anfangs-Mittelpunkt der Karte (Taipeh).
pub const INITIAL_CENTER: GeoPoint = GeoPoint::new(25.0330, 121.5654);
/// Anfangs-Zoomstufe.
pub const INITIAL_ZOOM: f64 = 15.0;
/// Zoomstufe beim Zentrieren auf einen einzelnen Wegpunkt.
pub const SINGLE_POINT_ZOOM: f64 = 15.0;
/// Rand beim Einpassen der Route (Anteil der Spannweite pro Seite).
pub const FRAME_MARGIN_RATIO: f64 = 0.1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `drone_route_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    // ── Route ───────────────────────────────────────────────────
    /// Richtungspfeile pro Segment (1 bis 16)
    pub arrows_per_segment: u32,
    /// Auswahl-Radius für Long-Press in Metern
    pub pick_threshold_m: f64,

    // ── Drohne ──────────────────────────────────────────────────
    /// Simulations-Intervall in Millisekunden
    pub drone_interval_ms: u64,
    /// Breite des Positions-Zufallsintervalls in Grad
    pub drone_step_deg: f64,
    /// Maximale Kursänderung pro Schritt
    pub drone_heading_step_deg: f64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Anfangs-Zoomstufe
    pub initial_zoom: f64,
    /// Zoomstufe für einen einzelnen Wegpunkt
    pub single_point_zoom: f64,
    /// Rand beim Einpassen der Route
    pub frame_margin_ratio: f64,

    // ── Positionen (TOML-Tabellen, daher nach den Skalaren) ────
    /// Startposition der Drohne
    pub drone_start: GeoPoint,
    /// Anfangs-Mittelpunkt
    pub initial_center: GeoPoint,

    // ── Kacheln ─────────────────────────────────────────────────
    /// Kachelquellen in Umschalt-Reihenfolge
    #[serde(default = "TileSource::defaults")]
    pub tile_sources: Vec<TileSource>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            arrows_per_segment: ARROWS_PER_SEGMENT,
            pick_threshold_m: PICK_THRESHOLD_M,

            drone_interval_ms: DRONE_INTERVAL_MS,
            drone_step_deg: DRONE_STEP_DEG,
            drone_heading_step_deg: DRONE_HEADING_STEP_DEG,

            initial_zoom: INITIAL_ZOOM,
            single_point_zoom: SINGLE_POINT_ZOOM,
            frame_margin_ratio: FRAME_MARGIN_RATIO,

            drone_start: DRONE_START,
            initial_center: INITIAL_CENTER,

            tile_sources: TileSource::defaults(),
        }
    }
}

impl RouteOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RouteOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("drone_route_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("drone_route_planner.toml")
    }

    /// Intervall der Drohnen-Simulation
    pub fn drone_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.drone_interval_ms)
    }

    /// Ersetzt ungültige Werte durch Standardwerte.
    pub fn sanitized(mut self) -> Self {
        if !(1..=MAX_ARROWS_PER_SEGMENT).contains(&self.arrows_per_segment) {
            log::warn!(
                "arrows_per_segment = {} ungültig (1..={}), verwende {}",
                self.arrows_per_segment,
                MAX_ARROWS_PER_SEGMENT,
                ARROWS_PER_SEGMENT
            );
            self.arrows_per_segment = ARROWS_PER_SEGMENT;
        }
        if self.tile_sources.is_empty() {
            log::warn!("Keine Kachelquellen konfiguriert, verwende Standardliste");
            self.tile_sources = TileSource::defaults();
        }
        self
    }
}

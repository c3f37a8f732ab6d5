//! Kachelquellen und deren Umschalt-Reihenfolge.

use serde::{Deserialize, Serialize};

use super::MapError;

/// Beschreibung einer Kachelquelle (URL-Bildung übernimmt die Kartenbibliothek).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSource {
    /// Anzeigename
    pub name: String,
    /// Basis-URL des Kachel-Servers
    pub base_url: String,
    /// Minimale Zoomstufe
    pub min_zoom: u8,
    /// Maximale Zoomstufe
    pub max_zoom: u8,
    /// Kachelgröße in Pixeln
    pub tile_size: u32,
}

impl TileSource {
    /// Erstellt eine Kachelquelle mit 256px-Kacheln
    pub fn new(name: &str, base_url: &str, min_zoom: u8, max_zoom: u8) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            min_zoom,
            max_zoom,
            tile_size: 256,
        }
    }

    /// Standardliste: OSM Mapnik, NLSC-Karte, NLSC-Luftbild-Mix.
    pub fn defaults() -> Vec<TileSource> {
        vec![
            TileSource::new("Mapnik", "https://tile.openstreetmap.org/", 0, 19),
            TileSource::new(
                "wmst_emap_3857",
                "https://wmts.nlsc.gov.tw/wmts/EMAP/default/EPSG:3857/",
                5,
                20,
            ),
            TileSource::new(
                "wmst_PHOTO_MIX_3857",
                "https://wmts.nlsc.gov.tw/wmts/PHOTO_MIX/default/EPSG:3857/",
                6,
                20,
            ),
        ]
    }
}

/// Zyklische Auswahl der aktiven Kachelquelle.
#[derive(Debug, Clone)]
pub struct TileSourceCycle {
    sources: Vec<TileSource>,
    active: Option<usize>,
    cursor: usize,
}

impl TileSourceCycle {
    /// Erstellt die Auswahl. Eine leere Liste ist ungültig.
    pub fn new(sources: Vec<TileSource>) -> Result<Self, MapError> {
        if sources.is_empty() {
            return Err(MapError::NoTileSources);
        }
        Ok(Self {
            sources,
            active: None,
            cursor: 0,
        })
    }

    /// Aktiviert die Quelle unter dem Cursor und rückt den Cursor weiter.
    pub fn advance(&mut self) -> &TileSource {
        let index = self.cursor;
        self.active = Some(index);
        self.cursor = (index + 1) % self.sources.len();
        &self.sources[index]
    }

    /// Aktive Quelle (vor dem ersten `advance` keine)
    pub fn active(&self) -> Option<&TileSource> {
        self.active.and_then(|i| self.sources.get(i))
    }

    /// Quelle, die beim nächsten Umschalten aktiv wird
    pub fn upcoming(&self) -> &TileSource {
        &self.sources[self.cursor]
    }

    /// Beschriftung des Umschalt-Buttons
    pub fn switch_label(&self) -> String {
        format!("Switch to {} map", self.upcoming().name)
    }

    /// Alle Quellen in Reihenfolge
    pub fn sources(&self) -> &[TileSource] {
        &self.sources
    }
}

impl Default for TileSourceCycle {
    fn default() -> Self {
        Self {
            sources: TileSource::defaults(),
            active: None,
            cursor: 0,
        }
    }
}

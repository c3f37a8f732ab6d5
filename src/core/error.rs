//! Fehler der Domänenschicht.

use thiserror::Error;

/// Fehler, die aus Core-Operationen an die App-Schicht gemeldet werden.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Route enthält keine Wegpunkte (z.B. beim Zentrieren)
    #[error("Route enthält keine Wegpunkte")]
    EmptyRoute,
    /// Liste der Kachelquellen ist leer
    #[error("Keine Kachelquellen konfiguriert")]
    NoTileSources,
    /// Ungültige Pfeilanzahl pro Segment
    #[error("Ungültige Pfeilanzahl pro Segment: {0} (erlaubt: 1 bis 16)")]
    InvalidArrowsPerSegment(u32),
}

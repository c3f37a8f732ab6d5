//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod scene;

pub use options::RouteOptions;
pub use options::{ARROWS_PER_SEGMENT, PICK_THRESHOLD_M};
pub use scene::{ArrowView, RouteScene, WaypointView};

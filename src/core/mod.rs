//! Core-Domänentypen: Wegpunkte, Route, Pfeile, Drohne, Timer, Kachelquellen.

pub mod arrow;
pub mod camera;
pub mod drone;
pub mod error;
pub mod geo_point;
pub mod route;
pub mod spatial;
pub mod tile_source;
pub mod timer;
pub mod waypoint;

pub use arrow::{ArrowIndicator, ArrowKey};
pub use camera::{GeoBounds, MapCamera, ViewTarget};
pub use drone::{Drone, DroneWalk};
pub use error::MapError;
pub use geo_point::GeoPoint;
pub use route::Route;
pub use spatial::WaypointMatch;
pub use tile_source::{TileSource, TileSourceCycle};
pub use timer::PeriodicTimer;
pub use waypoint::{Waypoint, WaypointId};

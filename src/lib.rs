//! Drohnen-Routenplaner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    ArrowIndicator, ArrowKey, Drone, DroneWalk, GeoBounds, GeoPoint, MapCamera, MapError,
    PeriodicTimer, Route, TileSource, TileSourceCycle, ViewTarget, Waypoint, WaypointId,
    WaypointMatch,
};
pub use shared::{RouteOptions, RouteScene};

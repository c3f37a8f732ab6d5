//! Use-Case-Funktionen für das Bearbeiten der Route.
//!
//! Aufgeteilt nach Operation:
//! - `add_waypoint` — Wegpunkt anfügen
//! - `move_waypoint` — Wegpunkt verschieben
//! - `delete_waypoint` — Wegpunkt löschen (direkt oder per Long-Press-Auswahl)

mod add_waypoint;
mod delete_waypoint;
mod move_waypoint;

pub use add_waypoint::add_waypoint;
pub use delete_waypoint::{remove_waypoint, request_delete_nearest};
pub use move_waypoint::move_waypoint;

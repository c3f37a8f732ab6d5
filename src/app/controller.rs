//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::GeoPoint;
use crate::shared::RouteScene;

/// Demo-Route, die beim Start angelegt wird.
pub const DEMO_WAYPOINTS: [GeoPoint; 3] = [
    GeoPoint::new(25.0350, 121.5674),
    GeoPoint::new(25.0340, 121.5664),
    GeoPoint::new(25.0330, 121.5654),
];

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Startzustand: Demo-Wegpunkte ohne Einzel-Redraw, ein Redraw am Ende,
    /// erste Kachelquelle aktivieren.
    pub fn bootstrap(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        for position in DEMO_WAYPOINTS {
            self.handle_command(
                state,
                AppCommand::AddWaypoint {
                    position,
                    render_now: false,
                },
            )?;
        }
        state.request_redraw();
        self.handle_command(state, AppCommand::CycleTileSource)?;

        log::info!(
            "Startzustand aufgebaut: {} Wegpunkte, Kachelquelle {}",
            state.waypoint_count(),
            state.tiles.active().map_or("-", |s| s.name.as_str())
        );
        Ok(())
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Route ===
            AppCommand::AddWaypoint {
                position,
                render_now,
            } => handlers::editing::add_waypoint(state, position, render_now),
            AppCommand::MoveWaypoint {
                id,
                position,
                notify,
            } => handlers::editing::move_waypoint(state, id, position, notify),
            AppCommand::RemoveWaypoint { id } => handlers::editing::remove_waypoint(state, id),
            AppCommand::RequestDeleteNearest {
                position,
                threshold_m,
            } => handlers::editing::request_delete_nearest(state, position, threshold_m),

            // === Dialoge & Marker-Interaktion ===
            AppCommand::OpenWaypointActions { id } => {
                handlers::dialog::open_waypoint_actions(state, id)
            }
            AppCommand::CloseWaypointActions => handlers::dialog::close_waypoint_actions(state),
            AppCommand::ShowWaypointInfo { id } => handlers::dialog::show_waypoint_info(state, id),
            AppCommand::RequestDeleteConfirmation { id } => {
                handlers::dialog::request_delete_confirmation(state, id)
            }
            AppCommand::CloseDeleteConfirmation => {
                handlers::dialog::close_delete_confirmation(state)
            }
            AppCommand::BeginWaypointDrag { id } => {
                handlers::dialog::begin_waypoint_drag(state, id)
            }
            AppCommand::EndWaypointDrag { id } => handlers::dialog::end_waypoint_drag(state, id),
            AppCommand::ShowNotification { message } => {
                handlers::dialog::show_notification(state, message)
            }

            // === Kamera & Kacheln ===
            AppCommand::CenterOnRoute => handlers::view::center_on_route(state),
            AppCommand::CycleTileSource => handlers::view::cycle_tile_source(state),

            // === Drohne ===
            AppCommand::StartDroneTimer { now } => handlers::drone::start_timer(state, now),
            AppCommand::StopDroneTimer => handlers::drone::stop_timer(state),
            AppCommand::PollDroneTimer { now } => handlers::drone::poll_timer(state, now),
            AppCommand::UpdateDronePosition {
                position,
                heading_deg,
            } => handlers::drone::update_position(state, position, heading_deg),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
        }

        Ok(())
    }

    /// Baut die Routen-Szene aus dem aktuellen AppState.
    pub fn build_scene(&self, state: &AppState) -> RouteScene {
        render_scene::build(state)
    }
}

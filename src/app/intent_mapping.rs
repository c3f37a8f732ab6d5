//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapTapped { position } => vec![
            AppCommand::ShowNotification {
                message: format!("Tapped position: {}", position),
            },
            AppCommand::AddWaypoint {
                position,
                render_now: true,
            },
        ],
        AppIntent::MapLongPressed { position } => vec![AppCommand::RequestDeleteNearest {
            position,
            threshold_m: state.options.pick_threshold_m,
        }],
        AppIntent::WaypointClicked { id } => vec![AppCommand::OpenWaypointActions { id }],
        AppIntent::WaypointInfoRequested { id } => vec![
            AppCommand::CloseWaypointActions,
            AppCommand::ShowWaypointInfo { id },
        ],
        AppIntent::WaypointDeleteRequested { id } => vec![
            AppCommand::CloseWaypointActions,
            AppCommand::RequestDeleteConfirmation { id },
        ],
        AppIntent::WaypointDragStarted { id } => vec![AppCommand::BeginWaypointDrag { id }],
        AppIntent::WaypointDragged { id, position } => vec![AppCommand::MoveWaypoint {
            id,
            position,
            notify: false,
        }],
        AppIntent::WaypointDragEnded { id, position } => vec![
            AppCommand::MoveWaypoint {
                id,
                position,
                notify: true,
            },
            AppCommand::EndWaypointDrag { id },
        ],
        AppIntent::DeleteConfirmed => match state.ui.pending_delete {
            Some(id) => vec![
                AppCommand::RemoveWaypoint { id },
                AppCommand::CloseDeleteConfirmation,
            ],
            None => vec![AppCommand::CloseDeleteConfirmation],
        },
        AppIntent::DeleteCancelled => vec![AppCommand::CloseDeleteConfirmation],
        AppIntent::CenterOnRouteRequested => vec![AppCommand::CenterOnRoute],
        AppIntent::SwitchTileSourceRequested => vec![AppCommand::CycleTileSource],
        AppIntent::ViewResumed { now } => vec![AppCommand::StartDroneTimer { now }],
        AppIntent::ViewPaused => vec![AppCommand::StopDroneTimer],
        AppIntent::FrameTick { now } => vec![AppCommand::PollDroneTimer { now }],
        AppIntent::DronePositionReported {
            position,
            heading_deg,
        } => vec![AppCommand::UpdateDronePosition {
            position,
            heading_deg,
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

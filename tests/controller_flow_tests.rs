use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use drone_route_planner::{
    AppCommand, AppController, AppIntent, AppState, GeoPoint, RouteOptions, ViewTarget,
};

fn bootstrapped() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .bootstrap(&mut state)
        .expect("Bootstrap sollte ohne Fehler durchlaufen");
    (controller, state)
}

#[test]
fn test_bootstrap_adds_demo_route_and_activates_first_tile_source() {
    let (_, mut state) = bootstrapped();

    assert_eq!(state.waypoint_count(), 3);
    assert_eq!(state.arrow_count(), 2);
    assert!(state.take_redraw_request());
    assert!(!state.take_redraw_request(), "Redraw-Anforderung wird konsumiert");
    assert_eq!(state.tiles.active().map(|s| s.name.as_str()), Some("Mapnik"));
    assert_eq!(state.tiles.switch_label(), "Switch to wmst_emap_3857 map");
}

#[test]
fn test_every_command_is_logged() {
    let (mut controller, mut state) = bootstrapped();
    let before = state.command_log.len();

    controller
        .handle_intent(&mut state, AppIntent::SwitchTileSourceRequested)
        .expect("SwitchTileSourceRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.command_log.len(), before + 1);
    let last = state
        .command_log
        .recent(1)
        .next()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::CycleTileSource => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_command_log_counts_route_edits() {
    let (mut controller, mut state) = bootstrapped();
    assert_eq!(state.command_log.route_edits(), 3);

    controller
        .handle_intent(&mut state, AppIntent::CenterOnRouteRequested)
        .expect("CenterOnRouteRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.command_log.route_edits(), 3);

    let first = state.route.order()[0];
    controller
        .handle_command(&mut state, AppCommand::RemoveWaypoint { id: first })
        .expect("RemoveWaypoint sollte ohne Fehler durchlaufen");
    assert_eq!(state.command_log.route_edits(), 4);
}

#[test]
fn test_switch_tile_source_wraps_around() {
    let (mut controller, mut state) = bootstrapped();

    let mut seen = Vec::new();
    for _ in 0..3 {
        controller
            .handle_intent(&mut state, AppIntent::SwitchTileSourceRequested)
            .expect("SwitchTileSourceRequested sollte ohne Fehler durchlaufen");
        seen.push(state.tiles.active().map(|s| s.name.clone()));
    }

    assert_eq!(
        seen,
        vec![
            Some("wmst_emap_3857".to_string()),
            Some("wmst_PHOTO_MIX_3857".to_string()),
            Some("Mapnik".to_string()),
        ]
    );
}

#[test]
fn test_center_on_empty_route_only_notifies() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let target_before = state.view.target;

    controller
        .handle_intent(&mut state, AppIntent::CenterOnRouteRequested)
        .expect("Leere Route darf keinen Fehler liefern");

    assert_eq!(state.view.target, target_before);
    assert!(!state.take_redraw_request());
    assert_eq!(
        state.drain_notifications(),
        vec!["No waypoints to center on".to_string()]
    );
}

#[test]
fn test_center_on_single_waypoint_uses_fixed_zoom() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let only = GeoPoint::new(25.0350, 121.5674);
    controller
        .handle_command(
            &mut state,
            AppCommand::AddWaypoint {
                position: only,
                render_now: false,
            },
        )
        .expect("AddWaypoint sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::CenterOnRouteRequested)
        .expect("CenterOnRouteRequested sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.view.target,
        ViewTarget::Point {
            center: only,
            zoom: 15.0
        }
    );
    assert_eq!(state.view.camera.center, only);
}

#[test]
fn test_center_on_demo_route_frames_bounds_with_margin() {
    let (mut controller, mut state) = bootstrapped();

    controller
        .handle_intent(&mut state, AppIntent::CenterOnRouteRequested)
        .expect("CenterOnRouteRequested sollte ohne Fehler durchlaufen");

    let ViewTarget::Bounds(bounds) = state.view.target else {
        panic!("Bounds erwartet, erhalten: {:?}", state.view.target);
    };
    assert_relative_eq!(bounds.north, 25.0352, epsilon = 1e-9);
    assert_relative_eq!(bounds.south, 25.0328, epsilon = 1e-9);
    assert_relative_eq!(bounds.east, 121.5676, epsilon = 1e-9);
    assert_relative_eq!(bounds.west, 121.5652, epsilon = 1e-9);
    assert_relative_eq!(state.view.camera.center.latitude, 25.0340, epsilon = 1e-9);
}

#[test]
fn test_drone_moves_only_while_view_is_resumed() {
    let (mut controller, mut state) = bootstrapped();
    state.drone.reseed(7);
    let t0 = Instant::now();
    let start = state.drone.drone;

    controller
        .handle_intent(&mut state, AppIntent::FrameTick { now: t0 })
        .expect("FrameTick sollte ohne Fehler durchlaufen");
    assert_eq!(state.drone.drone, start, "Timer noch nicht gestartet");

    controller
        .handle_intent(&mut state, AppIntent::ViewResumed { now: t0 })
        .expect("ViewResumed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::FrameTick { now: t0 })
        .expect("FrameTick sollte ohne Fehler durchlaufen");
    let after_first = state.drone.drone;
    assert_ne!(after_first, start);
    assert!((after_first.position.latitude - start.position.latitude).abs() <= 0.0005 + 1e-12);

    controller
        .handle_intent(&mut state, AppIntent::ViewPaused)
        .expect("ViewPaused sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::FrameTick {
                now: t0 + Duration::from_secs(10),
            },
        )
        .expect("FrameTick sollte ohne Fehler durchlaufen");
    assert_eq!(state.drone.drone, after_first, "pausierte Ansicht bewegt nichts");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewResumed {
                now: t0 + Duration::from_secs(11),
            },
        )
        .expect("ViewResumed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::FrameTick {
                now: t0 + Duration::from_secs(11),
            },
        )
        .expect("FrameTick sollte ohne Fehler durchlaufen");
    assert_ne!(state.drone.drone, after_first);
}

#[test]
fn test_reported_drone_position_is_taken_verbatim() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let position = GeoPoint::new(25.04, 121.56);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DronePositionReported {
                position,
                heading_deg: 370.0,
            },
        )
        .expect("DronePositionReported sollte ohne Fehler durchlaufen");

    assert_eq!(state.drone.drone.position, position);
    assert_relative_eq!(state.drone.drone.heading_deg, 10.0, epsilon = 1e-9);
    assert!(state.take_redraw_request());
}

#[test]
fn test_options_changed_to_two_arrows_per_segment() {
    let (mut controller, mut state) = bootstrapped();

    let options = RouteOptions {
        arrows_per_segment: 2,
        ..RouteOptions::default()
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.route.arrows_per_segment(), 2);
    assert_eq!(state.arrow_count(), 4);

    // Neue Wegpunkte bekommen ebenfalls zwei Pfeile
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapTapped {
                position: GeoPoint::new(25.0320, 121.5644),
            },
        )
        .expect("MapTapped sollte ohne Fehler durchlaufen");
    assert_eq!(state.arrow_count(), 6);
}

#[test]
fn test_scene_reflects_state() {
    let (controller, mut state) = bootstrapped();
    state.take_redraw_request();

    let scene = controller.build_scene(&state);

    assert_eq!(scene.polyline.len(), 3);
    assert_eq!(scene.waypoints.len(), 3);
    assert_eq!(scene.arrows.len(), 2);
    assert_eq!(scene.waypoints[0].title, "Waypoint 1");
    assert_eq!(
        scene.tile_source.as_ref().map(|s| s.name.as_str()),
        Some("Mapnik")
    );
    assert_eq!(scene.drone, state.drone.drone);
}

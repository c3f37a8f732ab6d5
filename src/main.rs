//! Drohnen-Routenplaner.
//!
//! Headless-Host: baut die Demo-Route auf, lässt die Drohne einige Takte
//! fliegen und gibt die resultierende Szene als JSON aus.

use std::time::Instant;

use anyhow::Context;
use drone_route_planner::{AppController, AppIntent, AppState, RouteOptions};

/// Anzahl simulierter Takte ohne Kommandozeilen-Argument
const DEFAULT_TICKS: u32 = 5;

/// Anzahl der Commands, die am Ende ins Debug-Log gehen
const RECENT_COMMANDS: usize = 10;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Drohnen-Routenplaner v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let ticks = match std::env::args().nth(1) {
            Some(arg) => arg
                .parse::<u32>()
                .with_context(|| format!("Ungültige Anzahl Takte: {}", arg))?,
            None => DEFAULT_TICKS,
        };

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = RouteOptions::config_path();
        let options = RouteOptions::load_from_file(&config_path);
        let interval = options.drone_interval();

        let mut state = AppState::with_options(options);
        state.options_path = Some(config_path);
        let mut controller = AppController::new();

        controller.bootstrap(&mut state)?;

        let start = Instant::now();
        controller.handle_intent(&mut state, AppIntent::ViewResumed { now: start })?;
        for tick in 0..ticks {
            let now = start + interval * tick;
            controller.handle_intent(&mut state, AppIntent::FrameTick { now })?;
            if state.take_redraw_request() {
                log::debug!("Takt {}: Neuzeichnen angefordert", tick);
            }
        }
        controller.handle_intent(&mut state, AppIntent::ViewPaused)?;

        for message in state.drain_notifications() {
            log::info!("Meldung: {}", message);
        }

        log::info!(
            "{} Commands gepuffert, {} Routen-Änderungen",
            state.command_log.len(),
            state.command_log.route_edits()
        );
        for command in state.command_log.recent(RECENT_COMMANDS) {
            log::debug!("Command: {:?}", command);
        }

        let scene = controller.build_scene(&state);
        println!("{}", serde_json::to_string_pretty(&scene)?);
        Ok(())
    }
}

//! Use-Case: Laufzeit-Optionen übernehmen.

use crate::app::AppState;
use crate::core::{DroneWalk, TileSourceCycle};
use crate::shared::RouteOptions;

/// Übernimmt neue Optionen in alle betroffenen Teilzustände.
///
/// Pfeile werden nur bei geänderter Pfeilanzahl neu abgeleitet, ein laufender
/// Timer behält seinen nächsten Termin. Ist `options_path` gesetzt, werden die
/// Optionen dort gespeichert.
pub fn apply_options(state: &mut AppState, options: RouteOptions) -> anyhow::Result<()> {
    let options = options.sanitized();

    state
        .route
        .set_arrows_per_segment(options.arrows_per_segment)?;

    state.drone.timer.set_interval(options.drone_interval());
    state.drone.walk = DroneWalk {
        step_deg: options.drone_step_deg,
        heading_step_deg: options.drone_heading_step_deg,
    };

    if options.tile_sources != state.options.tile_sources {
        state.tiles = TileSourceCycle::new(options.tile_sources.clone())?;
        state.tiles.advance();
        log::info!(
            "Kachelquellen neu gesetzt ({} Einträge)",
            state.tiles.sources().len()
        );
    }

    state.options = options;
    state.request_redraw();
    log::info!(
        "Optionen übernommen (Pfeile pro Segment: {}, Intervall: {} ms)",
        state.options.arrows_per_segment,
        state.options.drone_interval_ms
    );

    if let Some(path) = state.options_path.as_deref() {
        state.options.save_to_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn changing_arrows_per_segment_rederives_arrows() {
        let mut state = AppState::new();
        state.route.add_waypoint(GeoPoint::new(25.0350, 121.5674));
        state.route.add_waypoint(GeoPoint::new(25.0340, 121.5664));
        state.route.add_waypoint(GeoPoint::new(25.0330, 121.5654));
        assert_eq!(state.arrow_count(), 2);

        let options = RouteOptions {
            arrows_per_segment: 2,
            drone_interval_ms: 250,
            ..RouteOptions::default()
        };
        apply_options(&mut state, options).expect("Optionen sollten übernommen werden");

        assert_eq!(state.arrow_count(), 4);
        assert_eq!(state.drone.timer.interval().as_millis(), 250);
        assert!(state.take_redraw_request());
    }

    #[test]
    fn new_tile_sources_restart_the_cycle() {
        let mut state = AppState::new();
        state.tiles.advance();
        state.tiles.advance();

        let mut sources = crate::core::TileSource::defaults();
        sources.reverse();
        let options = RouteOptions {
            tile_sources: sources,
            ..RouteOptions::default()
        };
        apply_options(&mut state, options).expect("Optionen sollten übernommen werden");

        assert_eq!(
            state.tiles.active().map(|s| s.name.as_str()),
            Some("wmst_PHOTO_MIX_3857")
        );
    }
}

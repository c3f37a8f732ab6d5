//! Diagnose-Verlauf der ausgeführten App-Commands.
//!
//! Der Host gibt am Ende eines Laufs die jüngsten Einträge und die Zahl
//! der Routen-Änderungen aus.

use std::collections::VecDeque;

use super::AppCommand;

/// Ringpuffer der zuletzt ausgeführten Commands plus Zähler der
/// Routen-Änderungen über die gesamte Laufzeit.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    route_edits: usize,
}

impl CommandLog {
    /// Kapazität des Ringpuffers
    pub const CAPACITY: usize = 256;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
            route_edits: 0,
        }
    }

    /// Nimmt einen ausgeführten Command auf; bei voller Kapazität fällt
    /// der älteste Eintrag heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(
            command,
            AppCommand::AddWaypoint { .. }
                | AppCommand::MoveWaypoint { .. }
                | AppCommand::RemoveWaypoint { .. }
        ) {
            self.route_edits += 1;
        }
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Anzahl der gepufferten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Routen-ändernde Commands seit Start, unabhängig vom Ringpuffer.
    pub fn route_edits(&self) -> usize {
        self.route_edits
    }

    /// Die letzten `n` Commands, ältester zuerst.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn full_log_drops_oldest_entry() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::CycleTileSource);
        for _ in 1..CommandLog::CAPACITY {
            log.record(&AppCommand::CenterOnRoute);
        }
        assert_eq!(log.len(), CommandLog::CAPACITY);

        log.record(&AppCommand::StopDroneTimer);

        assert_eq!(log.len(), CommandLog::CAPACITY);
        assert!(log
            .recent(CommandLog::CAPACITY)
            .all(|command| !matches!(command, AppCommand::CycleTileSource)));
        assert!(matches!(
            log.recent(1).next(),
            Some(AppCommand::StopDroneTimer)
        ));
    }

    #[test]
    fn recent_returns_tail_in_execution_order() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::CenterOnRoute);
        log.record(&AppCommand::CycleTileSource);
        log.record(&AppCommand::StopDroneTimer);

        let tail: Vec<&AppCommand> = log.recent(2).collect();
        assert_eq!(tail.len(), 2);
        assert!(matches!(tail[0], AppCommand::CycleTileSource));
        assert!(matches!(tail[1], AppCommand::StopDroneTimer));
        assert_eq!(log.recent(10).count(), 3);
    }

    #[test]
    fn route_edits_survive_ring_overflow() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::AddWaypoint {
            position: GeoPoint::default(),
            render_now: true,
        });
        for _ in 0..CommandLog::CAPACITY {
            log.record(&AppCommand::CenterOnRoute);
        }

        assert_eq!(log.route_edits(), 1);
        assert!(log
            .recent(CommandLog::CAPACITY)
            .all(|command| !matches!(command, AppCommand::AddWaypoint { .. })));
    }
}

//! Periodischer Timer für den UI-Thread (wird aus der Frame-Schleife gepollt).

use std::time::{Duration, Instant};

/// Abbrechbarer periodischer Timer.
///
/// `start` plant die erste Ausführung sofort ein, `stop` entfernt den
/// ausstehenden Aufruf. Pro `poll` feuert der Timer höchstens einmal, der
/// nächste Termin liegt ein Intervall nach dem tatsächlichen Feuern.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PeriodicTimer {
    /// Erstellt einen gestoppten Timer
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Plant den Timer ein; der nächste `poll` ab `now` feuert.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    /// Entfernt den ausstehenden Aufruf.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Läuft der Timer?
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Intervall zwischen zwei Ausführungen
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ändert das Intervall; ein laufender Timer behält seinen nächsten Termin.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Gibt `true` zurück, wenn der Timer fällig war, und plant den nächsten Termin.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

//! Begrenztes Command-Log für Diagnose und spätere Undo/Redo-Erweiterung.

use super::ViewerCommand;

/// Standard-Kapazität des Logs.
const DEFAULT_CAPACITY: usize = 1000;

/// Speichert ausgeführte Commands in Ausführungs-Reihenfolge.
///
/// Läuft das Log voll, wird die ältere Hälfte in einem Rutsch verworfen,
/// damit `record` amortisiert billig bleibt.
pub struct CommandLog {
    entries: Vec<ViewerCommand>,
    capacity: usize,
}

impl CommandLog {
    /// Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Log mit eigener Kapazität (mindestens 2, sonst wäre die
    /// Hälften-Verdrängung wirkungslos).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Übernimmt einen ausgeführten Command in das Log.
    pub fn record(&mut self, command: ViewerCommand) {
        if self.entries.len() >= self.capacity {
            self.entries.drain(..self.capacity / 2);
        }
        self.entries.push(command);
    }

    /// Anzahl der geloggten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ob das Log leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge, älteste zuerst.
    pub fn entries(&self) -> &[ViewerCommand] {
        &self.entries
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

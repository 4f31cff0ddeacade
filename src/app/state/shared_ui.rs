//! Geteilter UI-Spiegelzustand.
//!
//! Abhängige UI-Schichten lesen diesen Spiegel statt der Engines selbst.
//! Er wird nach jeder Sichtbarkeits-Mutation in genau einem Schritt neu
//! befüllt, damit UI und Rendering nie auseinanderlaufen.

use indexmap::IndexSet;

use crate::core::GlobalElementId;

/// Von der UI gelesener Sichtbarkeits-Spiegel über alle Modelle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedUiState {
    /// Aktuell versteckte Elemente
    pub hidden_elements: IndexSet<GlobalElementId>,
    /// Aktuell isolierte Elemente
    pub isolated_elements: IndexSet<GlobalElementId>,
    /// Ob der Isolations-Modus aktiv ist
    pub isolation_mode_on: bool,
    /// Ob der Reveal-Modus aktiv ist
    pub reveal_mode: bool,
}

impl SharedUiState {
    /// Prüft, ob ein Element laut Spiegel versteckt ist.
    pub fn is_hidden(&self, element: GlobalElementId) -> bool {
        self.hidden_elements.contains(&element)
    }

    /// Prüft, ob ein Element laut Spiegel isoliert ist.
    pub fn is_isolated(&self, element: GlobalElementId) -> bool {
        self.isolated_elements.contains(&element)
    }
}

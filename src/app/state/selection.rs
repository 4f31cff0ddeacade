//! Auswahlbezogener Zustand über alle Modelle hinweg.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::GlobalElementId;

/// Cross-Modell-Selektion: geordnet, de-dupliziert.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Selektierte Elemente in Selektions-Reihenfolge
    /// (Arc für O(1)-Clone in UI-Snapshots)
    pub selected_elements: Arc<IndexSet<GlobalElementId>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_elements: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf die Menge zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode, damit
    /// UI-Snapshots per Arc-Klon O(1) bleiben.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<GlobalElementId> {
        Arc::make_mut(&mut self.selected_elements)
    }

    /// Kopie der Selektion in Selektions-Reihenfolge.
    pub fn snapshot(&self) -> Vec<GlobalElementId> {
        self.selected_elements.iter().copied().collect()
    }

    /// Prüft, ob ein Element selektiert ist.
    pub fn contains(&self, element: GlobalElementId) -> bool {
        self.selected_elements.contains(&element)
    }
}

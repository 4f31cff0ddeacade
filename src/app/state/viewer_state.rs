//! Gesamtzustand der Viewer-Engine.

use crate::app::command_log::CommandLog;
use crate::app::registry::ModelRegistry;
use crate::core::{FlattenTarget, GlobalElementId, ViewerError};
use crate::shared::ViewerOptions;

use super::selection::SelectionState;
use super::shared_ui::SharedUiState;

/// Der komplette Zustand: Engines, Selektion und UI-Spiegel.
///
/// Die Use-Cases mutieren diesen Zustand und rufen am Ende genau einmal
/// [`ViewerState::sync_shared_ui`] auf — danach spiegelt `shared_ui`
/// exakt die Engines wider.
pub struct ViewerState {
    /// Sichtbarkeits-Engines aller angehängten Modelle
    pub models: ModelRegistry,
    /// Cross-Modell-Selektion
    pub selection: SelectionState,
    /// Von der UI gelesener Spiegelzustand
    pub shared_ui: SharedUiState,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Globales Reveal-Flag; neue Modelle erben es beim Attach
    pub reveal_mode: bool,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
}

impl ViewerState {
    /// Zustand mit gegebenen Optionen, ohne Modelle.
    pub fn new(options: ViewerOptions) -> Self {
        Self {
            models: ModelRegistry::new(),
            selection: SelectionState::new(),
            shared_ui: SharedUiState::default(),
            options,
            reveal_mode: false,
            command_log: CommandLog::new(),
        }
    }

    /// Befüllt den UI-Spiegel neu aus den Engines.
    pub fn sync_shared_ui(&mut self) {
        let mut mirror = SharedUiState::default();
        mirror.reveal_mode = self.reveal_mode;
        for engine in self.models.iter() {
            mirror.hidden_elements.extend(engine.hidden().iter().copied());
            if engine.is_isolation_active() {
                mirror.isolation_mode_on = true;
                mirror
                    .isolated_elements
                    .extend(engine.isolated().iter().copied());
            }
        }
        self.shared_ui = mirror;
    }

    /// Kopie der Selektion in Selektions-Reihenfolge.
    pub fn selected_elements(&self) -> Vec<GlobalElementId> {
        self.selection.snapshot()
    }

    /// Ob ein Element versteckbar ist (sichtbare Geometrie oder Container).
    ///
    /// Queries auf unbekannte Modelle liefern [`ViewerError::ModelNotLoaded`];
    /// mutierende Commands behandeln denselben Fall dagegen als stilles No-op.
    pub fn can_be_hidden(&self, element: GlobalElementId) -> Result<bool, ViewerError> {
        self.models
            .get(element.model_id)
            .map(|engine| engine.can_be_hidden(element.local_id))
            .ok_or(ViewerError::ModelNotLoaded(element.model_id))
    }

    /// Ob ein Element aktuell pickbar ist.
    pub fn can_be_picked_in_scene(&self, element: GlobalElementId) -> Result<bool, ViewerError> {
        self.models
            .get(element.model_id)
            .map(|engine| engine.can_be_picked_in_scene(element.local_id))
            .ok_or(ViewerError::ModelNotLoaded(element.model_id))
    }

    /// Expandiert ein Flatten-Ziel eines Modells zu lokalen IDs.
    pub fn flatten_descendants(
        &self,
        model_id: u32,
        target: &FlattenTarget,
    ) -> Result<Vec<u64>, ViewerError> {
        self.models
            .get(model_id)
            .ok_or(ViewerError::ModelNotLoaded(model_id))?
            .flatten(target)
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerOptions::default())
    }
}

//! Use-Cases: Modell-Lebenszyklus (Attach, Detach, Typ-Gruppen).

use crate::app::state::ViewerState;
use crate::core::{AttachedModel, ElementTypeGroup};
use crate::scene::SceneBackend;

use super::selection::{apply_selection_picks, prune_model_selection};

/// Hängt ein fertig geladenes Modell an; es erbt das globale Reveal-Flag.
pub fn attach_model(state: &mut ViewerState, scene: &mut dyn SceneBackend, model: &AttachedModel) {
    let reveal_mode = state.reveal_mode;
    let options = state.options.clone();
    state.models.attach(scene, model, &options, reveal_mode);
    state.sync_shared_ui();
}

/// Löst ein Modell ab und entfernt seine Elemente aus der Selektion.
pub fn detach_model(state: &mut ViewerState, scene: &mut dyn SceneBackend, model_id: u32) {
    if !state.models.detach(scene, model_id) {
        log::debug!("Detach auf nicht geladenes Modell {model_id} ignoriert");
        return;
    }
    if prune_model_selection(state, model_id) {
        apply_selection_picks(state, scene, Some(false));
    }
    state.sync_shared_ui();
}

/// Ersetzt die Element-Typ-Gruppen eines Modells (stilles No-op, wenn
/// das Modell nicht angehängt ist).
pub fn set_type_groups(state: &mut ViewerState, model_id: u32, groups: Vec<ElementTypeGroup>) {
    if !state.models.set_type_groups(model_id, groups) {
        log::debug!("Typ-Gruppen für nicht geladenes Modell {model_id} ignoriert");
    }
}

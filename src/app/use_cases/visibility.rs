//! Use-Cases: Verstecken, Wiederherstellen und Reveal-Modus.

use indexmap::IndexMap;

use crate::app::state::ViewerState;
use crate::core::{FlattenTarget, ViewerError};
use crate::scene::SceneBackend;

use super::selection::{apply_selection_picks, prune_hidden_selection};

/// Versteckt ein Flatten-Ziel eines Modells.
///
/// Unbekanntes Modell ⇒ stilles No-op; unbekannte Gruppe ⇒ Fehler.
/// Neu versteckte Elemente fallen aus der Selektion.
pub fn hide(
    state: &mut ViewerState,
    scene: &mut dyn SceneBackend,
    model_id: u32,
    target: &FlattenTarget,
) -> Result<(), ViewerError> {
    let Some(engine) = state.models.get_mut(model_id) else {
        log::debug!("Hide auf nicht geladenes Modell {model_id} ignoriert");
        return Ok(());
    };
    let local_ids = engine.flatten(target)?;
    if engine.hide(scene, &local_ids) {
        if prune_hidden_selection(state) {
            apply_selection_picks(state, scene, Some(false));
        }
        state.sync_shared_ui();
    }
    Ok(())
}

/// Macht das Verstecken eines Flatten-Ziels rückgängig.
pub fn unhide(
    state: &mut ViewerState,
    scene: &mut dyn SceneBackend,
    model_id: u32,
    target: &FlattenTarget,
) -> Result<(), ViewerError> {
    let Some(engine) = state.models.get_mut(model_id) else {
        log::debug!("Unhide auf nicht geladenes Modell {model_id} ignoriert");
        return Ok(());
    };
    let local_ids = engine.flatten(target)?;
    if engine.unhide(scene, &local_ids) {
        // Wieder sichtbare Elemente sind erneut pickbar
        apply_selection_picks(state, scene, Some(false));
        state.sync_shared_ui();
    }
    Ok(())
}

/// Stellt die versteckten Elemente aller Modelle wieder her.
pub fn unhide_all(state: &mut ViewerState, scene: &mut dyn SceneBackend) {
    let mut changed = false;
    for engine in state.models.iter_mut() {
        changed |= engine.unhide_all(scene);
    }
    if changed {
        apply_selection_picks(state, scene, Some(false));
        state.sync_shared_ui();
    }
}

/// Versteckt die aktuelle Selektion, pro Modell gruppiert.
///
/// No-op, solange der Isolations-Modus aktiv ist.
pub fn hide_selected(state: &mut ViewerState, scene: &mut dyn SceneBackend) {
    if state.models.iter().any(|engine| engine.is_isolation_active()) {
        log::debug!("HideSelected während Isolation ignoriert");
        return;
    }

    let mut per_model: IndexMap<u32, Vec<u64>> = IndexMap::new();
    for element in state.selection.selected_elements.iter() {
        per_model
            .entry(element.model_id)
            .or_default()
            .push(element.local_id);
    }

    let mut changed = false;
    for (model_id, local_ids) in per_model {
        if let Some(engine) = state.models.get_mut(model_id) {
            changed |= engine.hide(scene, &local_ids);
        }
    }
    if changed {
        if prune_hidden_selection(state) {
            apply_selection_picks(state, scene, Some(false));
        }
        state.sync_shared_ui();
    }
}

/// Setzt den Reveal-Modus global; alle Engines ziehen nach.
pub fn set_reveal_mode(state: &mut ViewerState, scene: &mut dyn SceneBackend, on: bool) {
    if state.reveal_mode == on {
        return;
    }
    state.reveal_mode = on;
    for engine in state.models.iter_mut() {
        engine.toggle_reveal(scene, on);
    }
    state.sync_shared_ui();
}

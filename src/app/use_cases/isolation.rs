//! Use-Cases: Isolation der Selektion und ihr Reset.

use crate::app::state::ViewerState;
use crate::scene::SceneBackend;

use super::selection::apply_selection_picks;

/// Schaltet den Isolations-Modus um.
///
/// Ist Isolation aktiv, wird sie auf allen Modellen beendet; sonst isoliert
/// jede Engine den auf ihr Modell entfallenden Teil der Selektion. Eine
/// leere Selektion schaltet nichts ein.
pub fn toggle_isolation(state: &mut ViewerState, scene: &mut dyn SceneBackend) {
    let active = state.models.iter().any(|engine| engine.is_isolation_active());
    if active {
        reset_isolation(state, scene);
        return;
    }

    let selection = state.selection.snapshot();
    if selection.is_empty() {
        log::debug!("Isolation ohne Selektion ignoriert");
        return;
    }

    let mut changed = false;
    for engine in state.models.iter_mut() {
        changed |= engine.isolate(scene, &selection);
    }
    if changed {
        state.sync_shared_ui();
    }
}

/// Beendet die Isolation auf allen Modellen.
pub fn reset_isolation(state: &mut ViewerState, scene: &mut dyn SceneBackend) {
    let mut changed = false;
    for engine in state.models.iter_mut() {
        changed |= engine.reset_isolation(scene);
    }
    if changed {
        // Zuvor nicht isolierte Elemente sind wieder pickbar
        apply_selection_picks(state, scene, Some(false));
        state.sync_shared_ui();
    }
}

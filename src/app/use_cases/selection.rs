//! Use-Cases: Selektion setzen, leeren und Hover-Preselection.

use indexmap::IndexMap;

use crate::app::state::ViewerState;
use crate::core::GlobalElementId;
use crate::scene::SceneBackend;

/// Ersetzt die Selektion und pickt die pickbaren Elemente pro Modell.
///
/// `focus = None` fokussiert automatisch, wenn genau ein pickbares Element
/// übrig bleibt (und die Option aktiv ist). Elemente versteckter oder nicht
/// angehängter Modelle bleiben logisch selektiert, werden aber nicht gepickt.
pub fn select(
    state: &mut ViewerState,
    scene: &mut dyn SceneBackend,
    elements: &[GlobalElementId],
    focus: Option<bool>,
) {
    let ids = state.selection.ids_mut();
    ids.clear();
    ids.extend(elements.iter().copied());
    apply_selection_picks(state, scene, focus);
}

/// Leert die Selektion und hebt Picks und Highlight auf.
pub fn clear_selection(state: &mut ViewerState, scene: &mut dyn SceneBackend) {
    state.selection.ids_mut().clear();
    scene.unpick_all();
    scene.set_highlighted(false);
}

/// Nicht-persistentes Hover-Feedback; mutiert die Selektion nie.
pub fn preselect(
    state: &mut ViewerState,
    scene: &mut dyn SceneBackend,
    model_id: u32,
    local_ids: &[u64],
) {
    let Some(engine) = state.models.get(model_id) else {
        return;
    };
    let pickable: Vec<u64> = local_ids
        .iter()
        .copied()
        .filter(|&local_id| engine.can_be_picked_in_scene(local_id))
        .collect();
    if pickable.is_empty() {
        return;
    }
    if let Err(e) = scene.preselect_by_ids(model_id, &pickable) {
        log::error!("Preselect auf Modell {model_id} fehlgeschlagen: {e}");
    }
    scene.set_highlighted(true);
}

/// Gibt die Picks der aktuellen Selektion neu an das Backend aus.
///
/// Wird auch nach Unhide/Isolations-Reset aufgerufen, damit "selektiert,
/// aber versteckt" sich von selbst auflöst, sobald Elemente wieder pickbar
/// werden. Pick-Fehler werden geloggt; die Selektion bleibt bestehen.
pub(crate) fn apply_selection_picks(
    state: &mut ViewerState,
    scene: &mut dyn SceneBackend,
    focus: Option<bool>,
) {
    let mut per_model: IndexMap<u32, Vec<u64>> = IndexMap::new();
    for element in state.selection.selected_elements.iter() {
        let pickable = state
            .models
            .get(element.model_id)
            .is_some_and(|engine| engine.can_be_picked_in_scene(element.local_id));
        if pickable {
            per_model
                .entry(element.model_id)
                .or_default()
                .push(element.local_id);
        }
    }

    let pickable_total: usize = per_model.values().map(Vec::len).sum();
    if pickable_total == 0 {
        scene.unpick_all();
        scene.set_highlighted(false);
        return;
    }

    let focus = focus.unwrap_or(pickable_total == 1 && state.options.focus_single_selection);
    for (index, (model_id, local_ids)) in per_model.iter().enumerate() {
        // Der erste Pick ersetzt die Backend-Selektion, die weiteren ergänzen
        let exclusive = index == 0;
        if let Err(e) = scene.pick_by_ids(*model_id, local_ids, focus, exclusive) {
            log::error!("Pick auf Modell {model_id} fehlgeschlagen: {e}");
        }
    }
    scene.set_highlighted(true);
}

/// Entfernt Selektionseinträge, die inzwischen versteckt sind.
/// Gibt `true` zurück, wenn sich die Selektion geändert hat.
pub(crate) fn prune_hidden_selection(state: &mut ViewerState) -> bool {
    let before = state.selection.selected_elements.len();
    let ViewerState {
        models, selection, ..
    } = state;
    selection.ids_mut().retain(|element| {
        models
            .get(element.model_id)
            .map_or(true, |engine| !engine.hidden().contains(element))
    });
    state.selection.selected_elements.len() != before
}

/// Entfernt alle Selektionseinträge eines Modells (Detach).
/// Gibt `true` zurück, wenn sich die Selektion geändert hat.
pub(crate) fn prune_model_selection(state: &mut ViewerState, model_id: u32) -> bool {
    let before = state.selection.selected_elements.len();
    state
        .selection
        .ids_mut()
        .retain(|element| element.model_id != model_id);
    state.selection.selected_elements.len() != before
}

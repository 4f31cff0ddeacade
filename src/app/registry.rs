//! Registry der pro Modell laufenden Sichtbarkeits-Engines.

use indexmap::IndexMap;

use crate::core::{AttachedModel, ElementTypeGroup};
use crate::scene::SceneBackend;
use crate::shared::ViewerOptions;

use super::visibility::ModelVisibility;

/// Hält genau eine [`ModelVisibility`] pro angehängtem Modell.
///
/// Die Reihenfolge entspricht der Attach-Reihenfolge; Commands mit
/// unbekannter Modell-ID laufen als stilles No-op durch die Registry.
#[derive(Default)]
pub struct ModelRegistry {
    engines: IndexMap<u32, ModelVisibility>,
}

impl ModelRegistry {
    /// Leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt ein Modell an und legt seine Engine an.
    ///
    /// Ein bereits registriertes Modell wird vorher sauber abgebaut, damit
    /// keine Subsets des alten Standes in der Szene verbleiben.
    pub fn attach(
        &mut self,
        scene: &mut dyn SceneBackend,
        model: &AttachedModel,
        options: &ViewerOptions,
        reveal_mode: bool,
    ) {
        if let Some(mut previous) = self.engines.shift_remove(&model.model_id) {
            log::warn!("Modell {} war bereits angehängt, ersetze es", model.model_id);
            previous.dispose(scene);
        }
        let mut engine = ModelVisibility::new(model, options);
        engine.set_reveal_mode(reveal_mode);
        scene.attach_full_model(model.model_id);
        self.engines.insert(model.model_id, engine);
        log::info!(
            "Modell {} angehängt ({} sichtbare Elemente)",
            model.model_id,
            model.visual_element_ids.len()
        );
    }

    /// Löst ein Modell ab und gibt seine Szenen-Ressourcen frei.
    /// Gibt `false` zurück, wenn das Modell unbekannt war.
    pub fn detach(&mut self, scene: &mut dyn SceneBackend, model_id: u32) -> bool {
        match self.engines.shift_remove(&model_id) {
            Some(mut engine) => {
                engine.dispose(scene);
                log::info!("Modell {model_id} abgelöst");
                true
            }
            None => false,
        }
    }

    /// Ersetzt die Element-Typ-Gruppen eines Modells.
    pub fn set_type_groups(&mut self, model_id: u32, groups: Vec<ElementTypeGroup>) -> bool {
        match self.engines.get_mut(&model_id) {
            Some(engine) => {
                engine.set_type_groups(groups);
                true
            }
            None => false,
        }
    }

    /// Engine eines Modells, falls angehängt.
    pub fn get(&self, model_id: u32) -> Option<&ModelVisibility> {
        self.engines.get(&model_id)
    }

    /// Mutable Engine eines Modells, falls angehängt.
    pub fn get_mut(&mut self, model_id: u32) -> Option<&mut ModelVisibility> {
        self.engines.get_mut(&model_id)
    }

    /// Alle Engines in Attach-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &ModelVisibility> {
        self.engines.values()
    }

    /// Alle Engines mutable, in Attach-Reihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ModelVisibility> {
        self.engines.values_mut()
    }

    /// Anzahl der angehängten Modelle.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Ob kein Modell angehängt ist.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SpatialNode;
    use crate::scene::{RecordingScene, SceneCall};

    fn model(model_id: u32) -> AttachedModel {
        AttachedModel::new(
            model_id,
            vec![1, 2],
            SpatialNode::with_children(1, vec![SpatialNode::leaf(2)]),
        )
    }

    #[test]
    fn test_attach_registers_engine_and_scene_model() {
        let mut scene = RecordingScene::new();
        let mut registry = ModelRegistry::new();

        registry.attach(&mut scene, &model(7), &ViewerOptions::default(), false);

        assert_eq!(registry.len(), 1);
        assert!(registry.get(7).is_some());
        assert_eq!(
            scene.calls,
            vec![SceneCall::AttachFullModel { model_id: 7 }]
        );
    }

    #[test]
    fn test_attach_inherits_reveal_mode() {
        let mut scene = RecordingScene::new();
        let mut registry = ModelRegistry::new();

        registry.attach(&mut scene, &model(7), &ViewerOptions::default(), true);
        assert!(registry.get(7).expect("Engine erwartet").reveal_mode());
    }

    #[test]
    fn test_reattach_disposes_previous_engine() {
        let mut scene = RecordingScene::new();
        let mut registry = ModelRegistry::new();

        registry.attach(&mut scene, &model(7), &ViewerOptions::default(), false);
        registry
            .get_mut(7)
            .expect("Engine erwartet")
            .hide(&mut scene, &[2]);
        scene.clear_calls();

        registry.attach(&mut scene, &model(7), &ViewerOptions::default(), false);

        assert_eq!(registry.len(), 1);
        // Alte Engine abgebaut, neue ohne Hidden-Set
        assert!(scene
            .calls
            .contains(&SceneCall::DetachFullModel { model_id: 7 }));
        assert!(registry.get(7).expect("Engine erwartet").hidden().is_empty());
    }

    #[test]
    fn test_detach_unknown_model_is_noop() {
        let mut scene = RecordingScene::new();
        let mut registry = ModelRegistry::new();

        assert!(!registry.detach(&mut scene, 42));
        assert!(scene.calls.is_empty());
    }

    #[test]
    fn test_iteration_follows_attach_order() {
        let mut scene = RecordingScene::new();
        let mut registry = ModelRegistry::new();

        registry.attach(&mut scene, &model(3), &ViewerOptions::default(), false);
        registry.attach(&mut scene, &model(1), &ViewerOptions::default(), false);

        let ids: Vec<u32> = registry.iter().map(|engine| engine.model_id()).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}

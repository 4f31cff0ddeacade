//! Sichtbarkeits-Engine pro Modell: Hidden-Set, Isolation und Reveal.
//!
//! Jede Mutation aktualisiert erst die ID-Mengen und fordert danach genau
//! einen Subset-Umbau beim Backend an; veraltete Subsets bleiben nie
//! angehängt. Backend-Fehler werden hier geloggt und absorbiert — die
//! logische Mutation ist zu dem Zeitpunkt bereits committet.

use indexmap::IndexSet;

use crate::core::{
    AttachedModel, ElementTypeGroup, FlattenTarget, GlobalElementId, SpatialHierarchy, ViewerError,
};
use crate::scene::{SceneBackend, SubsetHandle, SubsetKey, SubsetStyle};
use crate::shared::ViewerOptions;

/// Sichtbarkeits-Zustandsmaschine eines angehängten Modells.
///
/// Zustände: Normal, teilweise versteckt (Hidden-Set nicht leer) und
/// isoliert; das Reveal-Flag liegt orthogonal dazu. Während Isolation
/// bleibt das Hidden-Set erhalten, ist für das Rendering aber irrelevant.
pub struct ModelVisibility {
    model_id: u32,
    /// Lokale IDs mit renderbarer Geometrie (Einfüge-Reihenfolge = Modellreihenfolge)
    visual_ids: IndexSet<u64>,
    hierarchy: SpatialHierarchy,
    hidden: IndexSet<GlobalElementId>,
    isolated: IndexSet<GlobalElementId>,
    isolation_active: bool,
    reveal_mode: bool,
    /// Primäres Subset (Hide- oder Isolations-Rendering); None = Vollmodell hängt
    active_subset: Option<SubsetHandle>,
    reveal_subset: Option<SubsetHandle>,
    reveal_style: SubsetStyle,
}

impl ModelVisibility {
    /// Baut die Engine für ein fertig geladenes Modell auf.
    pub fn new(model: &AttachedModel, options: &ViewerOptions) -> Self {
        Self {
            model_id: model.model_id,
            visual_ids: model.visual_element_ids.iter().copied().collect(),
            hierarchy: SpatialHierarchy::index_tree(&model.spatial_root),
            hidden: IndexSet::new(),
            isolated: IndexSet::new(),
            isolation_active: false,
            reveal_mode: false,
            active_subset: None,
            reveal_subset: None,
            reveal_style: SubsetStyle::Translucent {
                color: options.reveal_color,
                opacity: options.reveal_opacity,
            },
        }
    }

    /// Modell-ID dieser Engine.
    pub fn model_id(&self) -> u32 {
        self.model_id
    }

    /// Aktuelles Hidden-Set.
    pub fn hidden(&self) -> &IndexSet<GlobalElementId> {
        &self.hidden
    }

    /// Aktuelles Isolations-Set (nur während aktiver Isolation aussagekräftig).
    pub fn isolated(&self) -> &IndexSet<GlobalElementId> {
        &self.isolated
    }

    /// Ob der Isolations-Modus aktiv ist.
    pub fn is_isolation_active(&self) -> bool {
        self.isolation_active
    }

    /// Ob der Reveal-Modus aktiv ist.
    pub fn reveal_mode(&self) -> bool {
        self.reveal_mode
    }

    /// Setzt das Reveal-Flag ohne Overlay-Umbau (Vererbung beim Attach).
    pub fn set_reveal_mode(&mut self, on: bool) {
        self.reveal_mode = on;
    }

    /// Ersetzt die bekannten Element-Typ-Gruppen des Modells.
    pub fn set_type_groups(&mut self, groups: Vec<ElementTypeGroup>) {
        self.hierarchy.set_type_groups(groups);
    }

    /// Expandiert ein Flatten-Ziel zu lokalen IDs.
    pub fn flatten(&self, target: &FlattenTarget) -> Result<Vec<u64>, ViewerError> {
        self.hierarchy.flatten(target)
    }

    /// Versteckt Elemente samt aller Spatial-Nachfahren.
    ///
    /// Gibt `true` zurück, wenn sich das Hidden-Set geändert hat; ohne
    /// Änderung findet kein Subset-Umbau statt.
    pub fn hide(&mut self, scene: &mut dyn SceneBackend, local_ids: &[u64]) -> bool {
        let mut additions: Vec<GlobalElementId> = Vec::new();
        for &local_id in local_ids {
            for flattened in self.hierarchy.flatten_by_id(local_id) {
                let global = GlobalElementId::new(self.model_id, flattened);
                if !self.hidden.contains(&global) {
                    additions.push(global);
                }
            }
        }
        if additions.is_empty() {
            return false;
        }
        self.hidden.extend(additions);

        if !self.isolation_active {
            self.rebuild_primary_subset(scene);
        }
        self.refresh_reveal(scene);
        true
    }

    /// Macht das Verstecken rückgängig (inkl. Spatial-Nachfahren).
    ///
    /// Leert sich das Hidden-Set vollständig, wird das unveränderte
    /// Vollmodell wieder angehängt statt ein Subset zu bauen. Gibt `true`
    /// zurück, wenn mindestens ein Element wieder sichtbar wurde.
    pub fn unhide(&mut self, scene: &mut dyn SceneBackend, local_ids: &[u64]) -> bool {
        let mut removals: Vec<GlobalElementId> = Vec::new();
        for &local_id in local_ids {
            for flattened in self.hierarchy.flatten_by_id(local_id) {
                let global = GlobalElementId::new(self.model_id, flattened);
                if self.hidden.contains(&global) {
                    removals.push(global);
                }
            }
        }
        if removals.is_empty() {
            return false;
        }
        for global in &removals {
            self.hidden.swap_remove(global);
        }

        if self.isolation_active {
            // Isolation überlagert das Rendering; Subset bleibt unangetastet
        } else if self.hidden.is_empty() {
            self.restore_full_model(scene);
        } else {
            self.rebuild_primary_subset(scene);
        }
        self.refresh_reveal(scene);
        true
    }

    /// Stellt alle versteckten Elemente wieder her.
    ///
    /// No-op während Isolation oder wenn kein Subset existiert. Baut das
    /// Reveal-Overlay ab, lässt das Reveal-Flag aber unverändert — es wird
    /// beim nächsten Umschalten neu ausgewertet.
    pub fn unhide_all(&mut self, scene: &mut dyn SceneBackend) -> bool {
        if self.isolation_active || self.active_subset.is_none() {
            return false;
        }
        self.restore_full_model(scene);
        self.hidden.clear();
        self.teardown_reveal(scene);
        true
    }

    /// Isoliert die auf dieses Modell entfallenden Elemente der Selektion.
    ///
    /// No-op bei leerer Eingabe oder wenn die Menge dem aktuellen
    /// Isolations-Set entspricht. Das Hidden-Set bleibt erhalten.
    pub fn isolate(&mut self, scene: &mut dyn SceneBackend, selection: &[GlobalElementId]) -> bool {
        let requested: IndexSet<GlobalElementId> = selection
            .iter()
            .copied()
            .filter(|element| element.model_id == self.model_id)
            .collect();
        if requested.is_empty() || requested == self.isolated {
            return false;
        }

        let local_ids: Vec<u64> = requested.iter().map(|element| element.local_id).collect();
        self.isolation_active = true;
        self.isolated = requested;
        self.swap_in_subset(scene, &local_ids);
        if let Some(handle) = self.active_subset {
            scene.set_outline_selection(&[handle]);
        }
        self.refresh_reveal(scene);
        true
    }

    /// Beendet die Isolation und stellt den Hidden-konsistenten Zustand her:
    /// Subset bei nicht-leerem Hidden-Set, sonst das Vollmodell.
    pub fn reset_isolation(&mut self, scene: &mut dyn SceneBackend) -> bool {
        if !self.isolation_active {
            return false;
        }
        self.isolation_active = false;
        self.isolated.clear();

        if self.hidden.is_empty() {
            self.restore_full_model(scene);
        } else {
            self.rebuild_primary_subset(scene);
        }
        scene.set_outline_selection(&[]);
        self.refresh_reveal(scene);
        true
    }

    /// Schaltet das Reveal-Overlay um.
    ///
    /// Beim Einschalten: Overlay aus Hidden-Set plus — während Isolation —
    /// allen nicht isolierten sichtbaren IDs; eine leere Liste baut das
    /// Overlay ab, statt ein leeres Subset zu erzeugen. Beim Ausschalten
    /// wird das Overlay bedingungslos abgebaut.
    pub fn toggle_reveal(&mut self, scene: &mut dyn SceneBackend, on: bool) {
        self.reveal_mode = on;
        if on {
            self.rebuild_reveal(scene);
        } else {
            self.teardown_reveal(scene);
        }
    }

    /// Versteckbar sind sichtbare Elemente und Spatial-Container.
    pub fn can_be_hidden(&self, local_id: u64) -> bool {
        self.visual_ids.contains(&local_id) || self.hierarchy.is_container(local_id)
    }

    /// Pickbar ist ein Element, wenn es nicht versteckt ist und — während
    /// Isolation — zur isolierten Menge gehört.
    pub fn can_be_picked_in_scene(&self, local_id: u64) -> bool {
        let global = GlobalElementId::new(self.model_id, local_id);
        if self.hidden.contains(&global) {
            return false;
        }
        !self.isolation_active || self.isolated.contains(&global)
    }

    /// Baut beim Detach alle Subsets ab und nimmt das Modell aus der Szene.
    pub fn dispose(&mut self, scene: &mut dyn SceneBackend) {
        if let Some(handle) = self.active_subset.take() {
            scene.dispose_subset(handle);
        }
        self.teardown_reveal(scene);
        if self.isolation_active {
            scene.set_outline_selection(&[]);
        }
        scene.detach_full_model(self.model_id);
        self.hidden.clear();
        self.isolated.clear();
        self.isolation_active = false;
    }

    /// Baut das primäre Subset als "alle sichtbaren IDs minus Hidden-Set" neu.
    fn rebuild_primary_subset(&mut self, scene: &mut dyn SceneBackend) {
        let visible: Vec<u64> = self
            .visual_ids
            .iter()
            .copied()
            .filter(|&local_id| {
                !self
                    .hidden
                    .contains(&GlobalElementId::new(self.model_id, local_id))
            })
            .collect();
        self.swap_in_subset(scene, &visible);
    }

    /// Ersetzt das primäre Subset atomar; beim ersten Subset wird das
    /// Vollmodell aus der Szene genommen.
    fn swap_in_subset(&mut self, scene: &mut dyn SceneBackend, local_ids: &[u64]) {
        if self.active_subset.is_none() {
            scene.detach_full_model(self.model_id);
        }
        match scene.create_subset(SubsetKey::primary(self.model_id), local_ids, SubsetStyle::Solid)
        {
            Ok(handle) => self.active_subset = Some(handle),
            Err(e) => log::error!(
                "Subset-Aufbau für Modell {} fehlgeschlagen: {e}",
                self.model_id
            ),
        }
    }

    /// Entfernt das primäre Subset und hängt das unveränderte Modell wieder an.
    fn restore_full_model(&mut self, scene: &mut dyn SceneBackend) {
        if let Some(handle) = self.active_subset.take() {
            scene.dispose_subset(handle);
        }
        scene.attach_full_model(self.model_id);
    }

    /// Aktualisiert das Overlay, falls der Reveal-Modus aktiv ist.
    fn refresh_reveal(&mut self, scene: &mut dyn SceneBackend) {
        if self.reveal_mode {
            self.rebuild_reveal(scene);
        }
    }

    fn rebuild_reveal(&mut self, scene: &mut dyn SceneBackend) {
        let mut overlay: IndexSet<u64> =
            self.hidden.iter().map(|element| element.local_id).collect();
        if self.isolation_active {
            overlay.extend(self.visual_ids.iter().copied().filter(|&local_id| {
                !self
                    .isolated
                    .contains(&GlobalElementId::new(self.model_id, local_id))
            }));
        }
        if overlay.is_empty() {
            self.teardown_reveal(scene);
            return;
        }
        let local_ids: Vec<u64> = overlay.into_iter().collect();
        match scene.create_subset(SubsetKey::reveal(self.model_id), &local_ids, self.reveal_style)
        {
            Ok(handle) => self.reveal_subset = Some(handle),
            Err(e) => log::error!(
                "Reveal-Overlay für Modell {} fehlgeschlagen: {e}",
                self.model_id
            ),
        }
    }

    fn teardown_reveal(&mut self, scene: &mut dyn SceneBackend) {
        if let Some(handle) = self.reveal_subset.take() {
            scene.dispose_subset(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{RecordingScene, SceneCall};
    use crate::core::SpatialNode;

    /// Modell mit sichtbaren IDs {1,2,3} und Baum 1 → [2, 3].
    fn small_model() -> AttachedModel {
        AttachedModel::new(
            0,
            vec![1, 2, 3],
            SpatialNode::with_children(1, vec![SpatialNode::leaf(2), SpatialNode::leaf(3)]),
        )
    }

    fn engine() -> ModelVisibility {
        ModelVisibility::new(&small_model(), &ViewerOptions::default())
    }

    fn gid(local_id: u64) -> GlobalElementId {
        GlobalElementId::new(0, local_id)
    }

    #[test]
    fn test_hide_expands_subtree_and_requests_empty_subset() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        assert!(engine.hide(&mut scene, &[1]));
        assert_eq!(
            engine.hidden().iter().copied().collect::<Vec<_>>(),
            vec![gid(1), gid(2), gid(3)]
        );
        // Sichtbares Subset = alle sichtbaren IDs minus Hidden-Set = leer
        assert_eq!(scene.subset_requests(SubsetKey::primary(0)), vec![Vec::<u64>::new()]);
        // Vollmodell wurde vor dem ersten Subset ausgehängt
        assert!(scene
            .calls
            .contains(&SceneCall::DetachFullModel { model_id: 0 }));
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        assert!(engine.hide(&mut scene, &[1]));
        let rebuilds = scene.subset_requests(SubsetKey::primary(0)).len();

        // Zweiter identischer Aufruf: kein Umbau, keine Änderung
        assert!(!engine.hide(&mut scene, &[1]));
        assert_eq!(scene.subset_requests(SubsetKey::primary(0)).len(), rebuilds);
    }

    #[test]
    fn test_partial_unhide_rebuilds_subset() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.hide(&mut scene, &[1]);
        assert!(engine.unhide(&mut scene, &[2]));

        assert_eq!(
            engine.hidden().iter().copied().collect::<Vec<_>>(),
            vec![gid(1), gid(3)]
        );
        let requests = scene.subset_requests(SubsetKey::primary(0));
        assert_eq!(requests.last().expect("Umbau erwartet"), &vec![2]);
    }

    #[test]
    fn test_unhide_roundtrip_restores_full_model() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.hide(&mut scene, &[2]);
        assert!(engine.unhide(&mut scene, &[2]));

        assert!(engine.hidden().is_empty());
        // Fast-Path: Subset entsorgt, Vollmodell wieder angehängt
        assert!(scene
            .calls
            .contains(&SceneCall::AttachFullModel { model_id: 0 }));
        assert!(matches!(
            scene.calls.last(),
            Some(SceneCall::AttachFullModel { .. })
        ));
    }

    #[test]
    fn test_unhide_of_visible_elements_is_noop() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        assert!(!engine.unhide(&mut scene, &[2]));
        assert!(scene.calls.is_empty());
    }

    #[test]
    fn test_unhide_all_noop_during_isolation() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.hide(&mut scene, &[2]);
        engine.isolate(&mut scene, &[gid(3)]);
        assert!(!engine.unhide_all(&mut scene));
        assert_eq!(engine.hidden().len(), 1);
    }

    #[test]
    fn test_isolate_and_reset_restore_hide_state() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.hide(&mut scene, &[2]);
        let before = scene
            .subset_requests(SubsetKey::primary(0))
            .last()
            .cloned()
            .expect("Hide-Subset erwartet");

        assert!(engine.isolate(&mut scene, &[gid(3)]));
        assert!(engine.is_isolation_active());
        assert_eq!(
            scene.subset_requests(SubsetKey::primary(0)).last(),
            Some(&vec![3])
        );

        assert!(engine.reset_isolation(&mut scene));
        assert!(!engine.is_isolation_active());
        assert!(engine.isolated().is_empty());
        // Exakt der Zustand vor der Isolation: Hide-Subset mit denselben IDs
        assert_eq!(
            scene.subset_requests(SubsetKey::primary(0)).last(),
            Some(&before)
        );
    }

    #[test]
    fn test_reset_isolation_without_hidden_restores_full_model() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.isolate(&mut scene, &[gid(2)]);
        engine.reset_isolation(&mut scene);

        assert!(matches!(
            scene.calls.iter().rev().find(|call| !matches!(
                call,
                SceneCall::SetOutlineSelection { .. }
            )),
            Some(SceneCall::AttachFullModel { model_id: 0 })
        ));
    }

    #[test]
    fn test_isolate_same_set_is_noop() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        assert!(engine.isolate(&mut scene, &[gid(2), gid(3)]));
        let rebuilds = scene.subset_requests(SubsetKey::primary(0)).len();

        // Gleiche Menge in anderer Reihenfolge: No-op
        assert!(!engine.isolate(&mut scene, &[gid(3), gid(2)]));
        assert_eq!(scene.subset_requests(SubsetKey::primary(0)).len(), rebuilds);
    }

    #[test]
    fn test_isolate_ignores_foreign_models() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        assert!(!engine.isolate(&mut scene, &[GlobalElementId::new(9, 2)]));
        assert!(scene.calls.is_empty());
    }

    #[test]
    fn test_reveal_with_empty_overlay_is_torn_down_not_created() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.toggle_reveal(&mut scene, true);
        assert!(engine.reveal_mode());
        assert!(scene.subset_requests(SubsetKey::reveal(0)).is_empty());
    }

    #[test]
    fn test_reveal_overlay_follows_hidden_set() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.toggle_reveal(&mut scene, true);
        engine.hide(&mut scene, &[2]);

        assert_eq!(
            scene.subset_requests(SubsetKey::reveal(0)).last(),
            Some(&vec![2])
        );
    }

    #[test]
    fn test_reveal_overlay_includes_non_isolated_visuals() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.toggle_reveal(&mut scene, true);
        engine.isolate(&mut scene, &[gid(3)]);

        assert_eq!(
            scene.subset_requests(SubsetKey::reveal(0)).last(),
            Some(&vec![1, 2])
        );
    }

    #[test]
    fn test_toggle_reveal_off_disposes_overlay() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.toggle_reveal(&mut scene, true);
        engine.hide(&mut scene, &[2]);
        scene.clear_calls();

        engine.toggle_reveal(&mut scene, false);
        assert!(matches!(
            scene.calls.as_slice(),
            [SceneCall::DisposeSubset { .. }]
        ));
    }

    #[test]
    fn test_can_be_hidden_covers_visuals_and_containers() {
        let model = AttachedModel::new(
            0,
            vec![2, 3],
            // Container 1 ohne eigene Geometrie
            SpatialNode::with_children(1, vec![SpatialNode::leaf(2), SpatialNode::leaf(3)]),
        );
        let engine = ModelVisibility::new(&model, &ViewerOptions::default());

        assert!(engine.can_be_hidden(1));
        assert!(engine.can_be_hidden(2));
        assert!(!engine.can_be_hidden(99));
    }

    #[test]
    fn test_can_be_picked_respects_hidden_and_isolation() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.hide(&mut scene, &[2]);
        assert!(!engine.can_be_picked_in_scene(2));
        assert!(engine.can_be_picked_in_scene(3));

        engine.isolate(&mut scene, &[gid(3)]);
        assert!(engine.can_be_picked_in_scene(3));
        assert!(!engine.can_be_picked_in_scene(1));

        engine.reset_isolation(&mut scene);
        assert!(engine.can_be_picked_in_scene(1));
    }

    #[test]
    fn test_backend_failure_keeps_logical_state() {
        let mut scene = RecordingScene::new();
        scene.fail_create_subset = true;
        let mut engine = engine();

        // Subset-Aufbau schlägt fehl, das Hidden-Set bleibt trotzdem committet
        assert!(engine.hide(&mut scene, &[2]));
        assert!(engine.hidden().contains(&gid(2)));
        assert!(!engine.can_be_picked_in_scene(2));
    }

    #[test]
    fn test_dispose_releases_subsets_and_detaches() {
        let mut scene = RecordingScene::new();
        let mut engine = engine();

        engine.hide(&mut scene, &[2]);
        engine.toggle_reveal(&mut scene, true);
        scene.clear_calls();

        engine.dispose(&mut scene);
        assert_eq!(
            scene
                .calls
                .iter()
                .filter(|call| matches!(call, SceneCall::DisposeSubset { .. }))
                .count(),
            2
        );
        assert!(scene
            .calls
            .contains(&SceneCall::DetachFullModel { model_id: 0 }));
        assert!(engine.hidden().is_empty());
    }
}

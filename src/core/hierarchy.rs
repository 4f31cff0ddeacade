//! Spatial-Hierarchie-Index und Descendant-Flattening pro Modell.

use indexmap::{IndexMap, IndexSet};

use super::{ElementTypeGroup, SpatialNode, ViewerError};

/// Ziel einer Flatten-Operation: konkrete lokale ID oder benannte Typ-Gruppe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlattenTarget {
    /// Konkreter Spatial-Knoten
    ById(u64),
    /// Virtuelle Gruppe nach Element-Typ
    ByGroup(String),
}

/// Parent→Children-Adjazenz des Spatial-Baums eines Modells.
///
/// Wird einmal nach dem Laden des Modells aufgebaut; ein erneuter Aufbau
/// ersetzt den vorherigen Index vollständig. Alle Lesezugriffe sind pur.
#[derive(Debug, Clone, Default)]
pub struct SpatialHierarchy {
    /// Nur Knoten mit mindestens einem Kind werden gespeichert
    children: IndexMap<u64, Vec<u64>>,
    type_groups: IndexMap<String, Vec<u64>>,
}

impl SpatialHierarchy {
    /// Leerer Index (Modell ohne Strukturbaum).
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut den Index mit einem Pre-Order-Lauf über den Baum auf.
    pub fn index_tree(root: &SpatialNode) -> Self {
        let mut hierarchy = Self::default();
        hierarchy.collect(root);
        hierarchy
    }

    fn collect(&mut self, node: &SpatialNode) {
        if node.children.is_empty() {
            return;
        }
        self.children.insert(
            node.local_id,
            node.children.iter().map(|child| child.local_id).collect(),
        );
        for child in &node.children {
            self.collect(child);
        }
    }

    /// Ersetzt die bekannten Element-Typ-Gruppen.
    pub fn set_type_groups(&mut self, groups: Vec<ElementTypeGroup>) {
        self.type_groups = groups
            .into_iter()
            .map(|group| (group.name, group.members))
            .collect();
    }

    /// Prüft, ob die ID als Parent im Baum vorkommt (Container).
    pub fn is_container(&self, local_id: u64) -> bool {
        self.children.contains_key(&local_id)
    }

    /// Flacht ein Ziel zur vollständigen Nachfahren-Menge ab.
    ///
    /// Pre-Order, die Ziel-ID selbst zuerst, jede ID genau einmal. Eine ID
    /// ohne bekannte Kinder ergibt still das Singleton `[id]`; ein
    /// unbekannter Gruppenname schlägt mit [`ViewerError::UnknownGroup`] fehl.
    pub fn flatten(&self, target: &FlattenTarget) -> Result<Vec<u64>, ViewerError> {
        match target {
            FlattenTarget::ById(local_id) => Ok(self.flatten_by_id(*local_id)),
            FlattenTarget::ByGroup(name) => {
                let members = self
                    .type_groups
                    .get(name)
                    .ok_or_else(|| ViewerError::UnknownGroup(name.clone()))?;
                let mut result = IndexSet::new();
                for &member in members {
                    self.flatten_into(member, &mut result);
                }
                Ok(result.into_iter().collect())
            }
        }
    }

    /// Flacht eine konkrete ID ab (schlägt nie fehl).
    pub fn flatten_by_id(&self, local_id: u64) -> Vec<u64> {
        let mut result = IndexSet::new();
        self.flatten_into(local_id, &mut result);
        result.into_iter().collect()
    }

    fn flatten_into(&self, local_id: u64, result: &mut IndexSet<u64>) {
        if !result.insert(local_id) {
            return;
        }
        if let Some(children) = self.children.get(&local_id) {
            for &child in children {
                self.flatten_into(child, result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SpatialNode {
        // 1 → [2 → [4, 5], 3 → [6]]
        SpatialNode::with_children(
            1,
            vec![
                SpatialNode::with_children(2, vec![SpatialNode::leaf(4), SpatialNode::leaf(5)]),
                SpatialNode::with_children(3, vec![SpatialNode::leaf(6)]),
            ],
        )
    }

    #[test]
    fn test_flatten_root_is_preorder() {
        let hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        assert_eq!(hierarchy.flatten_by_id(1), vec![1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn test_flatten_leaf_yields_singleton() {
        let hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        assert_eq!(hierarchy.flatten_by_id(4), vec![4]);
        // Unbekannte IDs verhalten sich wie Blätter
        assert_eq!(hierarchy.flatten_by_id(99), vec![99]);
    }

    #[test]
    fn test_flatten_subtree() {
        let hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        assert_eq!(hierarchy.flatten_by_id(2), vec![2, 4, 5]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        let first = hierarchy.flatten_by_id(1);
        let second = hierarchy.flatten_by_id(1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_flatten_group_unions_member_subtrees() {
        let mut hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        hierarchy.set_type_groups(vec![ElementTypeGroup::new("Wände", vec![2, 3])]);

        let flattened = hierarchy
            .flatten(&FlattenTarget::ByGroup("Wände".to_string()))
            .expect("Gruppe ist registriert");
        assert_eq!(flattened, vec![2, 4, 5, 3, 6]);
    }

    #[test]
    fn test_flatten_group_deduplicates_overlap() {
        let mut hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        // Gruppe enthält Parent und Kind, das Kind darf nur einmal erscheinen
        hierarchy.set_type_groups(vec![ElementTypeGroup::new("Mix", vec![2, 4])]);

        let flattened = hierarchy
            .flatten(&FlattenTarget::ByGroup("Mix".to_string()))
            .expect("Gruppe ist registriert");
        assert_eq!(flattened, vec![2, 4, 5]);
    }

    #[test]
    fn test_flatten_unknown_group_fails() {
        let hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        assert_eq!(
            hierarchy.flatten(&FlattenTarget::ByGroup("Fenster".to_string())),
            Err(ViewerError::UnknownGroup("Fenster".to_string()))
        );
    }

    #[test]
    fn test_is_container() {
        let hierarchy = SpatialHierarchy::index_tree(&sample_tree());
        assert!(hierarchy.is_container(1));
        assert!(hierarchy.is_container(2));
        assert!(!hierarchy.is_container(4));
        assert!(!hierarchy.is_container(99));
    }

    #[test]
    fn test_reindex_replaces_previous_tree() {
        let old = SpatialHierarchy::index_tree(&sample_tree());
        assert!(old.is_container(2));

        let new_tree = SpatialNode::with_children(10, vec![SpatialNode::leaf(11)]);
        let rebuilt = SpatialHierarchy::index_tree(&new_tree);
        assert!(!rebuilt.is_container(2));
        assert_eq!(rebuilt.flatten_by_id(10), vec![10, 11]);
    }
}

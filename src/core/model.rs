//! Modell-Handle und Spatial-Baum, wie der Loader sie liefert.

/// Knoten des räumlichen Strukturbaums (Gebäude, Etage, Raum, Bauteil).
///
/// Der Baum ist azyklisch und verwurzelt; jede lokale ID kommt höchstens
/// einmal als Kind genau eines Parents vor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialNode {
    /// Lokale Element-ID des Knotens
    pub local_id: u64,
    /// Direkte Kinder in Dokumentreihenfolge
    pub children: Vec<SpatialNode>,
}

impl SpatialNode {
    /// Blattknoten ohne Kinder.
    pub fn leaf(local_id: u64) -> Self {
        Self {
            local_id,
            children: Vec::new(),
        }
    }

    /// Knoten mit Kindern.
    pub fn with_children(local_id: u64, children: Vec<SpatialNode>) -> Self {
        Self { local_id, children }
    }
}

/// Benannte Element-Typ-Gruppe (z.B. alle Wand-Instanzen eines Modells).
///
/// Wird beim Flatten als "virtueller" Teilbaum behandelt, wenn statt einer
/// konkreten ID ein Gruppenname umgeschaltet wird.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTypeGroup {
    /// Anzeigename der Gruppe
    pub name: String,
    /// Mitglieder in Dokumentreihenfolge (lokale IDs)
    pub members: Vec<u64>,
}

impl ElementTypeGroup {
    /// Erstellt eine Gruppe aus Name und Mitgliedern.
    pub fn new(name: impl Into<String>, members: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

/// Fertig geladenes Modell aus Sicht der Engine.
///
/// `visual_element_ids` sind die lokalen IDs mit renderbarer Geometrie —
/// eine echte Teilmenge aller Spatial-Knoten (Container wie Etagen haben
/// in der Regel keine eigene Geometrie).
#[derive(Debug, Clone)]
pub struct AttachedModel {
    /// Stabile, eindeutige Modell-ID
    pub model_id: u32,
    /// Lokale IDs mit renderbarer Geometrie
    pub visual_element_ids: Vec<u64>,
    /// Wurzel des räumlichen Strukturbaums
    pub spatial_root: SpatialNode,
}

impl AttachedModel {
    /// Erstellt ein Modell-Handle.
    pub fn new(model_id: u32, visual_element_ids: Vec<u64>, spatial_root: SpatialNode) -> Self {
        Self {
            model_id,
            visual_element_ids,
            spatial_root,
        }
    }
}

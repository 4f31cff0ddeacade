//! ViewerCommand-Enum für den zentralen Command-Datenfluss.

use crate::core::{AttachedModel, ElementTypeGroup, FlattenTarget};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Element-Referenzen von außen kommen als kodierte IDs
/// (`"<modell>-<lokal>"`) herein und werden im Controller dekodiert;
/// Dekodier- und Gruppenfehler propagieren aus `handle_command`,
/// Backend-Fehler nie.
#[derive(Debug, Clone)]
pub enum ViewerCommand {
    /// Fertig geladenes Modell anhängen
    AttachModel { model: AttachedModel },
    /// Modell ablösen und seine Szenen-Ressourcen freigeben
    DetachModel { model_id: u32 },
    /// Element-Typ-Gruppen eines Modells ersetzen
    SetTypeGroups {
        model_id: u32,
        groups: Vec<ElementTypeGroup>,
    },
    /// Elemente (inkl. Spatial-Nachfahren) verstecken
    HideElements {
        model_id: u32,
        target: FlattenTarget,
    },
    /// Aktuelle Selektion verstecken (pro Modell gruppiert)
    HideSelected,
    /// Verstecken rückgängig machen
    UnhideElements {
        model_id: u32,
        target: FlattenTarget,
    },
    /// Alle versteckten Elemente aller Modelle wiederherstellen
    UnhideAll,
    /// Reveal-Modus global setzen; neue Modelle erben das Flag
    SetRevealMode { on: bool },
    /// Isolations-Modus umschalten (Selektion isolieren bzw. aufheben)
    ToggleIsolation,
    /// Isolation auf allen Modellen beenden
    ResetIsolation,
    /// Selektion ersetzen (kodierte IDs; focus = None ⇒ Automatik)
    Select {
        elements: Vec<String>,
        focus: Option<bool>,
    },
    /// Selektion leeren und Highlights aufheben
    ClearSelection,
    /// Nicht-persistentes Hover-Feedback für eine ID-Gruppe
    Preselect { model_id: u32, local_ids: Vec<u64> },
}

//! Schmales Capability-Interface zum Rendering-/Modell-Collaborator.
//!
//! Die Engine kennt keine konkrete Rendering-Engine. Alles, was sie vom
//! Renderer braucht — Subsets erzeugen und freigeben, das Vollmodell ein-
//! und aushängen, Picks und Highlights — läuft über [`SceneBackend`].
//! Fehler des Backends werden an der Aufrufstelle geloggt und nie über die
//! Engine-Grenze propagiert: ein fehlgeschlagenes visuelles Update darf
//! weitere Sichtbarkeits-Commands nicht blockieren.

pub mod recording;

use thiserror::Error;

pub use recording::{RecordingScene, SceneCall};

/// Fehler aus dem Rendering-Backend (Subset-Aufbau, Picking).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Scene-Backend meldet: {0}")]
pub struct SceneError(pub String);

/// Art eines Geometrie-Subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsetKind {
    /// Primäres Subset (Hide- und Isolations-Rendering)
    Primary,
    /// Transluzentes Reveal-Overlay
    Reveal,
}

/// Schlüssel eines Subsets.
///
/// Pro (Modell, Art) existiert höchstens ein Subset; `create_subset` unter
/// gleichem Schlüssel ersetzt das vorhandene aus Sicht des Aufrufers atomar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubsetKey {
    pub model_id: u32,
    pub kind: SubsetKind,
}

impl SubsetKey {
    /// Schlüssel des primären Subsets eines Modells.
    pub fn primary(model_id: u32) -> Self {
        Self {
            model_id,
            kind: SubsetKind::Primary,
        }
    }

    /// Schlüssel des Reveal-Overlays eines Modells.
    pub fn reveal(model_id: u32) -> Self {
        Self {
            model_id,
            kind: SubsetKind::Reveal,
        }
    }
}

/// Opakes Handle auf ein vom Backend erzeugtes Subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubsetHandle(pub u64);

/// Darstellung eines Subsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubsetStyle {
    /// Originale Modell-Materialien
    Solid,
    /// Transluzentes Overlay (Farbe als 0xRRGGBB, Deckkraft 0..1)
    Translucent { color: u32, opacity: f32 },
}

/// Capability-Interface des Rendering-/Modell-Collaborators.
///
/// Alle Methoden sind synchron; die Engine läuft kooperativ auf dem
/// UI-Turn und enthält dadurch keine Suspension-Punkte innerhalb einer
/// Mutation.
pub trait SceneBackend {
    /// Erzeugt oder ersetzt das Subset unter `key` mit genau diesen IDs.
    fn create_subset(
        &mut self,
        key: SubsetKey,
        local_ids: &[u64],
        style: SubsetStyle,
    ) -> Result<SubsetHandle, SceneError>;

    /// Gibt die Geometrie-Ressourcen eines Subsets frei.
    fn dispose_subset(&mut self, handle: SubsetHandle);

    /// Hängt das vollständige, unveränderte Modell wieder in die Szene.
    fn attach_full_model(&mut self, model_id: u32);

    /// Entfernt das vollständige Modell aus der Szene.
    fn detach_full_model(&mut self, model_id: u32);

    /// Selektions-Pick für eine ID-Gruppe eines Modells.
    fn pick_by_ids(
        &mut self,
        model_id: u32,
        local_ids: &[u64],
        focus: bool,
        exclusive: bool,
    ) -> Result<(), SceneError>;

    /// Nicht-persistenter Preselection-Pick (Hover-Feedback).
    fn preselect_by_ids(&mut self, model_id: u32, local_ids: &[u64]) -> Result<(), SceneError>;

    /// Hebt jede Selektion im Backend auf.
    fn unpick_all(&mut self);

    /// Schaltet das Selektions-Highlight an oder aus.
    fn set_highlighted(&mut self, on: bool);

    /// Setzt die Outline-Selektion des Isolations-Effekts.
    fn set_outline_selection(&mut self, handles: &[SubsetHandle]);
}

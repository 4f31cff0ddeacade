//! Fehlertypen der Codec- und Hierarchie-Schicht.

use thiserror::Error;

/// Lokale Fehler aus Codec und Hierarchie.
///
/// Diese Fehler gehen an den unmittelbaren Aufrufer zurück; Backend-Fehler
/// (siehe [`crate::scene::SceneError`]) werden dagegen an der Aufrufstelle
/// geloggt und nie propagiert.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewerError {
    /// Fehlerhaft serialisierte globale Element-ID
    #[error("ungültige Element-ID: {0:?}")]
    InvalidIdentifier(String),
    /// Element-Typ-Gruppe ist nicht registriert
    #[error("unbekannte Typ-Gruppe: {0:?}")]
    UnknownGroup(String),
    /// Query auf ein Modell ohne registrierte Engine.
    /// Mutierende Commands überspringen fehlende Modelle still (Detach-Race).
    #[error("Modell {0} ist nicht geladen")]
    ModelNotLoaded(u32),
}

//! Globale Element-IDs über Modellgrenzen hinweg.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ViewerError;

/// Global adressierbare Element-ID: Paar aus Modell-ID und lokaler ID.
///
/// Serialisiert als `"<model>-<local>"`, z.B. `"1-42"`. Die Serialisierung
/// ist verlustfrei; nur der erste `-` trennt die beiden Teile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GlobalElementId {
    /// ID des geladenen Modells (eindeutig unter allen angehängten Modellen)
    pub model_id: u32,
    /// Lokale Element-ID innerhalb des Modells
    pub local_id: u64,
}

impl GlobalElementId {
    /// Erzeugt eine globale ID aus Modell-ID und lokaler ID.
    /// Schlägt nie fehl.
    pub fn new(model_id: u32, local_id: u64) -> Self {
        Self { model_id, local_id }
    }

    /// Zerlegt eine serialisierte ID wieder in ihre Bestandteile.
    ///
    /// Schlägt mit [`ViewerError::InvalidIdentifier`] fehl, wenn der String
    /// leer ist, keinen `-` enthält oder einer der Teile keine Ganzzahl ist.
    pub fn decode(raw: &str) -> Result<Self, ViewerError> {
        let invalid = || ViewerError::InvalidIdentifier(raw.to_string());
        let (model, local) = raw.split_once('-').ok_or_else(invalid)?;
        let model_id = model.parse::<u32>().map_err(|_| invalid())?;
        let local_id = local.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self { model_id, local_id })
    }
}

impl fmt::Display for GlobalElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.model_id, self.local_id)
    }
}

impl FromStr for GlobalElementId {
    type Err = ViewerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::decode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_for_valid_pairs() {
        for (model_id, local_id) in [(0, 0), (1, 2), (7, 123_456), (u32::MAX, u64::MAX)] {
            let id = GlobalElementId::new(model_id, local_id);
            let decoded = GlobalElementId::decode(&id.to_string()).expect("Roundtrip erwartet");
            assert_eq!(decoded, id);
        }
    }

    #[test]
    fn test_decode_rejects_empty_string() {
        assert_eq!(
            GlobalElementId::decode(""),
            Err(ViewerError::InvalidIdentifier(String::new()))
        );
    }

    #[test]
    fn test_decode_rejects_missing_separator() {
        assert!(matches!(
            GlobalElementId::decode("12"),
            Err(ViewerError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_integer_parts() {
        for raw in ["a-b", "1-b", "a-2", "1-2-3", "-5", "3-", " 1-2"] {
            assert!(
                matches!(
                    GlobalElementId::decode(raw),
                    Err(ViewerError::InvalidIdentifier(_))
                ),
                "sollte fehlschlagen: {raw:?}"
            );
        }
    }

    #[test]
    fn test_only_first_separator_splits() {
        // "2-3" ist keine Ganzzahl, daher Fehler statt stillem Abschneiden
        assert!(GlobalElementId::decode("1-2-3").is_err());
    }
}

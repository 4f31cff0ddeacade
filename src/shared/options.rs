//! Zentrale Konfiguration der Viewer-Engine.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Reveal-Overlay ─────────────────────────────────────────────────

/// Standard-Farbe des transluzenten Reveal-Overlays (0xRRGGBB: Cyan).
pub const REVEAL_COLOR_DEFAULT: u32 = 0x00FFFF;
/// Standard-Deckkraft des Reveal-Overlays.
pub const REVEAL_OPACITY_DEFAULT: f32 = 0.3;

// ── Selektion ──────────────────────────────────────────────────────

/// Ob eine Einzelselektion standardmäßig die Kamera fokussiert.
pub const FOCUS_SINGLE_SELECTION_DEFAULT: bool = true;

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
///
/// Wird vom Host als TOML-Text übergeben; die Engine persistiert selbst
/// nichts über die Session hinaus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    /// Farbe des Reveal-Overlays (0xRRGGBB)
    pub reveal_color: u32,
    /// Deckkraft des Reveal-Overlays (0..1)
    pub reveal_opacity: f32,
    /// Kamera-Fokus bei genau einem pickbaren Element
    pub focus_single_selection: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            reveal_color: REVEAL_COLOR_DEFAULT,
            reveal_opacity: REVEAL_OPACITY_DEFAULT,
            focus_single_selection: FOCUS_SINGLE_SELECTION_DEFAULT,
        }
    }
}

impl ViewerOptions {
    /// Liest Optionen aus einem TOML-Text.
    /// Fehlerhafte Eingabe fällt mit Warnung auf die Standardwerte zurück.
    pub fn from_toml_str(text: &str) -> Self {
        match toml::from_str(text) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Optionen fehlerhaft, verwende Standardwerte: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_toml() {
        let options = ViewerOptions::from_toml_str(
            "reveal_color = 0xFF00FF\nreveal_opacity = 0.5\nfocus_single_selection = false\n",
        );
        assert_eq!(options.reveal_color, 0xFF00FF);
        assert_eq!(options.reveal_opacity, 0.5);
        assert!(!options.focus_single_selection);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let options = ViewerOptions::from_toml_str("reveal_opacity = \"viel\"");
        assert_eq!(options, ViewerOptions::default());
    }
}

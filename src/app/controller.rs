//! Viewer-Controller für zentrale Command-Verarbeitung.

use crate::core::GlobalElementId;
use crate::scene::SceneBackend;

use super::state::ViewerState;
use super::use_cases;
use super::ViewerCommand;

/// Orchestriert Commands und Use-Cases auf dem ViewerState.
#[derive(Default)]
pub struct ViewerController;

impl ViewerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt mutierende Commands auf dem ViewerState aus.
    /// Dispatcht an die Use-Cases in `use_cases/`.
    ///
    /// Codec- und Hierarchie-Fehler propagieren zum Aufrufer; Fehler des
    /// Scene-Backends sind zu diesem Zeitpunkt bereits geloggt und absorbiert.
    pub fn handle_command(
        &mut self,
        state: &mut ViewerState,
        scene: &mut dyn SceneBackend,
        command: ViewerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());

        match command {
            // === Modell-Lebenszyklus ===
            ViewerCommand::AttachModel { model } => {
                use_cases::attach::attach_model(state, scene, &model)
            }
            ViewerCommand::DetachModel { model_id } => {
                use_cases::attach::detach_model(state, scene, model_id)
            }
            ViewerCommand::SetTypeGroups { model_id, groups } => {
                use_cases::attach::set_type_groups(state, model_id, groups)
            }

            // === Sichtbarkeit ===
            ViewerCommand::HideElements { model_id, target } => {
                use_cases::visibility::hide(state, scene, model_id, &target)?
            }
            ViewerCommand::HideSelected => use_cases::visibility::hide_selected(state, scene),
            ViewerCommand::UnhideElements { model_id, target } => {
                use_cases::visibility::unhide(state, scene, model_id, &target)?
            }
            ViewerCommand::UnhideAll => use_cases::visibility::unhide_all(state, scene),
            ViewerCommand::SetRevealMode { on } => {
                use_cases::visibility::set_reveal_mode(state, scene, on)
            }

            // === Isolation ===
            ViewerCommand::ToggleIsolation => use_cases::isolation::toggle_isolation(state, scene),
            ViewerCommand::ResetIsolation => use_cases::isolation::reset_isolation(state, scene),

            // === Selektion ===
            ViewerCommand::Select { elements, focus } => {
                let decoded = elements
                    .iter()
                    .map(|raw| GlobalElementId::decode(raw))
                    .collect::<Result<Vec<_>, _>>()?;
                use_cases::selection::select(state, scene, &decoded, focus)
            }
            ViewerCommand::ClearSelection => use_cases::selection::clear_selection(state, scene),
            ViewerCommand::Preselect {
                model_id,
                local_ids,
            } => use_cases::selection::preselect(state, scene, model_id, &local_ids),
        }

        Ok(())
    }
}

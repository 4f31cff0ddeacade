//! Headless-Backend: zeichnet alle Aufrufe auf, statt zu rendern.
//!
//! Dient Tests und Diagnose; Handles werden fortlaufend vergeben.

use super::{SceneBackend, SceneError, SubsetHandle, SubsetKey, SubsetStyle};

/// Ein aufgezeichneter Backend-Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    CreateSubset {
        key: SubsetKey,
        local_ids: Vec<u64>,
        style: SubsetStyle,
        handle: SubsetHandle,
    },
    DisposeSubset {
        handle: SubsetHandle,
    },
    AttachFullModel {
        model_id: u32,
    },
    DetachFullModel {
        model_id: u32,
    },
    PickByIds {
        model_id: u32,
        local_ids: Vec<u64>,
        focus: bool,
        exclusive: bool,
    },
    PreselectByIds {
        model_id: u32,
        local_ids: Vec<u64>,
    },
    UnpickAll,
    SetHighlighted {
        on: bool,
    },
    SetOutlineSelection {
        handles: Vec<SubsetHandle>,
    },
}

/// Aufzeichnendes [`SceneBackend`] ohne echte Rendering-Engine.
#[derive(Debug, Default)]
pub struct RecordingScene {
    next_handle: u64,
    /// Alle Aufrufe in chronologischer Reihenfolge
    pub calls: Vec<SceneCall>,
    /// Lässt `create_subset` fehlschlagen (Fehlerpfad-Tests)
    pub fail_create_subset: bool,
    /// Lässt `pick_by_ids` fehlschlagen (Fehlerpfad-Tests)
    pub fail_pick: bool,
}

impl RecordingScene {
    /// Leeres Aufzeichnungs-Backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle `create_subset`-ID-Listen für einen Schlüssel, chronologisch.
    pub fn subset_requests(&self, key: SubsetKey) -> Vec<Vec<u64>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SceneCall::CreateSubset {
                    key: k, local_ids, ..
                } if *k == key => Some(local_ids.clone()),
                _ => None,
            })
            .collect()
    }

    /// Alle Pick-Aufrufe als (Modell-ID, IDs, focus).
    pub fn pick_requests(&self) -> Vec<(u32, Vec<u64>, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SceneCall::PickByIds {
                    model_id,
                    local_ids,
                    focus,
                    ..
                } => Some((*model_id, local_ids.clone(), *focus)),
                _ => None,
            })
            .collect()
    }

    /// Verwirft alle aufgezeichneten Aufrufe.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl SceneBackend for RecordingScene {
    fn create_subset(
        &mut self,
        key: SubsetKey,
        local_ids: &[u64],
        style: SubsetStyle,
    ) -> Result<SubsetHandle, SceneError> {
        if self.fail_create_subset {
            return Err(SceneError("create_subset deaktiviert".to_string()));
        }
        self.next_handle += 1;
        let handle = SubsetHandle(self.next_handle);
        self.calls.push(SceneCall::CreateSubset {
            key,
            local_ids: local_ids.to_vec(),
            style,
            handle,
        });
        Ok(handle)
    }

    fn dispose_subset(&mut self, handle: SubsetHandle) {
        self.calls.push(SceneCall::DisposeSubset { handle });
    }

    fn attach_full_model(&mut self, model_id: u32) {
        self.calls.push(SceneCall::AttachFullModel { model_id });
    }

    fn detach_full_model(&mut self, model_id: u32) {
        self.calls.push(SceneCall::DetachFullModel { model_id });
    }

    fn pick_by_ids(
        &mut self,
        model_id: u32,
        local_ids: &[u64],
        focus: bool,
        exclusive: bool,
    ) -> Result<(), SceneError> {
        if self.fail_pick {
            return Err(SceneError("pick_by_ids deaktiviert".to_string()));
        }
        self.calls.push(SceneCall::PickByIds {
            model_id,
            local_ids: local_ids.to_vec(),
            focus,
            exclusive,
        });
        Ok(())
    }

    fn preselect_by_ids(&mut self, model_id: u32, local_ids: &[u64]) -> Result<(), SceneError> {
        self.calls.push(SceneCall::PreselectByIds {
            model_id,
            local_ids: local_ids.to_vec(),
        });
        Ok(())
    }

    fn unpick_all(&mut self) {
        self.calls.push(SceneCall::UnpickAll);
    }

    fn set_highlighted(&mut self, on: bool) {
        self.calls.push(SceneCall::SetHighlighted { on });
    }

    fn set_outline_selection(&mut self, handles: &[SubsetHandle]) {
        self.calls.push(SceneCall::SetOutlineSelection {
            handles: handles.to_vec(),
        });
    }
}

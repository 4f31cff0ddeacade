//! BIM Scope Viewer Library.
//! Sichtbarkeits-, Isolations- und Selektions-Engine für hierarchische
//! 3D-Gebäudemodelle, als Library exportiert für Hosts und Tests.

pub mod app;
pub mod core;
pub mod scene;
pub mod shared;

pub use app::{
    CommandLog, ModelRegistry, ModelVisibility, SelectionState, SharedUiState, ViewerCommand,
    ViewerController, ViewerState,
};
pub use core::{
    AttachedModel, ElementTypeGroup, FlattenTarget, GlobalElementId, SpatialHierarchy, SpatialNode,
    ViewerError,
};
pub use scene::{
    RecordingScene, SceneBackend, SceneCall, SceneError, SubsetHandle, SubsetKey, SubsetKind,
    SubsetStyle,
};
pub use shared::ViewerOptions;

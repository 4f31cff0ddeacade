//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod registry;
/// Viewer State und Controller
///
/// Dieses Modul verwaltet den Zustand der Engine (Modelle, Selektion, Spiegel).
pub mod state;
pub mod use_cases;
pub mod visibility;

pub use command_log::CommandLog;
pub use controller::ViewerController;
pub use events::ViewerCommand;
pub use registry::ModelRegistry;
pub use state::{SelectionState, SharedUiState, ViewerState};
pub use visibility::ModelVisibility;

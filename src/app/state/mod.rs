//! Zustandsschicht: Selektion, UI-Spiegel und Gesamtzustand.

pub mod selection;
pub mod shared_ui;
pub mod viewer_state;

pub use selection::SelectionState;
pub use shared_ui::SharedUiState;
pub use viewer_state::ViewerState;

//! Core-Domänentypen: Element-IDs, Modell-Handle, Spatial-Hierarchie.

pub mod element;
pub mod error;
pub mod hierarchy;
pub mod model;

pub use element::GlobalElementId;
pub use error::ViewerError;
pub use hierarchy::{FlattenTarget, SpatialHierarchy};
pub use model::{AttachedModel, ElementTypeGroup, SpatialNode};

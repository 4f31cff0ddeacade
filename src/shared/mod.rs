//! Von Engine und Host gemeinsam genutzte Typen.

pub mod options;

pub use options::ViewerOptions;

//! Use-Cases der Application-Layer-Orchestrierung.

pub mod attach;
pub mod isolation;
pub mod selection;
pub mod visibility;

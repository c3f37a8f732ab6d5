//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod dialogs;
pub mod drone;
pub mod editing;
pub mod options;
pub mod tiles;

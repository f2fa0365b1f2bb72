//! Post-render effects and their configuration.

/// Ink color parsing.
pub mod color;
/// Theme effect configuration and normalization.
pub mod config;
/// Risograph print simulation.
pub mod risograph;

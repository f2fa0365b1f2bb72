//! Shared building blocks: error taxonomy, frame/color types and numeric helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;

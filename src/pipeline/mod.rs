//! Effect pipeline orchestration.
//!
//! The orchestrator runs every enabled effect in a fixed order over a caller-owned RGBA8 buffer.
//! Threading options only change how rows are scheduled; output bytes are the same either way.

/// Pipeline entry points and reporting.
pub mod apply;
/// Trailing-edge debouncing for interactive callers.
pub mod debounce;
/// Row-parallel execution.
pub mod threading;

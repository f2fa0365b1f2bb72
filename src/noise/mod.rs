//! Reproducible randomness: identifier-to-seed hashing, the Mulberry32 generator and
//! per-pixel noise textures.
//!
//! Nothing here holds global state. Every stream is an explicitly constructed generator, so two
//! invocations with the same inputs always draw the same values.

/// Mulberry32 pseudo-random generator.
pub mod prng;
/// String identifier to 32-bit seed derivation.
pub mod seed;
/// Row-major noise textures drawn from a seeded generator.
pub mod texture;

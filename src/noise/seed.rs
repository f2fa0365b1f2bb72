/// Seed used when no identifier is available.
pub const DEFAULT_SEED: u32 = 42;

/// Derive a stable 32-bit seed from an identifier such as an export preset id.
///
/// Absent or empty identifiers map to [`DEFAULT_SEED`]. Otherwise the identifier is folded as
/// `acc = acc * 31 + unit` over its UTF-16 code units with signed 32-bit wraparound, and the
/// magnitude of the final accumulator is returned. For characters in the Basic Multilingual Plane
/// a code unit is the code point.
pub fn seed_from_str(id: Option<&str>) -> u32 {
    let Some(id) = id.filter(|s| !s.is_empty()) else {
        return DEFAULT_SEED;
    };

    let mut acc: i32 = 0;
    for unit in id.encode_utf16() {
        acc = (acc << 5).wrapping_sub(acc).wrapping_add(i32::from(unit));
    }
    acc.unsigned_abs()
}

#[cfg(test)]
#[path = "../../tests/unit/noise/seed.rs"]
mod tests;

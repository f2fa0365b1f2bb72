use super::*;

#[test]
fn absent_and_empty_ids_use_default_seed() {
    assert_eq!(seed_from_str(None), 42);
    assert_eq!(seed_from_str(Some("")), 42);
}

#[test]
fn known_identifiers_hash_to_golden_seeds() {
    assert_eq!(seed_from_str(Some("a")), 97);
    assert_eq!(seed_from_str(Some("ab")), 3105);
    assert_eq!(seed_from_str(Some("test")), 3_556_498);
    assert_eq!(seed_from_str(Some("hello world")), 1_794_106_052);
    assert_eq!(seed_from_str(Some("poster-2024")), 1_620_828_544);
}

#[test]
fn negative_accumulators_fold_to_their_magnitude() {
    // Both accumulate to a negative i32 before the absolute value is taken.
    assert_eq!(seed_from_str(Some("A2_Paper_v1")), 800_295_268);
    assert_eq!(seed_from_str(Some("A3_Landscape_v2")), 1_287_445_075);
}

#[test]
fn non_ascii_identifiers_hash_by_utf16_unit() {
    assert_eq!(seed_from_str(Some("é")), 233);
    // Surrogate pair: two code units.
    assert_eq!(seed_from_str(Some("🗺")), 1_772_893);
}

#[test]
fn seed_is_stable_across_calls() {
    let id = Some("my_preset_id_v1");
    assert_eq!(seed_from_str(id), seed_from_str(id));
}

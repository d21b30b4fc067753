use proptest::prelude::*;

use bracelet::cities::{
    CITY_TIMEZONES, list_groups, normalize_city_name, registered_cities, resolve, zone_short_name,
};
use bracelet::diagram::{RingSpec, caption_text, ring_hour_offset};

/// Pick a registered key and scramble its case and word separators.
fn spelled_city_strategy() -> impl Strategy<Value = (String, String)> {
    (0..CITY_TIMEZONES.len())
        .prop_flat_map(|index| {
            let key = CITY_TIMEZONES[index].key.to_string();
            let len = key.chars().count();
            (
                Just(key),
                proptest::collection::vec(any::<bool>(), len),
                proptest::collection::vec(any::<bool>(), len),
            )
        })
        .prop_map(|(key, upper, spaces)| {
            let spelled: String = key
                .chars()
                .enumerate()
                .map(|(i, c)| match c {
                    '_' if spaces[i] => ' ',
                    c if upper[i] => c.to_ascii_uppercase(),
                    c => c,
                })
                .collect();
            (key, spelled)
        })
}

#[test]
fn test_every_registered_city_resolves() {
    for key in registered_cities() {
        let tz = resolve(key).unwrap_or_else(|| panic!("{} did not resolve", key));
        let tail = tz.name().rsplit('/').next().unwrap();
        assert_eq!(zone_short_name(&tz), tail);
    }
}

#[test]
fn test_groups_are_a_subset_of_registered_cities() {
    let registered: Vec<String> = registered_cities()
        .map(bracelet::cities::display_name)
        .collect();
    let mut seen = Vec::new();
    for group in list_groups() {
        for city in group.cities {
            assert!(registered.contains(&city), "{} is not registered", city);
            assert!(!seen.contains(&city), "{} is in two groups", city);
            seen.push(city);
        }
    }
}

proptest! {
    /// Case and space/underscore spelling never change the result
    #[test]
    fn test_resolve_ignores_case_and_separators((key, spelled) in spelled_city_strategy()) {
        prop_assert_eq!(resolve(&spelled), resolve(&key));
        prop_assert!(resolve(&spelled).is_some());
    }

    /// Lookups of unregistered names come back empty instead of failing
    #[test]
    fn test_unregistered_names_do_not_resolve(name in "[a-z]{1,12}") {
        let registered = registered_cities().any(|key| key == normalize_city_name(&name));
        prop_assert_eq!(resolve(&name).is_some(), registered);
    }

    /// Normalization is idempotent
    #[test]
    fn test_normalize_is_idempotent(name in "[A-Za-z _]{0,20}") {
        let once = normalize_city_name(&name);
        prop_assert_eq!(normalize_city_name(&once), once.clone());
    }

    /// Every hour lands on its own slot, rotated by the offset
    #[test]
    fn test_ring_slots_are_a_permutation(offset in -14i32..=14) {
        let ring = RingSpec::outer(offset);
        let mut slots: Vec<i32> = (0..24).map(|hour| ring.slot_of(hour)).collect();
        slots.sort_unstable();
        prop_assert_eq!(slots, (0..24).collect::<Vec<_>>());
        prop_assert_eq!(ring.slot_of(0), offset.rem_euclid(24));
        prop_assert_eq!(ring.slot_of((24 - offset).rem_euclid(24)), 0);
    }

    /// Truncation never moves away from zero and stays within one hour
    #[test]
    fn test_truncation_toward_zero(offset in -14.0f64..14.0) {
        let whole = ring_hour_offset(offset);
        prop_assert!(f64::from(whole).abs() <= offset.abs());
        prop_assert!((offset - f64::from(whole)).abs() < 1.0);
        if offset != 0.0 {
            prop_assert!(caption_text(offset).starts_with("Time difference: "));
        }
    }
}

use mula_core::models::IpHasher;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_hash_never_equals_raw_ip(
        a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255,
        salt in "[a-z0-9]{1,24}"
    ) {
        let raw = format!("{a}.{b}.{c}.{d}");
        let hash = IpHasher::new(&salt).hash(&raw);
        prop_assert_ne!(hash.as_str(), raw.as_str());
        prop_assert!(!hash.as_str().contains(&raw));
    }

    #[test]
    fn prop_hash_is_stable(raw in "[0-9a-f:.]{2,39}") {
        let hasher = IpHasher::new("stable");
        prop_assert_eq!(hasher.hash(&raw), hasher.hash(&raw));
    }
}

use proptest::prelude::*;
use site_fs::NormalizedPath;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);

        // No backslashes survive normalization
        prop_assert!(!path.as_str().contains('\\'));

        // NormalizedPath -> native -> NormalizedPath is the identity
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_clean_is_idempotent(parts in prop::collection::vec("[a-z]{1,4}|\\.|\\.\\.", 0..8), absolute in any::<bool>()) {
        let raw = format!("{}{}", if absolute { "/" } else { "" }, parts.join("/"));
        let once = NormalizedPath::new(&raw).clean();
        let twice = once.clean();

        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.as_str().contains("//"));
        prop_assert!(once.as_str() == "." || !once.as_str().split('/').any(|c| c == "."), "{}", once);
    }

    #[test]
    fn test_join_never_introduces_backslashes(a in "[a-z/\\\\]{0,12}", b in "[a-z/\\\\]{0,12}") {
        let joined = NormalizedPath::new(&a).join(&b);
        prop_assert!(!joined.as_str().contains('\\'));
    }
}

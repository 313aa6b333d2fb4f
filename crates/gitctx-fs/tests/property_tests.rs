use gitctx_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));

        // Only a UNC lead may carry a doubled separator
        if path.is_network_path() {
            prop_assert!(!as_str[2..].contains("//"));
        } else {
            prop_assert!(!as_str.contains("//"));
        }

        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_ancestors_terminate_and_shrink(segments in proptest::collection::vec("[a-z]{1,8}", 0..12)) {
        let path = NormalizedPath::new(format!("/{}", segments.join("/")));
        let ancestors: Vec<_> = path.ancestors().collect();

        prop_assert_eq!(ancestors.len(), segments.len() + 1);
        prop_assert!(ancestors.last().unwrap().is_root());
        for pair in ancestors.windows(2) {
            prop_assert!(pair[0].as_str().len() > pair[1].as_str().len());
        }
    }

    #[test]
    fn test_join_properties(a in "\\PC*", b in "\\PC*") {
        let p1 = NormalizedPath::new(&a);
        let joined = p1.join(&b);

        prop_assert!(!joined.as_str().contains('\\'));

        if b.is_empty() || b == "." {
            prop_assert_eq!(joined, p1);
        }
    }
}

use std::collections::HashMap;

use mockify_core::lang::accessors;
use mockify_core::lang::keywords;
use mockify_core::lang::punctuation;
use mockify_core::lang::registry::Stability;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }

        for &alias in info.aliases {
            assert_eq!(
                keywords::from_str(alias),
                Some(info.id),
                "keyword alias not resolvable: {}",
                alias
            );
            if let Some(prev) = seen.insert(alias, info.id) {
                panic!("duplicate keyword alias spelling {:?}: {:?} and {:?}", alias, prev, info.id);
            }
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn accessor_keys_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, &'static str> = HashMap::new();

    for info in accessors::RETURN_VALUE_ACCESSORS {
        assert!(!info.return_type.is_empty());
        assert_eq!(accessors::accessor_for(info.return_type), Some(info.accessor));
        if let Some(prev) = seen.insert(info.return_type, info.accessor) {
            panic!(
                "duplicate accessor key {:?}: {:?} and {:?}",
                info.return_type, prev, info.accessor
            );
        }
    }
}

#[test]
fn accessor_keys_are_canonical_spellings() {
    for info in accessors::RETURN_VALUE_ACCESSORS {
        let key = info.return_type;
        assert_eq!(key.trim(), key, "key has surrounding whitespace: {key:?}");
        assert!(!key.contains("  "), "key has a double space: {key:?}");
        assert!(!key.contains(" *"), "pointer marker must hug the type: {key:?}");
        assert!(
            info.accessor.ends_with("ReturnValue"),
            "accessor {:?} does not follow the CppUTest naming scheme",
            info.accessor
        );
    }
}

#[test]
fn synthetic_entries_reuse_existing_accessors() {
    for info in accessors::RETURN_VALUE_ACCESSORS {
        if info.stability != Stability::Synthetic {
            continue;
        }
        assert!(
            accessors::RETURN_VALUE_ACCESSORS
                .iter()
                .any(|a| a.stability == Stability::Stable && a.accessor == info.accessor),
            "synthetic key {:?} points at an accessor no stable key uses",
            info.return_type
        );
    }
}

#[test]
fn pointer_keys_resolve() {
    assert_eq!(accessors::accessor_for(accessors::POINTER_KEY), Some("pointerReturnValue"));
    assert_eq!(
        accessors::accessor_for(accessors::CONST_POINTER_KEY),
        Some("constPointerReturnValue")
    );
}

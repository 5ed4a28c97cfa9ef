//! Tests for token splitting, routing, and strict/lenient application.

use super::error::ParameterError;
use super::parse::{Strictness, apply, split_token};
use super::registry::ParamStore;
use super::value::{Kind, Value};

fn store() -> ParamStore {
    let mut store = ParamStore::default();
    store.declare_integer("threads", 4, "worker threads");
    store.declare_boolean("watch", false, "show evaluations");
    store.declare_text("saveTo", "", "run subdirectory prefix");
    store
}

mod token_splitting {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        assert_eq!(split_token("threads:8"), ("threads", "8"));
    }

    #[test]
    fn value_keeps_further_colons_whole() {
        // No escaping in the format; the value is everything after the
        // first separator.
        assert_eq!(split_token("saveTo:a:b"), ("saveTo", "a:b"));
    }

    #[test]
    fn missing_separator_means_empty_value() {
        assert_eq!(split_token("saveTo"), ("saveTo", ""));
    }
}

mod routing {
    use super::*;

    #[test]
    fn token_is_routed_by_declared_kind() {
        let mut store = store();
        apply(&mut store, ["watch:true"], Strictness::Strict).unwrap();

        // A name declared boolean can never be absorbed as text or any
        // other kind.
        assert_eq!(store.get("watch", Kind::Boolean).unwrap(), &Value::Boolean(true));
        assert!(store.get("watch", Kind::Text).is_err());
    }

    #[test]
    fn later_token_overrides_earlier_in_same_pass() {
        let mut store = store();
        apply(&mut store, ["threads:2", "threads:8"], Strictness::Strict).unwrap();
        assert_eq!(store.get("threads", Kind::Integer).unwrap(), &Value::Integer(8));
    }

    #[test]
    fn empty_value_sets_empty_text() {
        let mut store = store();
        apply(&mut store, ["saveTo:keep", "saveTo"], Strictness::Strict).unwrap();
        assert_eq!(
            store.get("saveTo", Kind::Text).unwrap(),
            &Value::Text(String::new())
        );
    }
}

mod strictness {
    use super::*;

    #[test]
    fn strict_fails_on_unrecognized_name() {
        let mut store = store();
        let err = apply(&mut store, ["thraeds:8"], Strictness::Strict).unwrap_err();
        match err {
            ParameterError::Unrecognized { name, value } => {
                assert_eq!(name, "thraeds");
                assert_eq!(value, "8");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_skips_unrecognized_and_continues() {
        let mut store = store();
        apply(
            &mut store,
            ["removedOption:whatever", "threads:8"],
            Strictness::Lenient,
        )
        .unwrap();
        assert_eq!(store.get("threads", Kind::Integer).unwrap(), &Value::Integer(8));
    }

    #[test]
    fn malformed_value_is_fatal_even_when_lenient() {
        let mut store = store();
        let err = apply(&mut store, ["threads:many"], Strictness::Lenient).unwrap_err();
        assert!(matches!(err, ParameterError::MalformedValue { .. }));
    }

    #[test]
    fn strict_error_leaves_earlier_tokens_applied() {
        let mut store = store();
        let result = apply(&mut store, ["threads:8", "oops:1"], Strictness::Strict);
        assert!(result.is_err());
        assert_eq!(store.get("threads", Kind::Integer).unwrap(), &Value::Integer(8));
    }
}

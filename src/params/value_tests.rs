//! Tests for kind-tagged value parsing and file representation.

use super::error::ParameterError;
use super::strategy::{self, Strategy};
use super::value::{Kind, Value};

mod numeric_parsing {
    use super::*;

    #[test]
    fn integer_parses() {
        let value = Value::parse(Kind::Integer, "threads", "8").unwrap();
        assert_eq!(value, Value::Integer(8));
    }

    #[test]
    fn negative_integer_parses() {
        let value = Value::parse(Kind::Integer, "randomSeed", "-1").unwrap();
        assert_eq!(value, Value::Integer(-1));
    }

    #[test]
    fn long_parses_beyond_integer_range() {
        let value = Value::parse(Kind::Long, "lastInnovation", "4294967296").unwrap();
        assert_eq!(value, Value::Long(4_294_967_296));
    }

    #[test]
    fn double_parses() {
        let value = Value::parse(Kind::Double, "crossoverRate", "0.75").unwrap();
        assert_eq!(value, Value::Double(0.75));
    }

    #[test]
    fn malformed_integer_reports_token() {
        let err = Value::parse(Kind::Integer, "threads", "2.5").unwrap_err();
        match err {
            ParameterError::MalformedValue { name, value, kind, .. } => {
                assert_eq!(name, "threads");
                assert_eq!(value, "2.5");
                assert_eq!(kind, Kind::Integer);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_numeric_value_is_malformed() {
        assert!(Value::parse(Kind::Double, "crossoverRate", "").is_err());
    }
}

mod boolean_parsing {
    use super::*;

    // The boolean parser is deliberately lenient: case-insensitive "true"
    // is true and everything else is false. These tests pin that choice.

    #[test]
    fn true_is_true_case_insensitively() {
        assert_eq!(
            Value::parse(Kind::Boolean, "watch", "True").unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::parse(Kind::Boolean, "watch", "TRUE").unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn yes_is_false() {
        assert_eq!(
            Value::parse(Kind::Boolean, "watch", "yes").unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn typoed_true_is_false() {
        assert_eq!(
            Value::parse(Kind::Boolean, "watch", "ture").unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn empty_value_is_false() {
        assert_eq!(
            Value::parse(Kind::Boolean, "watch", "").unwrap(),
            Value::Boolean(false)
        );
    }
}

mod strategy_parsing {
    use super::*;

    #[test]
    fn known_strategy_resolves() {
        let value = Value::parse(Kind::Strategy, "ea", "NSGA2").unwrap();
        assert_eq!(value, Value::Strategy(Some(&strategy::NSGA2)));
    }

    #[test]
    fn unknown_strategy_fails() {
        let err = Value::parse(Kind::Strategy, "ea", "NoSuchEA").unwrap_err();
        match err {
            ParameterError::UnresolvedStrategy { name, value } => {
                assert_eq!(name, "ea");
                assert_eq!(value, "NoSuchEA");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_value_means_no_strategy() {
        let value = Value::parse(Kind::Strategy, "task", "").unwrap();
        assert_eq!(value, Value::Strategy(None));
    }

    #[test]
    fn resolve_finds_every_table_entry() {
        for entry in strategy::STRATEGIES {
            assert_eq!(Strategy::resolve(entry.name), Some(*entry));
        }
    }
}

mod file_representation {
    use super::*;

    #[test]
    fn numeric_values_round_trip_through_display() {
        for value in [
            Value::Integer(-17),
            Value::Long(9_000_000_000),
            Value::Double(0.05),
            Value::Double(50.0),
        ] {
            let text = value.to_string();
            let reparsed = Value::parse(value.kind(), "x", &text).unwrap();
            assert_eq!(reparsed, value);
        }
    }

    #[test]
    fn boolean_displays_lowercase() {
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
    }

    #[test]
    fn unset_strategy_displays_empty() {
        assert_eq!(Value::Strategy(None).to_string(), "");
    }

    #[test]
    fn strategy_displays_canonical_name() {
        assert_eq!(
            Value::Strategy(Some(&strategy::GAUSSIAN_PERTURBER)).to_string(),
            "GaussianPerturber"
        );
    }
}

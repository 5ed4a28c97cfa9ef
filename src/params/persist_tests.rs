//! Tests for parameter file writing, loading, and the round-trip property.

use super::persist::render;
use super::registry::Parameters;
use super::value::Kind;

mod file_format {
    use super::*;

    #[test]
    fn render_groups_kinds_in_fixed_order() {
        let params = Parameters::from_defaults();
        let rendered = render(&params.store);
        let lines: Vec<&str> = rendered.lines().collect();

        // One line per declared option, leading with the first-declared
        // integer option and ending with the last-declared strategy option.
        assert_eq!(lines.len(), params.len());
        assert_eq!(lines[0], "runNumber:0");
        assert_eq!(*lines.last().unwrap(), "goalTargetStat:Max");

        // Kind groups appear in save order: the first boolean line comes
        // after every long line, and so on.
        let position = |needle: &str| lines.iter().position(|l| *l == needle).unwrap();
        assert!(position("lastInnovation:0") < position("io:true"));
        assert!(position("io:true") < position("crossoverRate:0.5"));
        assert!(position("crossoverRate:0.5") < position("base:"));
        assert!(position("base:") < position("experiment:GenerationalExperiment"));
    }

    #[test]
    fn unset_strategy_renders_empty_value() {
        let params = Parameters::from_defaults();
        assert!(render(&params.store).lines().any(|l| l == "task:"));
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn save_then_load_reproduces_every_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameters.txt");

        let original = Parameters::from_tokens([
            "threads:8",
            "crossoverRate:0.9",
            "watch:true",
            "lastInnovation:12345",
            "saveTo:Experiment",
            "task:TetrisTask",
        ])
        .unwrap();
        original.save_to(&path).unwrap();

        let mut reloaded = Parameters::from_defaults();
        reloaded.load_from(&path).unwrap();

        assert_eq!(render(&original.store), render(&reloaded.store));
    }

    #[test]
    fn save_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameters.txt");
        std::fs::write(&path, "leftover:garbage\n".repeat(500)).unwrap();

        let params = Parameters::from_defaults();
        params.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render(&params.store));
    }
}

mod loading {
    use super::*;

    #[test]
    fn stale_option_in_old_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameters.txt");
        std::fs::write(&path, "removedInV2:true\nthreads:8\n").unwrap();

        let mut params = Parameters::from_defaults();
        params.load_from(&path).unwrap();

        assert_eq!(params.integer_parameter("threads").unwrap(), 8);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut params = Parameters::from_defaults();
        let err = params
            .load_from(&dir.path().join("nope.txt"))
            .unwrap_err();
        assert!(matches!(err, super::super::ParameterError::FileRead { .. }));
    }

    #[test]
    fn unwritable_target_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist
        let path = dir.path().join("missing").join("parameters.txt");
        let err = Parameters::from_defaults().save_to(&path).unwrap_err();
        assert!(matches!(err, super::super::ParameterError::FileWrite { .. }));
    }

    #[test]
    fn loaded_values_survive_with_correct_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameters.txt");
        std::fs::write(&path, "maxGens:1000\nnetPerturbRate:0.95\nea:NSGA2\n").unwrap();

        let mut params = Parameters::from_defaults();
        params.load_from(&path).unwrap();

        assert_eq!(params.integer_parameter("maxGens").unwrap(), 1000);
        assert_eq!(params.double_parameter("netPerturbRate").unwrap(), 0.95);
        assert_eq!(
            params.strategy_parameter("ea").unwrap().map(|s| s.name),
            Some("NSGA2")
        );
        // Kind routing is unaffected by load source
        assert!(params.store.get("maxGens", Kind::Double).is_err());
    }
}

//! Library integration tests.

use ndx::NdxError;

#[test]
fn error_types_are_public() {
    let err = NdxError::UnsupportedCommand {
        token: "test".into(),
    };
    assert_eq!(err.to_string(), "The command \"test\" is not supported!");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ndx::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use ndx::cli::Cli;

    let cli = Cli::from_argv(["ndx", "propagate.latest", "--commit"]);
    assert_eq!(cli.args, vec!["propagate.latest", "--commit"]);
}

#[test]
fn command_table_is_public() {
    use ndx::cli::COMMANDS;

    assert!(COMMANDS
        .iter()
        .any(|entry| entry.tokens.contains(&"upgrade.package")));
}

#[test]
fn manifest_helpers_are_public() {
    use ndx::manifest::{merge_default_keywords, split_scoped_name};

    assert_eq!(split_scoped_name("@scope/pkg").package_name, "pkg");
    assert_eq!(
        merge_default_keywords(&["foo".to_string()]),
        vec!["nodejs", "typescript", "tdd", "foo"]
    );
}

#[test]
fn autocloner_is_public() {
    use ndx::collaborators::MockToolkit;
    use ndx::repos::NeurodevsAutocloner;

    let toolkit = MockToolkit::new();
    NeurodevsAutocloner::new(&toolkit).run("/tmp/dev").unwrap();
    assert_eq!(toolkit.calls("GitAutocloner", "run"), 1);
}

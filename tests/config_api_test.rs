//! Integration tests for config module public API.

use passive_browsers::config::{
    load_config_file, parse_config, partition_cli_args, ConfigSources, PluginConfig,
};
use passive_browsers::matcher::Matcher;
use passive_browsers::PassiveBrowsersError;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn options_file_workflow() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("passive.yml");
    fs::write(
        &path,
        r#"
enabled: true
browsers:
  - chrome-passive
  - regex: 'ie\d+'
commandName: also
"#,
    )
    .unwrap();

    let options = load_config_file(&path).unwrap();
    let config = parse_config(&ConfigSources::from_options(options)).unwrap();

    assert!(config.enabled);
    assert_eq!(config.command_name, "also");
    assert!(config.browsers.matches("chrome-passive"));
    assert!(config.browsers.matches("ie11"));
    assert!(!config.browsers.matches("chrome"));
}

#[test]
fn command_line_beats_environment_beats_options() {
    let sources = ConfigSources {
        options: Some(serde_yaml::from_str("commandName: from-options").unwrap()),
        env: HashMap::from([(
            "PASSIVE_BROWSERS_COMMAND_NAME".to_string(),
            "from-env".to_string(),
        )]),
        argv: strings(&["--passive-browsers-command-name", "from-cli"]),
    };

    assert_eq!(parse_config(&sources).unwrap().command_name, "from-cli");
}

#[test]
fn defaults_apply_when_only_command_name_is_given() {
    let options = serde_yaml::from_str("commandName: only").unwrap();
    let config = parse_config(&ConfigSources::from_options(options)).unwrap();

    assert_eq!(config, PluginConfig::new("only"));
    assert!(config.enabled);
    assert_eq!(config.browsers, Matcher::none());
}

#[test]
fn invalid_types_are_reported_with_expected_types() {
    let cases = [
        (
            "enabled: 'yes'\ncommandName: only",
            "\"enabled\" option must be: Boolean, but got string",
        ),
        (
            "browsers: 1\ncommandName: only",
            "\"browsers\" option must be: String or RegExp or Array, but got number",
        ),
        ("commandName: 10", "\"commandName\" option must be: String, but got number"),
    ];

    for (yaml, expected) in cases {
        let options = serde_yaml::from_str(yaml).unwrap();
        let err = parse_config(&ConfigSources::from_options(options)).unwrap_err();
        assert_eq!(err.to_string(), expected, "for {:?}", yaml);
    }
}

#[test]
fn missing_command_name_is_an_error() {
    let err = parse_config(&ConfigSources::default()).unwrap_err();
    assert!(matches!(err, PassiveBrowsersError::MissingOption { .. }));
}

#[test]
fn option_arguments_are_split_from_the_rest() {
    let argv = strings(&[
        "passive-browsers",
        "resolve",
        "--passive-browsers-enabled=false",
        "-b",
        "bro",
        "--passive-browsers-browsers",
        "[a, b]",
    ]);

    let (rest, options) = partition_cli_args(&argv);

    assert_eq!(rest, strings(&["passive-browsers", "resolve", "-b", "bro"]));
    assert_eq!(
        options,
        strings(&[
            "--passive-browsers-enabled=false",
            "--passive-browsers-browsers",
            "[a, b]"
        ])
    );
}

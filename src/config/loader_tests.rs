//! Unit tests for config loading and precedence.

use super::*;

fn empty_config() -> ConfigFile {
    ConfigFile {
        dataset: None,
        sort_field: None,
        sort_order: None,
        log_file_path: None,
        keybindings: None,
    }
}

#[test]
fn missing_config_file_yields_none() {
    let result = load_config_file("/nonexistent/path/config.toml").unwrap();
    assert!(result.is_none());
}

#[test]
fn merge_with_no_file_uses_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn merge_with_empty_file_uses_defaults() {
    let resolved = merge_config(Some(empty_config()));
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn config_file_dataset_overrides_default() {
    let config = ConfigFile {
        dataset: Some(PathBuf::from("/data/custom.json")),
        ..empty_config()
    };
    let resolved = merge_config(Some(config));
    assert_eq!(resolved.dataset, Some(PathBuf::from("/data/custom.json")));
}

#[test]
fn config_file_sort_field_is_parsed() {
    let config = ConfigFile {
        sort_field: Some("born".to_string()),
        sort_order: Some("desc".to_string()),
        ..empty_config()
    };
    let resolved = merge_config(Some(config));
    assert_eq!(resolved.sort_field, SortField::Born);
    assert_eq!(resolved.sort_order, SortOrder::Desc);
}

#[test]
fn unrecognized_sort_field_degrades_to_none() {
    let config = ConfigFile {
        sort_field: Some("shoe_size".to_string()),
        sort_order: Some("sideways".to_string()),
        ..empty_config()
    };
    let resolved = merge_config(Some(config));
    assert_eq!(resolved.sort_field, SortField::None);
    assert_eq!(resolved.sort_order, SortOrder::Asc);
}

#[test]
fn config_file_log_path_overrides_default() {
    let custom = PathBuf::from("/custom/path/app.log");
    let config = ConfigFile {
        log_file_path: Some(custom.clone()),
        ..empty_config()
    };
    let resolved = merge_config(Some(config));
    assert_eq!(resolved.log_file_path, custom);
}

#[test]
fn cli_overrides_beat_config_file() {
    let config = ConfigFile {
        dataset: Some(PathBuf::from("/from/config.json")),
        sort_field: Some("name".to_string()),
        ..empty_config()
    };
    let merged = merge_config(Some(config));

    let resolved = apply_cli_overrides(
        merged,
        Some(PathBuf::from("/from/cli.json")),
        Some(SortField::Born),
    );

    assert_eq!(resolved.dataset, Some(PathBuf::from("/from/cli.json")));
    assert_eq!(resolved.sort_field, SortField::Born);
}

#[test]
fn cli_overrides_absent_leave_config_values() {
    let config = ConfigFile {
        sort_field: Some("sex".to_string()),
        ..empty_config()
    };
    let merged = merge_config(Some(config));
    let resolved = apply_cli_overrides(merged, None, None);
    assert_eq!(resolved.sort_field, SortField::Sex);
}

#[test]
fn config_toml_parses_known_fields() {
    let toml_str = r#"
        dataset = "/data/people.json"
        sort_field = "name"
        sort_order = "asc"
        log_file_path = "/tmp/pplv.log"
    "#;
    let config: ConfigFile = toml::from_str(toml_str).unwrap();
    assert_eq!(config.dataset, Some(PathBuf::from("/data/people.json")));
    assert_eq!(config.sort_field.as_deref(), Some("name"));
}

#[test]
fn config_toml_rejects_unknown_fields() {
    let toml_str = r#"
        theme = "dark"
    "#;
    let result: Result<ConfigFile, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "deny_unknown_fields should reject 'theme'");
}

#[test]
fn default_log_path_ends_with_pplv_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("pplv.log"),
        "Default log path should end with 'pplv.log', got: {:?}",
        path
    );
}

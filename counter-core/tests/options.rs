use std::{env, fs, path::PathBuf};

use counter_core::{options_from_file, ConfigFormat, WorkloadOptions};

fn write_tmp(name: &str, content: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("counter-core-{}-{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_default() {
    let opts = WorkloadOptions::default();

    assert!(opts.check().is_ok());
    assert_eq!(opts.expected_value(), Some(5000));

    insta::assert_snapshot!(serde_json::to_string_pretty(&opts).unwrap(), @r###"
    {
      "threads": 10,
      "increments": 500,
      "decrements": 0,
      "progress_interval": null
    }
    "###);
}

#[test]
fn test_zero_threads() {
    let opts = WorkloadOptions {
        threads: 0,
        ..Default::default()
    };

    assert!(opts.check().is_err());
}

#[test]
fn test_zero_progress_interval() {
    let opts = WorkloadOptions {
        progress_interval: Some(0),
        ..Default::default()
    };

    assert!(opts.check().is_err());
}

#[test]
fn test_expected_value_overflow() {
    let opts = WorkloadOptions {
        threads: 4,
        increments: u64::MAX,
        ..Default::default()
    };

    assert_eq!(opts.expected_value(), None);
    assert!(opts.check().is_err());

    let opts = WorkloadOptions {
        threads: 2,
        increments: i64::MAX as u64,
        ..Default::default()
    };

    assert_eq!(opts.expected_value(), None);
}

#[test]
fn test_load_json() {
    let path = write_tmp("workload.json", r#"{ "threads": 4, "increments": 25 }"#);
    let config = path.to_str().unwrap();

    let mut opts = WorkloadOptions::default();
    opts.try_load_from_file(config).unwrap();

    assert_eq!(
        opts,
        WorkloadOptions {
            config: Some(config.to_string()),
            threads: 4,
            increments: 25,
            ..Default::default()
        }
    );
}

#[test]
fn test_load_yaml() {
    let path = write_tmp("workload.yaml", "threads: 5\nincrements: 100\ndecrements: 100\nprogress_interval: 50\n");

    let opts: WorkloadOptions = options_from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(opts.threads, 5);
    assert_eq!(opts.increments, 100);
    assert_eq!(opts.decrements, 100);
    assert_eq!(opts.progress_interval, Some(50));
    assert_eq!(opts.config, None);
    assert_eq!(opts.expected_value(), Some(0));
}

#[test]
fn test_load_unknown_extension() {
    let path = write_tmp("workload.toml", "threads = 1\n");

    assert!(options_from_file::<WorkloadOptions>(path.to_str().unwrap()).is_err());
}

#[test]
fn test_load_missing_file() {
    assert!(options_from_file::<WorkloadOptions>("/nonexistent/workload.json").is_err());
}

#[test]
fn test_load_malformed_json() {
    let path = write_tmp("malformed.json", r#"{ "threads": "many" }"#);

    let err = options_from_file::<WorkloadOptions>(path.to_str().unwrap()).unwrap_err();

    assert!(err.to_string().starts_with("fail to load JSON config"));
}

#[test]
fn test_config_format_from_path() {
    assert_eq!(ConfigFormat::from_path("workload.json"), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path("/etc/counter/workload.yml"), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path("workload.yaml"), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path("workload.toml"), None);
    assert_eq!(ConfigFormat::from_path("json"), None);
}

#[test]
fn test_config_format_parse() {
    let opts: WorkloadOptions = ConfigFormat::Yaml.parse("decrements: 3\n").unwrap();
    assert_eq!(opts.decrements, 3);
    assert_eq!(opts.threads, 10);

    let err = ConfigFormat::Yaml.parse::<WorkloadOptions>("threads: [1, 2]\n").unwrap_err();
    assert!(err.to_string().starts_with("fail to load YAML config"));
}

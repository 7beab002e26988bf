use mongomuse::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("MUSE_SERVER__PORT");
        env::remove_var("MUSE_BACKEND__HOST");
        env::remove_var("MUSE_BACKEND__PORT");
        env::remove_var("MUSE_WIDGET__SAMPLE_PROMPTS");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("BACKEND_PORT");
    }
}

fn load(args: &[&str]) -> AppConfig {
    let argv = std::iter::once("mongomuse").chain(args.iter().copied());
    AppConfig::load_from_args(argv).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]);

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.backend.host, "localhost");
    assert_eq!(config.backend.port, 3000);
    assert_eq!(config.widget.title, "MongoMuse.ai");
    assert_eq!(config.widget.placeholder, "ask me anything about MongoDB...");
    assert_eq!(
        config.widget.sample_prompts,
        vec![
            "check the status of testbedmongo?".to_string(),
            "list all databases in testbedmongo!".to_string(),
        ]
    );
    assert_eq!(config.widget.idle_timeout_secs, 1800);
    assert_eq!(
        config.backend.query_url().unwrap().as_str(),
        "http://localhost:3000/query"
    );
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("MUSE_BACKEND__PORT", "4000");
        env::set_var("MUSE_BACKEND__HOST", "muse-backend");
    }

    let config = load(&[]);
    assert_eq!(config.backend.port, 4000);
    assert_eq!(config.backend.host, "muse-backend");

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_sample_prompts_list() {
    clear_env_vars();
    unsafe {
        env::set_var("MUSE_WIDGET__SAMPLE_PROMPTS", "ping the cluster,show slow queries");
    }

    let config = load(&[]);
    assert_eq!(
        config.widget.sample_prompts,
        vec!["ping the cluster".to_string(), "show slow queries".to_string()]
    );

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("muse.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
widget:
  title: "Muse"
  idle_timeout_secs: 60
"#,
    )
    .expect("Failed to write temp config");

    // Tell AppConfig to use this file via Env Var
    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.widget.title, "Muse");
    assert_eq!(config.widget.idle_timeout().as_secs(), 60);
    // Untouched keys keep their defaults.
    assert_eq!(config.backend.port, 3000);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.yaml");

    let result = AppConfig::load_from_args(["mongomuse", "--config", missing.to_str().unwrap()]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_overrides_env_and_file() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("muse.toml");
    fs::write(&file_path, "[backend]\nport = 5000\n").expect("Failed to write temp config");

    unsafe {
        env::set_var("MUSE_BACKEND__PORT", "4000");
    }

    let config = load(&[
        "--config",
        file_path.to_str().unwrap(),
        "--backend-port",
        "4100",
        "--backend-host",
        "10.0.0.7",
        "--port",
        "9000",
    ]);
    assert_eq!(config.backend.port, 4100);
    assert_eq!(config.backend.host, "10.0.0.7");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.bind_address(), "127.0.0.1:9000");

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_cli_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["mongomuse", "--backend-port", "not-a-port"]);
    assert!(result.is_err());
}

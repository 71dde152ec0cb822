// Changes the process cwd and environment, so it lives in its own test
// binary and stays the only test in it.

use std::fs;

use courier_api::app_config::Config;
use serde_json::json;

#[test]
fn test_run_mode_local_and_env_layers() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("config");
    fs::create_dir(&config_dir).unwrap();

    fs::write(
        config_dir.join("default.toml"),
        r#"
        [server]
        port = 9000

        [providers.custom-fulfillment]
        enabled = true
        "#,
    )
    .unwrap();
    fs::write(
        config_dir.join("staging.toml"),
        r#"
        [server]
        port = 9500

        [providers.custom-fulfillment.options]
        zone = "eu"
        carrier = "staging-carrier"
        "#,
    )
    .unwrap();
    fs::write(
        config_dir.join("local.toml"),
        r#"
        [providers.custom-fulfillment.options]
        carrier = "local-carrier"
        "#,
    )
    .unwrap();

    let previous_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    std::env::set_var("RUN_MODE", "staging");
    std::env::set_var("COURIER__SERVER__PORT", "8123");

    let loaded = Config::load();

    std::env::remove_var("RUN_MODE");
    std::env::remove_var("COURIER__SERVER__PORT");
    std::env::set_current_dir(previous_dir).unwrap();

    let config = loaded.unwrap();

    // Environment beats both files
    assert_eq!(config.server.port, 8123);

    let provider = &config.providers["custom-fulfillment"];
    assert!(provider.enabled);
    assert_eq!(provider.options.0["zone"], json!("eu"));
    // config/local overrides config/staging
    assert_eq!(provider.options.0["carrier"], json!("local-carrier"));
}

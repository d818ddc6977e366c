use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

const SANDBOX_CONFIG: &str = r#"
[gateways.paypal]
class = "Sandbox"
purse = "x@x.com"
secret = "${PAYGATE_CLI_SECRET}"

[gateways.webmoney_usd]
gateway = "Sandbox"
purse = "Z123"
"#;

#[test]
fn test_cli_resolves_all_gateways() -> Result<(), Box<dyn std::error::Error>> {
    let config = common::config_file(SANDBOX_CONFIG, ".toml");

    let mut cmd = Command::new(cargo_bin!("paygate"));
    cmd.arg(config.path()).env("PAYGATE_CLI_SECRET", "hunter2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("id,class"))
        .stdout(predicate::str::contains("paypal,Sandbox"))
        .stdout(predicate::str::contains("webmoney_usd,Sandbox"))
        .stdout(predicate::str::contains("hunter2").not());

    Ok(())
}

#[test]
fn test_cli_selected_gateway_only() {
    let config = common::config_file(SANDBOX_CONFIG, ".toml");

    let mut cmd = Command::new(cargo_bin!("paygate"));
    cmd.arg(config.path()).arg("--gateway").arg("webmoney_usd");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("webmoney_usd,Sandbox"))
        .stdout(predicate::str::contains("paypal").not());
}

#[test]
fn test_cli_unknown_gateway_fails() {
    let config = common::config_file(SANDBOX_CONFIG, ".toml");

    let mut cmd = Command::new(cargo_bin!("paygate"));
    cmd.arg(config.path()).arg("-g").arg("missing");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown gateway 'missing'."));
}

#[test]
fn test_cli_unknown_class_fails_fast() {
    let config = common::config_file(
        r#"{"gateways": {
            "paypal": {"class": "Sandbox", "purse": "x@x.com"},
            "stripe": {"class": "Stripe", "key": "k"}
        }}"#,
        ".json",
    );

    let mut cmd = Command::new(cargo_bin!("paygate"));
    cmd.arg(config.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("paypal").not())
        .stderr(predicate::str::contains("Unknown gateway class 'Stripe'"));
}

#[test]
fn test_cli_missing_config_file() {
    let mut cmd = Command::new(cargo_bin!("paygate"));
    cmd.arg("does/not/exist.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

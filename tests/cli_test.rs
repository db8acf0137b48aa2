use anyhow::Result;
use httpmock::prelude::*;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_nginx-blocklist");

#[test]
fn test_malformed_config_exits_non_zero_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_file = temp_dir.path().join("blocklist.conf");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "sources = [\"http://127.0.0.1:1/list.txt\"\noutput_file = ")?;

    let status = Command::new(BIN).arg("--config").arg(&config_path).status()?;

    assert!(!status.success());
    assert!(!output_file.exists());
    Ok(())
}

#[test]
fn test_missing_config_exits_non_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let status = Command::new(BIN)
        .arg("--config")
        .arg(temp_dir.path().join("nope.toml"))
        .status()?;

    assert_eq!(status.code(), Some(1));
    Ok(())
}

#[test]
fn test_partial_source_failure_exits_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_file = temp_dir.path().join("blocklist.conf");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ok.txt");
        then.status(200).body("198.51.100.0/24\n");
    });

    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "sources = [\"http://127.0.0.1:1/list.txt\", \"{}\"]\noutput_file = \"{}\"\nrequest_timeout = 5\n",
            server.url("/ok.txt"),
            output_file.to_str().unwrap().replace('\\', "/")
        ),
    )?;

    let output = Command::new(BIN).arg("--config").arg(&config_path).output()?;

    assert_eq!(output.status.code(), Some(0));
    let logs = String::from_utf8_lossy(&output.stdout);
    assert!(logs.contains("Error fetching http://127.0.0.1:1/list.txt"));
    assert!(std::fs::read_to_string(&output_file)?.contains("198.51.100.0/24 1;\n"));
    Ok(())
}

#[test]
fn test_unwritable_output_exits_non_zero() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_file = temp_dir.path().join("missing-dir").join("blocklist.conf");

    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "sources = []\noutput_file = \"{}\"\n",
            output_file.to_str().unwrap().replace('\\', "/")
        ),
    )?;

    let status = Command::new(BIN).arg("--config").arg(&config_path).status()?;

    assert_eq!(status.code(), Some(3));
    Ok(())
}

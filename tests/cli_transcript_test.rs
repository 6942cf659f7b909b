use assert_cmd::Command;
use neuro_boost::core::boost::expected_transcript;
use std::time::Duration;

fn neuro_boost() -> Command {
    let mut cmd = Command::cargo_bin("neuro-boost").unwrap();
    cmd.timeout(Duration::from_secs(30));
    cmd
}

#[test]
fn test_run_without_arguments_prints_transcript() {
    neuro_boost()
        .assert()
        .success()
        .code(0)
        .stdout(expected_transcript())
        .stderr("");
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = neuro_boost().output().unwrap();
    let second = neuro_boost().output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8(first.stdout).unwrap(), expected_transcript());
}

#[test]
fn test_extra_arguments_are_ignored() {
    for args in [
        vec!["alpha", "beta"],
        vec!["--no-such-flag", "value"],
        vec!["--help"],
        vec!["--version"],
        vec!["-x", "--", "gamma"],
    ] {
        neuro_boost()
            .args(&args)
            .assert()
            .success()
            .code(0)
            .stdout(expected_transcript())
            .stderr("");
    }
}

#[test]
fn test_verbose_logging_stays_off_stdout() {
    let output = neuro_boost().arg("--verbose").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_transcript());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_log_environment_is_not_read() {
    for (key, value) in [
        ("RUST_LOG", "debug"),
        ("RUST_LOG", "trace"),
        ("NEURO_BOOST_VERBOSE", "1"),
    ] {
        neuro_boost()
            .env(key, value)
            .assert()
            .success()
            .stdout(expected_transcript())
            .stderr("");
    }
}

#[test]
fn test_json_logs_flag_keeps_transcript() {
    let output = neuro_boost().arg("--json-logs").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_transcript());
    let stderr = String::from_utf8(output.stderr).unwrap();
    for line in stderr.lines() {
        assert!(serde_json::from_str::<serde_json::Value>(line).is_ok(), "not JSON: {}", line);
    }
}

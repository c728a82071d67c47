//! End-to-end checks on the compiled binary.

use std::process::Command;

const ENDPOINT_MISSING_MSG: &str = "The URL endpoint of the Azure container registry must be \
     set with environment variable ACR_URL";

fn acrq() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_acrq"));
    cmd.env_remove("ACR_URL");
    cmd
}

#[test]
fn test_missing_acr_url_fails_with_documented_message() {
    let output = acrq().args(["list"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end(), ENDPOINT_MISSING_MSG);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_acr_url_fails_for_describe_too() {
    let output = acrq().args(["describe", "my-image"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.trim_end(), ENDPOINT_MISSING_MSG);
}

#[test]
fn test_version_runs_without_acr_url() {
    let output = acrq().args(["version"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("acrq"));
    assert!(stdout.contains("libacrq"));
}

#[test]
fn test_help_shows_usage_and_examples() {
    let output = acrq().args(["--help"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("describe"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("Examples:"));
}

#[test]
fn test_unknown_command_fails() {
    let output = acrq().args(["push"]).output().unwrap();
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_describe_against_mock_registry() {
    let digest = "sha256:eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";
    let mut server = mockito::Server::new();
    let _tag_mock = server
        .mock("GET", "/acr/v1/svc/_tags/latest")
        .with_status(200)
        .with_body(format!(r#"{{"tag":{{"name":"latest","digest":"{}"}}}}"#, digest))
        .create();
    let _manifest_mock = server
        .mock("GET", format!("/acr/v1/svc/_manifests/{}", digest).as_str())
        .with_status(200)
        .with_body(format!(
            r#"{{"manifest":{{"digest":"{}","imageSize":1048576,"createdTime":"2024-01-15T10:30:00Z","lastUpdateTime":"2024-02-01T08:00:00Z","architecture":"amd64","os":"linux","tags":["latest"]}}}}"#,
            digest
        ))
        .create();

    let output = acrq()
        .env("ACR_URL", server.url())
        .args(["describe", "svc"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Image:        svc:latest"));
    assert!(stdout.contains("Size:         1 MBytes"));
}

#[test]
fn test_describe_missing_tag_exits_nonzero() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/acr/v1/svc/_tags/v1")
        .with_status(404)
        .with_body("tag unknown")
        .create();

    let output = acrq()
        .env("ACR_URL", server.url())
        .args(["describe", "svc", "v1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_list_emits_json_on_stdout() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/acr/v1/data-services/_manifests")
        .with_status(200)
        .with_body(r#"{"manifests":[]}"#)
        .create();

    let output = acrq()
        .env("ACR_URL", server.url())
        .args(["list"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "[]");
}

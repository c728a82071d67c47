use super::*;
use libacrq::AcrError;
use libacrq::auth::StaticCredentialProvider;

const DIGEST: &str = "sha256:dddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddddd";

#[test]
fn test_run_describe_renders_fixed_field_order() {
    let mut server = mockito::Server::new();
    let _tag_mock = server
        .mock("GET", "/acr/v1/svc/_tags/v1")
        .with_status(200)
        .with_body(format!(r#"{{"tag":{{"name":"v1","digest":"{}"}}}}"#, DIGEST))
        .create();
    let _manifest_mock = server
        .mock("GET", format!("/acr/v1/svc/_manifests/{}", DIGEST).as_str())
        .with_status(200)
        .with_body(format!(
            r#"{{"manifest":{{"digest":"{}","imageSize":5242880,"createdTime":"2024-01-15T10:30:00Z","lastUpdateTime":"2024-02-01T08:00:00Z","architecture":"amd64","os":"linux","tags":["v1"]}}}}"#,
            DIGEST
        ))
        .create();

    let config = RegistryConfig::new(&server.url()).unwrap();
    let provider = StaticCredentialProvider::anonymous();
    let output = run_describe(&config, &provider, "svc", "v1").unwrap();

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "Image:        svc:v1");
    assert!(lines[1].starts_with("Created on:   "));
    assert!(lines[2].starts_with("Last update:  "));
    assert_eq!(lines[3], "Architecture: amd64");
    assert_eq!(lines[4], "OS:           linux");
    assert_eq!(lines[5], "Size:         5 MBytes");
}

#[test]
fn test_run_describe_missing_tag_fails_with_not_found() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/acr/v1/svc/_tags/v1")
        .with_status(404)
        .with_body("tag unknown")
        .create();

    let config = RegistryConfig::new(&server.url()).unwrap();
    let provider = StaticCredentialProvider::anonymous();
    let result = run_describe(&config, &provider, "svc", "v1");

    assert!(matches!(result.unwrap_err(), AcrError::NotFound { .. }));
}

#[test]
fn test_run_describe_no_network_for_empty_image() {
    let config = RegistryConfig::new("https://example.azurecr.io").unwrap();
    let provider = StaticCredentialProvider::anonymous();
    let result = run_describe(&config, &provider, "", "latest");

    assert!(matches!(
        result.unwrap_err(),
        AcrError::InvalidArgument { .. }
    ));
}

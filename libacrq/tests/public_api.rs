use libacrq::auth::StaticCredentialProvider;
use libacrq::config::RegistryConfig;
use libacrq::registry::Registry;
use libacrq::{AcrError, Credentials};

#[test]
fn test_registry_constructs_from_public_types() {
    let config = RegistryConfig::new("https://example.azurecr.io").unwrap();
    let provider = StaticCredentialProvider::new(Credentials::basic("user", "pass"));
    let registry = Registry::new(&config, &provider).unwrap();
    assert_eq!(registry.default_repository(), "data-services");
}

#[test]
fn test_missing_endpoint_is_reported_before_any_operation() {
    let err = RegistryConfig::new("").unwrap_err();
    assert!(matches!(err, AcrError::Config { .. }));
    assert_eq!(
        err.to_string(),
        "The URL endpoint of the Azure container registry must be set with environment variable ACR_URL"
    );
}

#[test]
fn test_end_to_end_describe_and_list_against_mock_registry() {
    let digest = "sha256:cccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc";
    let mut server = mockito::Server::new();

    let manifest_body = format!(
        r#"{{"manifest":{{"digest":"{}","imageSize":3145728,"createdTime":"2024-03-01T12:00:00Z","lastUpdateTime":"2024-03-02T12:00:00Z","architecture":"arm64","os":"linux","tags":["latest"]}}}}"#,
        digest
    );
    let tag_mock = server
        .mock("GET", "/acr/v1/svc/_tags/latest")
        .with_status(200)
        .with_body(format!(r#"{{"tag":{{"name":"latest","digest":"{}"}}}}"#, digest))
        .create();
    let manifest_mock = server
        .mock("GET", format!("/acr/v1/svc/_manifests/{}", digest).as_str())
        .with_status(200)
        .with_body(manifest_body.clone())
        .create();
    let list_mock = server
        .mock("GET", "/acr/v1/svc/_manifests")
        .with_status(200)
        .with_body(format!(
            r#"{{"manifests":[{{"digest":"{}","imageSize":3145728,"createdTime":"2024-03-01T12:00:00Z","lastUpdateTime":"2024-03-02T12:00:00Z","tags":["latest"]}}]}}"#,
            digest
        ))
        .create();

    let config = RegistryConfig::new(&server.url()).unwrap();
    let provider = StaticCredentialProvider::anonymous();
    let registry = Registry::new(&config, &provider).unwrap();

    let record = registry.describe("svc", "latest").unwrap();
    assert_eq!(record.digest, digest);
    assert_eq!(record.architecture, "arm64");
    assert!(record.last_update >= record.created_on);

    let listed: libacrq::Result<Vec<_>> = registry.list("svc").collect();
    let listed = listed.unwrap();
    assert_eq!(listed.len(), 1);

    let json = libacrq::query::render_json(&listed).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["sha256"], digest);
    assert_eq!(parsed[0]["size"], 3.0);

    tag_mock.assert();
    manifest_mock.assert();
    list_mock.assert();
}

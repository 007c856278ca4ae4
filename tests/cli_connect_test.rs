use obsidian_to_notion::cli::commands::connect::{connect, ConnectArgs};
use obsidian_to_notion::cli::format_error;
use obsidian_to_notion::NotionConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> NotionConfig {
    NotionConfig {
        base_url: format!("{}/v1", server.uri()),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_connect_with_flag_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .and(header("authorization", "Bearer secret_flag_token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "u1", "name": "Migration Bot"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = connect(
        &ConnectArgs::default(),
        Some("  secret_flag_token  "),
        &config_for(&mock_server),
    )
    .await
    .unwrap();

    assert!(output.success);
    assert_eq!(output.name, "Migration Bot");
    assert_eq!(output.base_url, format!("{}/v1", mock_server.uri()));
}

#[tokio::test]
async fn test_connect_reports_api_error_with_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "Invalid token"
        })))
        .mount(&mock_server)
        .await;

    let err = connect(
        &ConnectArgs::default(),
        Some("secret_bad_token"),
        &config_for(&mock_server),
    )
    .await
    .unwrap_err();

    assert_eq!(format!("{err:#}"), "connection failed: unauthorized: Invalid token");
    assert_eq!(
        format_error(&err, false),
        "Error: connection failed: unauthorized: Invalid token"
    );
}

#[tokio::test]
async fn test_connect_timeout_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "u1"}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let args = ConnectArgs { timeout: Some(1) };
    let err = connect(&args, Some("secret_token"), &config_for(&mock_server))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("connection failed"));
    let api_err = err
        .downcast_ref::<obsidian_to_notion::NotionApiError>()
        .expect("root cause should be a NotionApiError");
    assert!(matches!(api_err, obsidian_to_notion::NotionApiError::Transport(e) if e.is_timeout()));
}

//! Integration tests for HostedAuthClient against a mock provider.

use anteroom_core::auth::{AuthCapability, AuthErrorKind, HostedAuthClient, OAuthProvider};
use anteroom_core::config::ProviderConfig;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HostedAuthClient {
    let config = ProviderConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ProviderConfig::default()
    };
    HostedAuthClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_ready_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ready"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).ready().await.unwrap();
}

#[tokio::test]
async fn test_send_email_code_posts_address() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/otp/email/send"))
        .and(body_json(serde_json::json!({"email": "dev@example.com"})))
        .and(header_exists("x-anteroom-device"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .send_email_code("dev@example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_configured_app_id_is_sent_as_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ready"))
        .and(header("x-anteroom-app", "app-prod-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = ProviderConfig {
        base_url: server.uri(),
        app_id: "app-prod-1".to_string(),
        timeout_secs: 5,
    };
    HostedAuthClient::new(&config)
        .unwrap()
        .ready()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_sms_code_surfaces_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/otp/sms/send"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": {"message": "Phone number is not reachable"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_sms_code("+15551234567")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AuthErrorKind::SendCode);
    assert_eq!(err.message, "Phone number is not reachable");
}

#[tokio::test]
async fn test_verify_email_code_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/otp/email/verify"))
        .and(body_json(serde_json::json!({"code": "123456"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"message": "Code expired"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .verify_email_code("123456")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AuthErrorKind::VerifyCode);
    assert_eq!(err.message, "Code expired");
}

#[tokio::test]
async fn test_verify_sms_code_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/otp/sms/verify"))
        .and(body_json(serde_json::json!({"code": "654321"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).verify_sms_code("654321").await.unwrap();
}

#[tokio::test]
async fn test_oauth_init_then_poll_to_completion() {
    // SAFETY: test-only env toggle, no other thread reads it concurrently.
    unsafe { std::env::set_var("ANTEROOM_NO_BROWSER", "1") };

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/init"))
        .and(body_json(serde_json::json!({"provider": "google"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authorization_url": "https://accounts.example.com/authorize?x=1",
            "nonce": "abc123"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oauth/result"))
        .and(query_param("nonce", "abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "complete"})),
        )
        .mount(&server)
        .await;

    client_for(&server)
        .start_oauth(OAuthProvider::Google)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_oauth_failed_handshake_carries_message() {
    unsafe { std::env::set_var("ANTEROOM_NO_BROWSER", "1") };

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/init"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authorization_url": "https://accounts.example.com/authorize",
            "nonce": "n1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oauth/result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "failed",
            "message": "User denied access"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .start_oauth(OAuthProvider::Apple)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AuthErrorKind::OAuth);
    assert_eq!(err.message, "User denied access");
}

#[tokio::test]
async fn test_current_user_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"id": "u_1", "email": "dev@example.com"}
        })))
        .mount(&server)
        .await;

    let user = client_for(&server).current_user().await.unwrap().unwrap();
    assert_eq!(user.email.as_deref(), Some("dev@example.com"));
    assert_eq!(user.display_handle(), Some("dev@example.com"));
}

#[tokio::test]
async fn test_current_user_absent_on_401() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(client_for(&server).current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_logout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).logout().await.unwrap();
}

#[tokio::test]
async fn test_transport_error_on_unreachable_provider() {
    let config = ProviderConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 1,
        ..ProviderConfig::default()
    };
    let client = HostedAuthClient::new(&config).unwrap();
    let err = client.ready().await.unwrap_err();
    assert_eq!(err.kind, AuthErrorKind::Transport);
}

#[test]
fn test_rejects_malformed_base_url() {
    let config = ProviderConfig {
        base_url: "not a url".to_string(),
        timeout_secs: 5,
        ..ProviderConfig::default()
    };
    assert!(HostedAuthClient::new(&config).is_err());
}

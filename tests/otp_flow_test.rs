use chrono::{Duration, Utc};
use gigmatch::utils::validation::Validate;
use gigmatch::{
    AppConfig, InMemoryDirectory, MarketError, OtpRecord, OtpService, WebhookNotifier,
};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(endpoint: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        r#"
[otp]
ttl_minutes = 5

[notifier]
endpoint = "{}"
timeout_seconds = 5
"#,
        endpoint
    )
    .unwrap();
    temp_file
}

#[tokio::test]
async fn test_end_to_end_issue_and_verify_with_real_http() {
    let server = MockServer::start();
    let delivery_mock = server.mock(|when, then| {
        when.method(POST).path("/send");
        then.status(200);
    });

    let config_file = write_config(&server.url("/send"));
    let config = AppConfig::from_file(config_file.path()).unwrap();
    config.validate().unwrap();

    let directory = InMemoryDirectory::new();
    let notifier = WebhookNotifier::from_config(&config.notifier).unwrap();
    let svc = OtpService::with_ttl(directory.clone(), notifier, config.ttl());

    let code = svc.issue("client@example.com").await.unwrap();
    delivery_mock.assert();

    let client = svc.verify("client@example.com", &code).await.unwrap();
    assert_eq!(client.email, "client@example.com");

    let record = directory.get("client@example.com").await.unwrap();
    assert!(record.verified);
    assert_eq!(record.code, code);
}

#[tokio::test]
async fn test_dispatch_outage_surfaces_but_code_stays_retrievable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/send");
        then.status(500);
    });

    let directory = InMemoryDirectory::new();
    let notifier = WebhookNotifier::new(server.url("/send"));
    let svc = OtpService::new(directory.clone(), notifier);

    let err = svc.issue("client@example.com").await.unwrap_err();
    assert!(matches!(err, MarketError::DispatchError { .. }));

    // record persisted before dispatch; the stored code still verifies
    let record = directory.get("client@example.com").await.unwrap();
    assert!(!record.verified);
    assert!(svc.verify("client@example.com", &record.code).await.is_ok());
}

#[tokio::test]
async fn test_expired_code_is_rejected_before_comparison() {
    let directory = InMemoryDirectory::new();
    directory
        .seed(OtpRecord {
            email: "client@example.com".to_string(),
            code: "123456".to_string(),
            expires_at: Utc::now() - Duration::minutes(1),
            verified: false,
        })
        .await;

    let server = MockServer::start();
    let notifier = WebhookNotifier::new(server.url("/send"));
    let svc = OtpService::new(directory, notifier);

    // matching code, but the record is past its window
    let err = svc.verify("client@example.com", "123456").await.unwrap_err();
    assert!(matches!(err, MarketError::OtpExpired { .. }));
}

#[tokio::test]
async fn test_reissue_overwrites_live_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/send");
        then.status(200);
    });

    let directory = InMemoryDirectory::new();
    let notifier = WebhookNotifier::new(server.url("/send"));
    let svc = OtpService::new(directory.clone(), notifier);

    let first = svc.issue("client@example.com").await.unwrap();
    let second = loop {
        let code = svc.issue("client@example.com").await.unwrap();
        if code != first {
            break code;
        }
    };

    let err = svc.verify("client@example.com", &first).await.unwrap_err();
    assert!(matches!(err, MarketError::OtpMismatch { .. }));

    let client = svc.verify("client@example.com", &second).await.unwrap();
    assert_eq!(client.email, "client@example.com");
}

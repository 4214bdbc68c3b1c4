//! Config Integration Tests
//!
//! Config file creation and the wiring from config to a Gemini-backed feed.
//! No network access: a missing API key fails before any request is sent.

use std::fs;

use prompt_feed::{AcquisitionStatus, Category, ConfigService, Facet, PromptFeed};

#[tokio::test]
async fn test_feed_from_config_without_key_reports_credential_error() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ConfigService::load_or_create(tmp.path().join("config.json")).unwrap();
    let config = service.resolved_with(|_| None);
    assert!(config.provider.api_key.is_none());

    let feed = PromptFeed::from_config(&config).unwrap();
    feed.start().await;

    let status = feed.status().await;
    let message = status.error_message().unwrap();
    assert!(message.contains("API key"));
    assert!(feed.visible_records().await.is_empty());
}

#[tokio::test]
async fn test_default_category_from_config() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");
    fs::write(
        &path,
        r#"{"feed": {"default_category": "Viral Trends", "suggestion_limit": 3}}"#,
    )
    .unwrap();

    let service = ConfigService::load_or_create(&path).unwrap();
    let feed = PromptFeed::from_config(&service.resolved_with(|_| None)).unwrap();

    assert_eq!(
        feed.selection().await.category,
        Facet::Only(Category::ViralTrends)
    );

    // trend category is served locally, so no key is needed
    feed.start().await;
    assert_eq!(feed.status().await, AcquisitionStatus::Success);
    assert!(feed.tag_suggestions("r").await.len() <= 3);
}

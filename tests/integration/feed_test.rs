//! Feed Integration Tests
//!
//! Drives `PromptFeed` through scripted providers: source selection per
//! category, reset-on-change, error handling, and out-of-order resolutions.

use std::sync::Arc;

use prompt_feed::{
    trend_dataset, AcquisitionOutcome, AcquisitionStatus, Category, Country, Facet, Platform,
    PromptFeed, ProviderError, SelectionUpdate,
};

use super::common::{prompt, ScriptedProvider};

fn remote_batch() -> Vec<prompt_feed::Prompt> {
    vec![
        prompt("r1", "Sketch a cyberpunk alley", "Image Generation", "Imagen", &["sci-fi", "city"]),
        prompt("r2", "Explain borrow checking", "Code", "Claude", &["rust"]),
        prompt("r3", "Write a sonnet about rain", "Writing", "Gemini", &["poetry"]),
    ]
}

// ============================================================================
// Source selection
// ============================================================================

#[tokio::test]
async fn test_all_category_puts_static_trends_first() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.reply(Ok(remote_batch()));
    let feed = PromptFeed::new(provider.clone());

    let outcome = feed.start().await;

    let trends = trend_dataset();
    assert_eq!(
        outcome,
        AcquisitionOutcome::Loaded {
            count: trends.len() + 3
        }
    );
    let visible = feed.visible_records().await;
    let (head, tail) = visible.split_at(trends.len());
    assert_eq!(head, &trends[..]);
    assert_eq!(
        tail.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["r1", "r2", "r3"]
    );
    assert_eq!(provider.criteria()[0].category, Facet::All);
}

#[tokio::test]
async fn test_trend_category_never_calls_provider() {
    let provider = Arc::new(ScriptedProvider::new());
    let feed = PromptFeed::new(provider.clone());

    feed.update_selection(SelectionUpdate::new().category(Category::ViralTrends))
        .await;
    feed.update_selection(SelectionUpdate::new().country(Country::UnitedStates))
        .await;

    assert_eq!(provider.call_count(), 0);
    let visible = feed.visible_records().await;
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|r| r.country.as_deref() == Some("USA")));
}

#[tokio::test]
async fn test_single_category_trusts_requested_category() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.reply(Ok(remote_batch()));
    let feed = PromptFeed::new(provider.clone());

    feed.update_selection(SelectionUpdate::new().category(Category::Code))
        .await;

    let visible = feed.visible_records().await;
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|r| r.category == "Code"));
    assert_eq!(provider.criteria()[0].category, Facet::Only(Category::Code));
}

// ============================================================================
// Resets and errors
// ============================================================================

#[tokio::test]
async fn test_category_change_resets_dependent_facets() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.reply(Ok(remote_batch()));
    provider.reply(Ok(remote_batch()));
    let feed = PromptFeed::new(provider.clone());

    feed.update_selection(
        SelectionUpdate::new()
            .category(Category::ViralTrends)
            .platform(Platform::X),
    )
    .await;
    feed.add_tag("retro").await;
    feed.update_selection(SelectionUpdate::new().search("poster"))
        .await;

    feed.update_selection(SelectionUpdate::new().category(Category::Writing))
        .await;

    let selection = feed.selection().await;
    assert_eq!(selection.platform, Facet::All);
    assert!(selection.selected_tags.is_empty());
    assert!(selection.date_range.is_none());
    assert_eq!(selection.search_term, "poster");
}

#[tokio::test]
async fn test_failure_empties_feed_and_refresh_recovers() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.reply(Ok(remote_batch()));
    provider.reply(Err(ProviderError::invalid_response(
        "Invalid data structure received from AI.",
    )));
    provider.reply(Ok(remote_batch()));
    let feed = PromptFeed::new(provider.clone());

    feed.start().await;
    assert!(!feed.visible_records().await.is_empty());

    let outcome = feed.refresh().await;
    let message = match outcome {
        AcquisitionOutcome::Failed { message } => message,
        other => panic!("expected failure, got {:?}", other),
    };
    assert!(message.starts_with("Failed to generate prompts:"));
    assert!(!message.contains("Invalid data structure"));
    assert_eq!(feed.status().await, AcquisitionStatus::Error { message });
    assert!(feed.visible_records().await.is_empty());
    assert!(feed.all_tags().await.is_empty());

    feed.refresh().await;
    assert_eq!(feed.status().await, AcquisitionStatus::Success);
    assert_eq!(provider.call_count(), 3);
}

#[tokio::test]
async fn test_unknown_failure_message() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.reply(Err(ProviderError::other("socket exploded")));
    let feed = PromptFeed::new(provider);

    feed.start().await;

    assert_eq!(
        feed.status().await.error_message(),
        Some("An unknown error occurred.")
    );
}

// ============================================================================
// Ordering
// ============================================================================

#[tokio::test]
async fn test_superseded_acquisition_is_ignored() {
    let provider = Arc::new(ScriptedProvider::new());
    let slow = provider.gate();
    let fast = provider.gate();
    let feed = PromptFeed::new(provider.clone());

    let first = {
        let feed = feed.clone();
        tokio::spawn(async move {
            feed.update_selection(SelectionUpdate::new().category(Category::Code))
                .await
        })
    };
    provider.wait_for_calls(1).await;

    let second = {
        let feed = feed.clone();
        tokio::spawn(async move {
            feed.update_selection(SelectionUpdate::new().category(Category::Writing))
                .await
        })
    };
    provider.wait_for_calls(2).await;

    fast.send(Ok(vec![prompt("w1", "Fresh", "Writing", "m", &["new"])]))
        .unwrap();
    assert_eq!(
        second.await.unwrap(),
        Some(AcquisitionOutcome::Loaded { count: 1 })
    );

    slow.send(Err(ProviderError::NetworkError {
        message: "timed out".to_string(),
    }))
    .unwrap();
    assert_eq!(first.await.unwrap(), Some(AcquisitionOutcome::Superseded));

    assert_eq!(feed.status().await, AcquisitionStatus::Success);
    let visible = feed.visible_records().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "w1");
    assert_eq!(feed.all_tags().await, vec!["new"]);
}

#[tokio::test]
async fn test_tag_suggestions_follow_full_set_not_visible_set() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.reply(Ok(remote_batch()));
    let feed = PromptFeed::new(provider);
    feed.start().await;

    feed.update_selection(SelectionUpdate::new().search("sonnet"))
        .await;
    assert_eq!(feed.visible_records().await.len(), 1);

    // "rust" is only on a hidden record but still suggested
    assert_eq!(feed.tag_suggestions("RUS").await, vec!["rust"]);
}

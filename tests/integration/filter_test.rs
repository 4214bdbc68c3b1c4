//! Filter Pipeline Integration Tests
//!
//! Worked scenarios and properties of the facet filter and tag index over
//! fixed record sets. No provider is involved.

use std::collections::BTreeSet;

use prompt_feed::{
    derive_tags, filter_records, trend_dataset, Category, Country, DateRange, Facet,
    FacetSelection, Platform, Prompt, SelectionUpdate, TagIndex,
};

use super::common::prompt;

fn trend_record() -> Prompt {
    Prompt::new("t1", "Duet this dance", "Viral Trends", "Sora")
        .with_trend("TikTok", "India", "2024-03-01")
        .with_tags(["dance"])
}

fn mixed() -> Vec<Prompt> {
    let mut records = vec![
        prompt("p1", "Write a parser", "Code", "Claude", &["python"]),
        prompt("p2", "Draft a blog intro", "Writing", "Gemini", &["blog"]),
        prompt("p3", "Nebula portrait", "Image Generation", "Imagen", &["sci-fi", "portrait", "art"]),
        prompt("p4", "Space opera poster", "Image Generation", "Imagen", &["sci-fi"]),
        prompt("p5", "Untagged limerick", "Writing", "ChatGPT-4o", &[]),
    ];
    records.extend(trend_dataset().iter().cloned());
    records
}

fn ids(records: &[Prompt]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn test_category_selects_matching_records() {
    let records = vec![
        prompt("p1", "x", "Code", "m", &["python"]),
        prompt("p2", "y", "Writing", "m", &["blog"]),
    ];
    let selection = FacetSelection::for_category(Facet::Only(Category::Code));
    assert_eq!(ids(&filter_records(&records, &selection)), vec!["p1"]);
}

#[test]
fn test_platform_mismatch_hides_trend() {
    let mut selection = FacetSelection::for_category(Facet::Only(Category::ViralTrends));
    selection.platform = Facet::Only(Platform::Instagram);
    assert!(filter_records(&[trend_record()], &selection).is_empty());
}

#[test]
fn test_platform_and_date_window_match_trend() {
    let mut selection = FacetSelection::for_category(Facet::Only(Category::ViralTrends));
    SelectionUpdate::new()
        .platform(Platform::TikTok)
        .date_range(Some(DateRange::parse("2024-02-01", "2024-03-15").unwrap()))
        .apply(&mut selection);
    assert_eq!(ids(&filter_records(&[trend_record()], &selection)), vec!["t1"]);
}

#[test]
fn test_selected_tags_are_all_required() {
    let mut selection = FacetSelection::default();
    SelectionUpdate::new()
        .tags(["sci-fi", "portrait"])
        .apply(&mut selection);
    assert_eq!(ids(&filter_records(&mixed(), &selection)), vec!["p3"]);
}

#[test]
fn test_search_matches_target_model() {
    let records = vec![prompt("p1", "Summarise a paper", "Writing", "ChatGPT-4o", &["research"])];
    let mut selection = FacetSelection::default();
    selection.search_term = "gpt".to_string();
    assert_eq!(ids(&filter_records(&records, &selection)), vec!["p1"]);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_default_selection_is_identity() {
    let records = mixed();
    assert_eq!(filter_records(&records, &FacetSelection::default()), records);
}

#[test]
fn test_filter_is_idempotent_across_selections() {
    let records = mixed();
    let selections = [
        FacetSelection::for_category(Facet::Only(Category::ImageGeneration)),
        {
            let mut s = FacetSelection::for_category(Facet::Only(Category::ViralTrends));
            s.country = Country::UnitedStates;
            s
        },
        {
            let mut s = FacetSelection::default();
            s.search_term = "PORTRAIT".to_string();
            s
        },
    ];
    for selection in &selections {
        let once = filter_records(&records, selection);
        assert_eq!(filter_records(&once, selection), once);
    }
}

#[test]
fn test_adding_tags_never_grows_visible_set() {
    let records = mixed();
    let mut selection = FacetSelection::default();
    let mut previous = filter_records(&records, &selection).len();
    for tag in ["sci-fi", "portrait", "art", "missing"] {
        selection.selected_tags.insert(tag.to_string());
        let current = filter_records(&records, &selection).len();
        assert!(current <= previous, "adding '{}' grew the feed", tag);
        previous = current;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_date_window_is_inclusive() {
    let record = trend_record();
    let mut selection = FacetSelection::default();
    let cases = [
        ("2024-03-01", "2024-03-01", true),
        ("2024-02-01", "2024-03-01", true),
        ("2024-03-01", "2024-04-01", true),
        ("2024-03-02", "2024-04-01", false),
        ("2024-01-01", "2024-02-29", false),
    ];
    for (start, end, expected) in cases {
        selection.date_range = Some(DateRange::parse(start, end).unwrap());
        assert_eq!(
            filter_records(std::slice::from_ref(&record), &selection).len() == 1,
            expected,
            "window {}..={}",
            start,
            end
        );
    }
}

#[test]
fn test_derive_tags_sorted_unique_deterministic() {
    let records = mixed();
    let tags = derive_tags(&records);
    let mut expected = tags.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(tags, expected);
    assert_eq!(derive_tags(&records), tags);
}

#[test]
fn test_suggestions_capped_and_exclude_selected() {
    let index = TagIndex::derive(&mixed());
    let selected: BTreeSet<String> = ["art".to_string()].into_iter().collect();

    let suggestions = index.suggest("A", &selected, 10);
    assert!(suggestions.len() <= 10);
    assert!(!suggestions.contains(&"art".to_string()));
    assert!(suggestions.iter().all(|t| t.to_lowercase().contains('a')));
    let mut sorted = suggestions.clone();
    sorted.sort();
    assert_eq!(suggestions, sorted);
}

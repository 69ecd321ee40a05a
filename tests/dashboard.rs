#[path = "common/mod.rs"]
mod common;

use common::*;
use tempfile::tempdir;

use skillpulse::dashboard::{ContentType, RenderMode, EMPTY_FILTER_MESSAGE};
use skillpulse::models::EngagementTier;
use skillpulse::{Dashboard, DashboardFilters, DashboardVariant, Error};

#[test]
fn renders_both_variants_from_cleaned_csv() {
    let dir = tempdir().unwrap();
    let (cleaned, _) = clean_into(dir.path(), &raw_fixture());
    let events = write_policy_events(dir.path());

    let dashboard = Dashboard::load(&cleaned, &events).unwrap();
    assert_eq!(dashboard.records().len(), 5);
    assert_eq!(
        dashboard.bounds().subreddits,
        vec!["FedEmployees".to_string(), "govfire".to_string()]
    );

    let overview = dashboard
        .render(
            DashboardVariant::Overview,
            &DashboardFilters::default(),
            RenderMode::Static,
        )
        .unwrap();
    assert!(overview.contains("<h1>Skills-Based Hiring Discourse on Reddit</h1>"));
    assert!(overview.contains("Total records"));
    assert!(overview.contains("Chance to Compete Act signed"));
    assert!(!overview.contains("Outside the data"));
    assert!(overview.contains("Keyword Mentions by Month"));

    let frames = dashboard
        .render(
            DashboardVariant::Frames,
            &DashboardFilters::default(),
            RenderMode::Static,
        )
        .unwrap();
    assert!(frames.contains("Frame Prevalence"));
    assert!(frames.contains("Workforce reductions"));
}

#[test]
fn filters_narrow_the_page() {
    let dir = tempdir().unwrap();
    let (cleaned, _) = clean_into(dir.path(), &raw_fixture());
    let dashboard = Dashboard::load(&cleaned, &dir.path().join("missing_events.csv")).unwrap();

    let filters = DashboardFilters {
        content: ContentType::Posts,
        tiers: Some(vec![EngagementTier::Viral]),
        ..Default::default()
    };
    let html = dashboard
        .render(DashboardVariant::Overview, &filters, RenderMode::Static)
        .unwrap();
    assert!(html.contains("Showing 1 of 5 records"));
    assert!(!html.contains("strokeDash"));

    let nothing = DashboardFilters {
        search: Some("zzz-not-present".into()),
        ..Default::default()
    };
    let html = dashboard
        .render(DashboardVariant::Frames, &nothing, RenderMode::Static)
        .unwrap();
    assert!(html.contains(EMPTY_FILTER_MESSAGE));
}

#[test]
fn missing_data_file_is_reported() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("cleaned").join("reddit_skills_cleaned.csv");
    let err = match Dashboard::load(&data, &dir.path().join("policy_events.csv")) {
        Ok(_) => panic!("expected a missing data error"),
        Err(e) => e,
    };

    assert!(matches!(err, Error::DataNotFound(_)));
    assert!(err.is_user_facing());
    assert_eq!(
        err.to_string(),
        format!(
            "Data file not found at {}. Run `skillpulse clean` first.",
            data.display()
        )
    );
}

use chrono::Utc;
use mula_core::models::{FeedbackRecord, ModerationStatus, RatingCategories};
use mula_rating::{calculate_badges, classify, Badge, FeedbackSummary};

fn record(scores: [u8; 5]) -> FeedbackRecord {
    let ratings = RatingCategories::from_scores(scores);
    let classification = classify(&ratings);
    FeedbackRecord::new("user-1", "period-1", ratings, "", "", classification, Utc::now())
}

#[test]
fn empty_summary_has_no_dominant_and_no_badges() {
    let summary = FeedbackSummary::from_records(&[]);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.distribution.dominant, None);
    assert!(calculate_badges(&summary).is_empty());
}

#[test]
fn summary_skips_hidden_and_removed_records() {
    let mut hidden = record([1, 1, 1, 1, 1]);
    hidden.is_visible = false;
    let mut removed = record([1, 1, 1, 1, 1]);
    removed.moderation_status = ModerationStatus::Removed;

    let records = vec![record([5, 5, 5, 5, 5]), record([4, 4, 4, 4, 4]), hidden, removed];
    let summary = FeedbackSummary::from_records(&records);

    assert_eq!(summary.count, 2);
    assert_eq!(summary.overall_average, 4.5);
    assert_eq!(summary.category_averages.work_quality, 4.5);
    assert_eq!(summary.distribution.rotten, 0);
}

#[test]
fn category_averages_are_rounded() {
    let records = vec![
        record([5, 4, 3, 2, 1]),
        record([4, 4, 3, 2, 1]),
        record([4, 5, 3, 2, 2]),
    ];
    let summary = FeedbackSummary::from_records(&records);
    assert_eq!(summary.category_averages.work_quality, 4.33);
    assert_eq!(summary.category_averages.communication, 4.33);
    assert_eq!(summary.category_averages.overall, 1.33);
}

#[test]
fn badges_require_minimum_feedback() {
    let summary =
        FeedbackSummary::from_records(&[record([5, 5, 5, 5, 5]), record([5, 5, 5, 5, 5])]);
    assert!(calculate_badges(&summary).is_empty());
}

#[test]
fn strong_category_earns_its_badge() {
    let records = vec![
        record([5, 3, 3, 3, 3]),
        record([5, 3, 3, 3, 3]),
        record([4, 3, 3, 3, 3]),
        record([5, 2, 2, 2, 2]),
    ];
    let badges = calculate_badges(&FeedbackSummary::from_records(&records));
    assert!(badges.contains(&Badge::Craftsman));
    assert!(!badges.contains(&Badge::TeamPlayer));
    assert!(!badges.contains(&Badge::CrowdFavorite));
}

#[test]
fn consistently_golden_feedback_earns_everything() {
    let records: Vec<_> = (0..5).map(|_| record([5, 5, 5, 5, 4])).collect();
    let badges = calculate_badges(&FeedbackSummary::from_records(&records));
    assert_eq!(
        badges,
        vec![
            Badge::Craftsman,
            Badge::ClearCommunicator,
            Badge::TeamPlayer,
            Badge::Dependable,
            Badge::GoldenStreak,
            Badge::CrowdFavorite,
        ]
    );
}

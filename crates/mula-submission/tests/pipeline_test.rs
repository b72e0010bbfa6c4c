//! End-to-end submission pipeline over an in-memory store.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use mula_core::config::EligibilityConfig;
use mula_core::errors::MulaError;
use mula_core::models::{
    AttemptStatus, MulaTier, RatingCategories, RejectReason, ReviewPeriod,
};
use mula_core::traits::{IAttemptStore, IFeedbackStore, IPeriodStore};
use mula_eligibility::SlidingWindowCounter;
use mula_rating::Badge;
use mula_storage::StorageEngine;
use mula_submission::{SubmissionForm, SubmissionOutcome, SubmissionPipeline};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 2, 10, 0, 0).unwrap()
}

struct Setup {
    engine: Arc<StorageEngine>,
    pipeline: SubmissionPipeline,
    period_id: String,
}

fn setup() -> Setup {
    let engine = Arc::new(StorageEngine::open_in_memory().unwrap());
    let period = ReviewPeriod::new("Q2", t0() - Duration::days(1), t0() + Duration::days(30), t0());
    engine.create_period(&period).unwrap();
    let pipeline = SubmissionPipeline::with_storage(
        engine.clone(),
        Arc::new(SlidingWindowCounter::new()),
        &EligibilityConfig::default(),
    );
    Setup {
        engine,
        pipeline,
        period_id: period.id,
    }
}

impl Setup {
    fn form(&self, fp: &str, target: &str, scores: [u8; 5]) -> SubmissionForm {
        SubmissionForm {
            target_user_id: target.to_string(),
            review_period_id: self.period_id.clone(),
            fingerprint: fp.to_string(),
            ratings: RatingCategories::from_scores(scores),
            strengths: "Clear design docs".to_string(),
            improvements: "Delegate more".to_string(),
            honeypot: None,
            form_loaded_at: t0() - Duration::minutes(3),
        }
    }
}

#[test]
fn accepted_submission_is_classified_and_stored() {
    let s = setup();
    let outcome = s
        .pipeline
        .submit(&s.form("fp-1", "alice", [5, 5, 4, 4, 5]), "10.0.0.1", t0())
        .unwrap();

    let (feedback_id, tier, average) = match outcome {
        SubmissionOutcome::Accepted {
            feedback_id,
            tier,
            average,
        } => (feedback_id, tier, average),
        other => panic!("expected acceptance, got {other:?}"),
    };
    assert_eq!(tier, MulaTier::GoldenMula);
    assert!((average - 4.6).abs() < 1e-9);

    let stored = s.engine.get_feedback(&feedback_id).unwrap().unwrap();
    assert_eq!(stored.tier, MulaTier::GoldenMula);
    assert_eq!(stored.strengths, "Clear design docs");

    let attempts = s.engine.list_attempts_for_target("alice", &s.period_id).unwrap();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].status, AttemptStatus::Submitted);
}

#[test]
fn honeypot_and_timing_leave_no_attempt() {
    let s = setup();
    let mut bot = s.form("fp-1", "alice", [5, 5, 5, 5, 5]);
    bot.honeypot = Some("buy now".to_string());
    let outcome = s.pipeline.submit(&bot, "10.0.0.1", t0()).unwrap();
    assert_eq!(outcome.reject_reason(), Some(RejectReason::Honeypot));

    let mut hasty = s.form("fp-1", "alice", [5, 5, 5, 5, 5]);
    hasty.form_loaded_at = t0() - Duration::seconds(10);
    let outcome = s.pipeline.submit(&hasty, "10.0.0.1", t0()).unwrap();
    assert_eq!(outcome.reject_reason(), Some(RejectReason::TooFast));

    assert!(s.engine.list_attempts_for_target("alice", &s.period_id).unwrap().is_empty());
    assert!(s.engine.list_feedback("alice", &s.period_id).unwrap().is_empty());
}

#[test]
fn second_submission_from_same_device_is_blocked_and_logged() {
    let s = setup();
    assert!(s
        .pipeline
        .submit(&s.form("fp-1", "alice", [3, 3, 3, 3, 3]), "10.0.0.1", t0())
        .unwrap()
        .is_accepted());

    let outcome = s
        .pipeline
        .submit(
            &s.form("fp-1", "alice", [1, 1, 1, 1, 1]),
            "172.16.5.5",
            t0() + Duration::minutes(1),
        )
        .unwrap();
    match outcome {
        SubmissionOutcome::Rejected { reason, message } => {
            assert_eq!(reason, RejectReason::AlreadySubmitted);
            assert!(message.contains("already submitted"));
            assert!(!message.contains("fp-1"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    let attempts = s.engine.list_attempts_for_target("alice", &s.period_id).unwrap();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[1].status, AttemptStatus::Blocked);
    assert_eq!(attempts[1].block_reason, Some(RejectReason::AlreadySubmitted));
    assert_eq!(s.engine.list_feedback("alice", &s.period_id).unwrap().len(), 1);
}

#[test]
fn sixth_submission_from_one_network_is_rate_limited() {
    let s = setup();
    for i in 0..5 {
        let form = s.form(&format!("fp-{i}"), &format!("t-{i}"), [4, 4, 4, 4, 4]);
        let outcome = s.pipeline.submit(&form, "10.0.0.1", t0()).unwrap();
        assert!(outcome.is_accepted(), "submission {i} should pass");
    }
    let outcome = s
        .pipeline
        .submit(&s.form("fp-5", "t-5", [4, 4, 4, 4, 4]), "10.0.0.1", t0())
        .unwrap();
    assert_eq!(outcome.reject_reason(), Some(RejectReason::IpRateLimited));

    let attempts = s.engine.list_attempts_for_target("t-5", &s.period_id).unwrap();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].status, AttemptStatus::RateLimited);
}

#[test]
fn closed_period_is_rejected() {
    let s = setup();
    s.engine.set_period_active(&s.period_id, false).unwrap();
    let outcome = s
        .pipeline
        .submit(&s.form("fp-1", "alice", [4, 4, 4, 4, 4]), "10.0.0.1", t0())
        .unwrap();
    assert_eq!(outcome.reject_reason(), Some(RejectReason::PeriodInactive));
}

#[test]
fn malformed_forms_are_validation_errors() {
    let s = setup();

    let out_of_range = s.form("fp-1", "alice", [5, 0, 5, 5, 5]);
    let err = s.pipeline.submit(&out_of_range, "10.0.0.1", t0()).unwrap_err();
    assert!(matches!(
        err,
        MulaError::Validation { ref field, .. } if field == "ratings.communication"
    ));

    let no_fingerprint = s.form("  ", "alice", [5, 5, 5, 5, 5]);
    assert!(matches!(
        s.pipeline.submit(&no_fingerprint, "10.0.0.1", t0()),
        Err(MulaError::Validation { .. })
    ));

    let mut essay = s.form("fp-1", "alice", [5, 5, 5, 5, 5]);
    essay.improvements = "x".repeat(2001);
    assert!(matches!(
        s.pipeline.submit(&essay, "10.0.0.1", t0()),
        Err(MulaError::Validation { .. })
    ));

    assert_eq!(s.pipeline.metrics().snapshot().validation_failures, 3);
    assert!(s.engine.list_attempts_for_target("alice", &s.period_id).unwrap().is_empty());
}

#[test]
fn edit_recomputes_tier() {
    let s = setup();
    let SubmissionOutcome::Accepted { feedback_id, .. } = s
        .pipeline
        .submit(&s.form("fp-1", "alice", [5, 5, 5, 5, 5]), "10.0.0.1", t0())
        .unwrap()
    else {
        panic!("expected acceptance");
    };

    let edited = s
        .pipeline
        .edit_feedback(
            &feedback_id,
            RatingCategories::from_scores([2, 2, 3, 2, 1]),
            "Friendly",
            "Test coverage",
            t0() + Duration::days(1),
        )
        .unwrap();
    assert_eq!(edited.tier, MulaTier::RottenTomato);
    assert!((edited.average - 2.0).abs() < 1e-9);

    let stored = s.engine.get_feedback(&feedback_id).unwrap().unwrap();
    assert_eq!(stored.tier, MulaTier::RottenTomato);
    assert_eq!(stored.improvements, "Test coverage");

    // Same scores again: tier unchanged.
    let again = s
        .pipeline
        .edit_feedback(
            &feedback_id,
            RatingCategories::from_scores([2, 2, 3, 2, 1]),
            "Friendly",
            "Test coverage",
            t0() + Duration::days(2),
        )
        .unwrap();
    assert_eq!(again.tier, edited.tier);
}

#[test]
fn editing_unknown_feedback_fails() {
    let s = setup();
    let err = s
        .pipeline
        .edit_feedback("nope", RatingCategories::from_scores([3; 5]), "", "", t0())
        .unwrap_err();
    assert!(matches!(err, MulaError::FeedbackNotFound { .. }));
}

#[test]
fn results_summarize_published_feedback() {
    let s = setup();
    for (i, ip) in ["10.0.0.1", "10.0.0.2", "10.0.0.3"].iter().enumerate() {
        s.pipeline
            .submit(&s.form(&format!("fp-{i}"), "alice", [5, 5, 5, 5, 5]), ip, t0())
            .unwrap();
    }
    let SubmissionOutcome::Accepted { feedback_id, .. } = s
        .pipeline
        .submit(&s.form("fp-9", "alice", [1, 1, 1, 1, 1]), "10.0.0.9", t0())
        .unwrap()
    else {
        panic!("expected acceptance");
    };
    s.engine.set_visibility(&feedback_id, false).unwrap();

    let view = s.pipeline.results("alice", &s.period_id).unwrap();
    assert_eq!(view.summary.count, 3);
    assert_eq!(view.summary.distribution.dominant, Some(MulaTier::GoldenMula));
    assert_eq!(
        view.badges,
        vec![
            Badge::Craftsman,
            Badge::ClearCommunicator,
            Badge::TeamPlayer,
            Badge::Dependable,
            Badge::GoldenStreak,
        ]
    );

    let empty = s.pipeline.results("nobody", &s.period_id).unwrap();
    assert_eq!(empty.summary.count, 0);
    assert!(empty.badges.is_empty());
}

#[test]
fn metrics_track_every_outcome() {
    let s = setup();
    s.pipeline
        .submit(&s.form("fp-1", "alice", [3, 3, 3, 3, 3]), "10.0.0.1", t0())
        .unwrap();
    s.pipeline
        .submit(&s.form("fp-1", "alice", [3, 3, 3, 3, 3]), "10.0.0.1", t0())
        .unwrap();
    let mut bot = s.form("fp-2", "bob", [3, 3, 3, 3, 3]);
    bot.honeypot = Some("x".to_string());
    s.pipeline.submit(&bot, "10.0.0.1", t0()).unwrap();

    let snap = s.pipeline.metrics().snapshot();
    assert_eq!(snap.accepted_total, 1);
    assert_eq!(snap.accepted_by_tier["fresh_carrot"], 1);
    assert_eq!(snap.rejected_by_reason["already_submitted"], 1);
    assert_eq!(snap.rejected_by_reason["honeypot"], 1);
}

#[test]
fn concurrent_duplicates_accept_exactly_one() {
    let s = setup();
    let form = s.form("fp-race", "alice", [4, 4, 4, 4, 4]);
    let outcomes: Vec<SubmissionOutcome> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pipeline = &s.pipeline;
                let form = &form;
                scope.spawn(move || {
                    pipeline
                        .submit(form, &format!("10.1.0.{i}"), t0())
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let accepted = outcomes.iter().filter(|o| o.is_accepted()).count();
    assert_eq!(accepted, 1);
    assert!(outcomes
        .iter()
        .filter(|o| !o.is_accepted())
        .all(|o| o.reject_reason() == Some(RejectReason::AlreadySubmitted)));
    assert_eq!(s.engine.list_feedback("alice", &s.period_id).unwrap().len(), 1);
}

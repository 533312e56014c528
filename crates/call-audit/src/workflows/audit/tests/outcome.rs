use super::common::*;
use crate::workflows::audit::domain::{TranscriptTurn, ViolationSeverity};
use crate::workflows::audit::outcome::{
    CallOutcome, CallOutcomeClassifier, SatisfactionIndicator, UrgencyLevel,
};

fn bland_turns() -> Vec<TranscriptTurn> {
    vec![
        TranscriptTurn::agent("00:05", "Calling about the pending amount."),
        TranscriptTurn::customer("00:15", "Noted."),
        TranscriptTurn::agent("00:25", "Alright then."),
    ]
}

#[test]
fn critical_violation_classifies_escalated() {
    let mut signals = neutral_signals();
    signals
        .policy_violations
        .push(violation(ViolationSeverity::Critical));

    let classification = CallOutcomeClassifier::classify(&signals, &bland_turns(), 30.0);

    assert_eq!(classification.primary_outcome, CallOutcome::Escalated);
    assert_eq!(classification.confidence_score, 0.95);
    assert_eq!(classification.urgency_level, UrgencyLevel::Critical);
    assert_eq!(
        classification.customer_satisfaction_indicator,
        SatisfactionIndicator::HighlyDissatisfied
    );
    assert!(classification
        .secondary_outcomes
        .contains(&CallOutcome::UnresolvedComplaint));
}

#[test]
fn legal_mention_with_threats_is_legal_dispute() {
    let mut signals = neutral_signals();
    signals
        .detected_threats
        .push("Agent threatened court action".to_string());
    let turns = vec![
        TranscriptTurn::customer("02:40", "This is harassment."),
        TranscriptTurn::customer("02:50", "You will hear from my lawyer."),
        TranscriptTurn::agent("02:55", "That is your choice."),
    ];

    let classification = CallOutcomeClassifier::classify(&signals, &turns, 50.0);

    assert_eq!(classification.primary_outcome, CallOutcome::LegalDispute);
    assert_eq!(classification.confidence_score, 0.90);
    assert_eq!(classification.urgency_level, UrgencyLevel::Critical);
    assert!(!classification.requires_follow_up);
}

#[test]
fn high_risk_score_alone_escalates() {
    let signals = neutral_signals();

    let classification = CallOutcomeClassifier::classify(&signals, &bland_turns(), 85.0);

    assert_eq!(classification.primary_outcome, CallOutcome::Escalated);
    assert_eq!(classification.confidence_score, 0.90);
}

#[test]
fn resolution_keywords_resolve_with_satisfied_secondary() {
    let signals = neutral_signals();
    let turns = vec![
        TranscriptTurn::agent("03:00", "I have waived the late fee."),
        TranscriptTurn::customer("03:10", "Thank you, that settles it."),
        TranscriptTurn::agent("03:15", "Glad the matter is resolved."),
    ];

    let classification = CallOutcomeClassifier::classify(&signals, &turns, 10.0);

    assert_eq!(classification.primary_outcome, CallOutcome::Resolved);
    assert_eq!(classification.confidence_score, 0.85);
    assert_eq!(
        classification.secondary_outcomes,
        vec![CallOutcome::CustomerSatisfied]
    );
    assert!(classification
        .outcome_reasoning
        .contains("resolution indicators"));
}

#[test]
fn unhappy_closing_beats_resolution_keywords() {
    let signals = neutral_signals();
    let turns = vec![
        TranscriptTurn::agent("03:00", "The dispute is settled per policy."),
        TranscriptTurn::customer("03:10", "Fine, but I am deeply unhappy with this."),
    ];

    let classification = CallOutcomeClassifier::classify(&signals, &turns, 10.0);

    assert_eq!(
        classification.primary_outcome,
        CallOutcome::CustomerDissatisfied
    );
    assert_eq!(classification.confidence_score, 0.85);
    assert_eq!(
        classification.customer_satisfaction_indicator,
        SatisfactionIndicator::Dissatisfied
    );
}

#[test]
fn callback_commitment_requires_follow_up() {
    let signals = neutral_signals();
    let turns = vec![
        TranscriptTurn::customer("04:00", "I need to talk to my wife first."),
        TranscriptTurn::agent("04:10", "No problem, I will call back tomorrow morning."),
    ];

    let classification = CallOutcomeClassifier::classify(&signals, &turns, 10.0);

    assert_eq!(classification.primary_outcome, CallOutcome::CallbackRequired);
    assert_eq!(classification.confidence_score, 0.80);
    assert_eq!(classification.urgency_level, UrgencyLevel::Medium);
    assert!(classification.requires_follow_up);
}

#[test]
fn supervisor_mention_classifies_transferred() {
    let signals = neutral_signals();
    let turns = vec![
        TranscriptTurn::customer("05:00", "Let me speak to your supervisor."),
        TranscriptTurn::agent("05:05", "Connecting you now."),
    ];

    let classification = CallOutcomeClassifier::classify(&signals, &turns, 10.0);

    assert_eq!(classification.primary_outcome, CallOutcome::Transferred);
    assert_eq!(classification.confidence_score, 0.85);
}

#[test]
fn pending_final_status_classifies_pending() {
    let mut signals = neutral_signals();
    signals.final_status = "Pending Review".to_string();

    let classification = CallOutcomeClassifier::classify(&signals, &bland_turns(), 10.0);

    assert_eq!(classification.primary_outcome, CallOutcome::Pending);
    assert_eq!(classification.confidence_score, 0.75);
    assert_eq!(
        classification.secondary_outcomes,
        vec![CallOutcome::FollowUpNeeded]
    );
}

#[test]
fn angry_tone_is_an_unresolved_complaint() {
    let mut signals = neutral_signals();
    signals.emotional_tone = "Angry".to_string();

    let classification = CallOutcomeClassifier::classify(&signals, &bland_turns(), 10.0);

    assert_eq!(
        classification.primary_outcome,
        CallOutcome::UnresolvedComplaint
    );
    assert_eq!(classification.confidence_score, 0.80);
    assert_eq!(classification.urgency_level, UrgencyLevel::High);
    assert!(classification
        .outcome_reasoning
        .contains("significant frustration"));
}

#[test]
fn calm_tone_without_violations_satisfies_customer() {
    let mut signals = neutral_signals();
    signals.emotional_tone = "Calm".to_string();

    let classification = CallOutcomeClassifier::classify(&signals, &bland_turns(), 10.0);

    assert_eq!(
        classification.primary_outcome,
        CallOutcome::CustomerSatisfied
    );
    assert_eq!(
        classification.customer_satisfaction_indicator,
        SatisfactionIndicator::Satisfied
    );
}

#[test]
fn dropped_keywords_classify_dropped() {
    let signals = neutral_signals();
    let turns = vec![
        TranscriptTurn::agent("06:00", "Hello? Are you there?"),
        TranscriptTurn::agent("06:10", "The line disconnected abruptly."),
    ];

    let classification = CallOutcomeClassifier::classify(&signals, &turns, 10.0);

    assert_eq!(classification.primary_outcome, CallOutcome::Dropped);
    assert!(classification.requires_follow_up);
}

#[test]
fn default_branch_resolves_low_risk_compliant_calls() {
    let signals = neutral_signals();

    let classification = CallOutcomeClassifier::classify(&signals, &bland_turns(), 10.0);

    assert_eq!(classification.primary_outcome, CallOutcome::Resolved);
    assert_eq!(classification.confidence_score, 0.70);
}

#[test]
fn default_branch_flags_violations_as_unresolved() {
    let mut signals = neutral_signals();
    signals.is_within_policy = false;
    signals
        .policy_violations
        .push(violation(ViolationSeverity::Medium));

    let classification = CallOutcomeClassifier::classify(&signals, &bland_turns(), 10.0);

    assert_eq!(
        classification.primary_outcome,
        CallOutcome::UnresolvedComplaint
    );
    assert_eq!(classification.confidence_score, 0.65);
}

#[test]
fn classification_is_deterministic() {
    let mut signals = neutral_signals();
    signals.emotional_tone = "Frustrated".to_string();
    signals
        .policy_violations
        .push(violation(ViolationSeverity::High));
    signals.is_within_policy = false;

    let first = CallOutcomeClassifier::classify(&signals, &bland_turns(), 45.0);
    let second = CallOutcomeClassifier::classify(&signals, &bland_turns(), 45.0);

    assert_eq!(first, second);
}

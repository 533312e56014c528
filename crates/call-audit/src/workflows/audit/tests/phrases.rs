use super::common::*;
use crate::workflows::audit::domain::{TranscriptTurn, ViolationSeverity};
use crate::workflows::audit::phrases::{apply_hits, scan_agent_turns};

#[test]
fn scan_matches_agent_turns_case_insensitively() {
    let turns = vec![
        TranscriptTurn::agent("01:10", "If you keep ignoring us, YOU WILL GO TO JAIL."),
        TranscriptTurn::customer("01:20", "You will go to jail for this harassment!"),
    ];

    let hits = scan_agent_turns(&turns, &profile());

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].timestamp, "01:10");
    assert_eq!(hits[0].phrase, "you will go to jail");
}

#[test]
fn apply_hits_appends_critical_violations() {
    let turns = vec![TranscriptTurn::agent(
        "02:00",
        "Pay up or we will tell your family about the loan.",
    )];
    let hits = scan_agent_turns(&turns, &profile());
    let mut signals = neutral_signals();

    apply_hits(&mut signals, &hits);

    assert!(!signals.is_within_policy);
    assert_eq!(signals.policy_violations.len(), 1);
    let violation = &signals.policy_violations[0];
    assert_eq!(violation.clause_id, "CLIENT-PROHIBITED-PHRASE");
    assert_eq!(violation.severity, ViolationSeverity::Critical);
    assert!(violation
        .description
        .contains("we will tell your family"));
    assert_eq!(
        signals.compliance_flags,
        vec!["Prohibited Language".to_string()]
    );
}

#[test]
fn clean_transcript_produces_no_hits() {
    let hits = scan_agent_turns(&polite_transcript(), &profile());
    let mut signals = neutral_signals();

    apply_hits(&mut signals, &hits);

    assert!(hits.is_empty());
    assert!(signals.is_within_policy);
    assert!(signals.policy_violations.is_empty());
}

use super::CallOutcome;
use crate::workflows::audit::domain::CallSignals;
use crate::workflows::audit::domain::TranscriptTurn;

const RESOLUTION_KEYWORDS: [&str; 6] = ["resolved", "solved", "fixed", "settled", "thank", "satisfied"];
const CALLBACK_KEYWORDS: [&str; 5] = ["call back", "callback", "follow up", "get back", "check"];
const TRANSFER_KEYWORDS: [&str; 4] = ["transfer", "escalate", "supervisor", "manager"];
const DROPPED_KEYWORDS: [&str; 4] = ["disconnect", "hung up", "dropped", "ended abruptly"];

/// Lowercased text of the conversation's closing turns (last three, or fewer
/// for short transcripts).
pub(super) fn closing_window(turns: &[TranscriptTurn]) -> String {
    let start = turns.len().saturating_sub(3);
    turns[start..]
        .iter()
        .map(|turn| turn.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// The primary-outcome decision tree. Rules are evaluated top to bottom and
/// the first match wins; confidences are fixed per rule.
pub(super) fn determine_primary(
    signals: &CallSignals,
    closing: &str,
    risk_score: f32,
) -> (CallOutcome, f32) {
    if signals.has_critical_violations() {
        return (CallOutcome::Escalated, 0.95);
    }

    if !signals.detected_threats.is_empty() || risk_score >= 80.0 {
        if closing.contains("legal") || closing.contains("lawyer") {
            return (CallOutcome::LegalDispute, 0.90);
        }
        return (CallOutcome::Escalated, 0.90);
    }

    if contains_any(closing, &RESOLUTION_KEYWORDS) {
        if closing.contains("dissatisfied") || closing.contains("unhappy") {
            return (CallOutcome::CustomerDissatisfied, 0.85);
        }
        return (CallOutcome::Resolved, 0.85);
    }

    if contains_any(closing, &CALLBACK_KEYWORDS) {
        return (CallOutcome::CallbackRequired, 0.80);
    }

    if contains_any(closing, &TRANSFER_KEYWORDS) {
        return (CallOutcome::Transferred, 0.85);
    }

    let final_status = signals.final_status.to_lowercase();
    if final_status.contains("pending") || final_status.contains("review") {
        return (CallOutcome::Pending, 0.75);
    }

    let tone = signals.emotional_tone.to_lowercase();
    if tone.contains("angry") || tone.contains("aggressive") {
        return (CallOutcome::UnresolvedComplaint, 0.80);
    }

    if (tone.contains("satisfied") || tone.contains("calm"))
        && signals.policy_violations.is_empty()
    {
        return (CallOutcome::CustomerSatisfied, 0.80);
    }

    if contains_any(closing, &DROPPED_KEYWORDS) {
        return (CallOutcome::Dropped, 0.75);
    }

    if signals.is_within_policy && risk_score < 40.0 {
        (CallOutcome::Resolved, 0.70)
    } else if !signals.policy_violations.is_empty() {
        (CallOutcome::UnresolvedComplaint, 0.65)
    } else {
        (CallOutcome::Pending, 0.60)
    }
}

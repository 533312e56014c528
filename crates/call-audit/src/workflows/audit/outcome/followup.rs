use super::{CallOutcome, SatisfactionIndicator, UrgencyLevel};
use crate::workflows::audit::domain::PolicyViolation;

/// At most two supporting classifications for the chosen primary outcome.
pub(super) fn secondary_outcomes(
    primary: CallOutcome,
    violations: &[PolicyViolation],
    closing: &str,
) -> Vec<CallOutcome> {
    let mut secondary = Vec::new();

    match primary {
        CallOutcome::Resolved => {
            if closing.contains("thank") {
                secondary.push(CallOutcome::CustomerSatisfied);
            } else {
                secondary.push(CallOutcome::FollowUpNeeded);
            }
        }
        CallOutcome::Escalated => {
            if !violations.is_empty() {
                secondary.push(CallOutcome::UnresolvedComplaint);
            }
            if closing.contains("legal") {
                secondary.push(CallOutcome::LegalDispute);
            }
        }
        CallOutcome::Pending => {
            if closing.contains("callback") || closing.contains("follow") {
                secondary.push(CallOutcome::CallbackRequired);
            } else {
                secondary.push(CallOutcome::FollowUpNeeded);
            }
        }
        _ => {}
    }

    secondary.truncate(2);
    secondary
}

pub(super) fn build_reasoning(
    outcome: CallOutcome,
    violations: &[PolicyViolation],
    emotional_tone: &str,
    threats: &[String],
) -> String {
    let mut reasons: Vec<String> = Vec::new();

    match outcome {
        CallOutcome::Resolved => {
            reasons.push("Conversation ended with resolution indicators".to_string());
            if violations.is_empty() {
                reasons.push("no policy violations detected".to_string());
            }
        }
        CallOutcome::Escalated => {
            if !violations.is_empty() {
                reasons.push(format!("{} policy violation(s) detected", violations.len()));
            }
            if !threats.is_empty() {
                reasons.push("threats detected in conversation".to_string());
            }
            reasons.push("requires management review".to_string());
        }
        CallOutcome::LegalDispute => {
            reasons.push("Legal action mentioned or threatened".to_string());
            reasons.push("immediate legal team review required".to_string());
        }
        CallOutcome::CallbackRequired => {
            reasons.push("Agent committed to follow-up action".to_string());
        }
        CallOutcome::Dropped => {
            reasons.push("Call ended abruptly without resolution".to_string());
        }
        CallOutcome::UnresolvedComplaint => {
            reasons.push("Customer concerns not adequately addressed".to_string());
            if emotional_tone.to_lowercase().contains("angry") {
                reasons.push("customer expressed significant frustration".to_string());
            }
        }
        CallOutcome::CustomerSatisfied => {
            reasons
                .push("Positive resolution with customer satisfaction indicators".to_string());
        }
        CallOutcome::CustomerDissatisfied => {
            reasons.push("Despite resolution attempt, customer remains dissatisfied".to_string());
        }
        _ => {}
    }

    if reasons.is_empty() {
        return "Classification based on conversation flow analysis".to_string();
    }

    reasons.join(". ")
}

pub(super) fn next_action(
    outcome: CallOutcome,
    risk_score: f32,
    violations: &[PolicyViolation],
) -> String {
    match outcome {
        CallOutcome::Escalated => {
            if risk_score >= 80.0 {
                "Immediate escalation to compliance manager and legal review".to_string()
            } else {
                "Escalate to supervisor for review and appropriate action".to_string()
            }
        }
        CallOutcome::LegalDispute => {
            "Forward to legal department immediately; document all evidence".to_string()
        }
        CallOutcome::CallbackRequired => {
            "Schedule callback within 24-48 hours; ensure follow-through".to_string()
        }
        CallOutcome::UnresolvedComplaint => {
            "Re-engage customer with senior agent; offer resolution options".to_string()
        }
        CallOutcome::Dropped => {
            "Attempt reconnection; investigate reason for call termination".to_string()
        }
        CallOutcome::Pending => {
            "Monitor for updates; follow up if no resolution within 3-5 business days".to_string()
        }
        CallOutcome::CustomerDissatisfied => {
            "Customer retention intervention; offer goodwill gesture if appropriate".to_string()
        }
        CallOutcome::Resolved => {
            if !violations.is_empty() {
                "Document resolution; review agent performance for improvement".to_string()
            } else {
                "Close case; no further action required unless customer re-contacts".to_string()
            }
        }
        CallOutcome::CustomerSatisfied => {
            "Close case successfully; use as positive training example".to_string()
        }
        _ => "Review case details and determine appropriate next steps".to_string(),
    }
}

pub(super) fn urgency(outcome: CallOutcome, risk_score: f32) -> UrgencyLevel {
    if matches!(outcome, CallOutcome::LegalDispute | CallOutcome::Escalated)
        || risk_score >= 80.0
    {
        return UrgencyLevel::Critical;
    }

    if risk_score >= 60.0 || outcome == CallOutcome::UnresolvedComplaint {
        return UrgencyLevel::High;
    }

    if matches!(outcome, CallOutcome::CallbackRequired | CallOutcome::Pending) {
        return UrgencyLevel::Medium;
    }

    UrgencyLevel::Low
}

pub(super) fn requires_follow_up(outcome: CallOutcome) -> bool {
    matches!(
        outcome,
        CallOutcome::CallbackRequired
            | CallOutcome::Pending
            | CallOutcome::FollowUpNeeded
            | CallOutcome::UnresolvedComplaint
            | CallOutcome::Dropped
    )
}

pub(super) fn satisfaction(outcome: CallOutcome, emotional_tone: &str) -> SatisfactionIndicator {
    match outcome {
        CallOutcome::CustomerSatisfied => SatisfactionIndicator::Satisfied,
        CallOutcome::CustomerDissatisfied => SatisfactionIndicator::Dissatisfied,
        CallOutcome::LegalDispute | CallOutcome::Escalated => {
            SatisfactionIndicator::HighlyDissatisfied
        }
        CallOutcome::Resolved | CallOutcome::Transferred => {
            let tone = emotional_tone.to_lowercase();
            if tone.contains("calm") || tone.contains("neutral") {
                SatisfactionIndicator::NeutralToSatisfied
            } else {
                SatisfactionIndicator::Neutral
            }
        }
        CallOutcome::UnresolvedComplaint | CallOutcome::Dropped => {
            SatisfactionIndicator::Dissatisfied
        }
        _ => SatisfactionIndicator::Neutral,
    }
}

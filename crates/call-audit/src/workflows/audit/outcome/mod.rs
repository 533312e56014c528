mod classify;
mod followup;

use serde::{Deserialize, Serialize};

use super::domain::{CallSignals, TranscriptTurn};

/// Classifies how an audited call terminated.
///
/// Deterministic single pass: the primary outcome comes from a fixed
/// decision tree evaluated top to bottom with per-rule confidences, and the
/// remaining fields are derived from the chosen branch.
pub struct CallOutcomeClassifier;

impl CallOutcomeClassifier {
    pub fn classify(
        signals: &CallSignals,
        transcript_turns: &[TranscriptTurn],
        risk_score: f32,
    ) -> OutcomeClassification {
        let closing = classify::closing_window(transcript_turns);
        let (primary_outcome, confidence_score) =
            classify::determine_primary(signals, &closing, risk_score);

        let secondary_outcomes =
            followup::secondary_outcomes(primary_outcome, &signals.policy_violations, &closing);
        let outcome_reasoning = followup::build_reasoning(
            primary_outcome,
            &signals.policy_violations,
            &signals.emotional_tone,
            &signals.detected_threats,
        );
        let next_action =
            followup::next_action(primary_outcome, risk_score, &signals.policy_violations);
        let urgency_level = followup::urgency(primary_outcome, risk_score);
        let customer_satisfaction_indicator =
            followup::satisfaction(primary_outcome, &signals.emotional_tone);

        OutcomeClassification {
            primary_outcome,
            confidence_score,
            outcome_reasoning,
            secondary_outcomes,
            next_action,
            urgency_level,
            requires_follow_up: followup::requires_follow_up(primary_outcome),
            customer_satisfaction_indicator,
        }
    }
}

/// Terminal states a recovery call can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    #[serde(rename = "Resolved")]
    Resolved,
    #[serde(rename = "Escalated")]
    Escalated,
    #[serde(rename = "Dropped")]
    Dropped,
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Transferred")]
    Transferred,
    #[serde(rename = "Callback Required")]
    CallbackRequired,
    #[serde(rename = "Legal Dispute")]
    LegalDispute,
    #[serde(rename = "Unresolved Complaint")]
    UnresolvedComplaint,
    #[serde(rename = "Customer Satisfied")]
    CustomerSatisfied,
    #[serde(rename = "Customer Dissatisfied")]
    CustomerDissatisfied,
    #[serde(rename = "Follow-up Needed")]
    FollowUpNeeded,
    #[serde(rename = "No Resolution")]
    NoResolution,
}

impl CallOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            CallOutcome::Resolved => "Resolved",
            CallOutcome::Escalated => "Escalated",
            CallOutcome::Dropped => "Dropped",
            CallOutcome::Pending => "Pending",
            CallOutcome::Transferred => "Transferred",
            CallOutcome::CallbackRequired => "Callback Required",
            CallOutcome::LegalDispute => "Legal Dispute",
            CallOutcome::UnresolvedComplaint => "Unresolved Complaint",
            CallOutcome::CustomerSatisfied => "Customer Satisfied",
            CallOutcome::CustomerDissatisfied => "Customer Dissatisfied",
            CallOutcome::FollowUpNeeded => "Follow-up Needed",
            CallOutcome::NoResolution => "No Resolution",
        }
    }

    pub const fn category(self) -> &'static str {
        match self {
            CallOutcome::Resolved => "RESOLVED",
            CallOutcome::Escalated => "ESCALATED",
            CallOutcome::Dropped => "DROPPED",
            CallOutcome::Pending => "PENDING",
            CallOutcome::Transferred => "TRANSFERRED",
            CallOutcome::CallbackRequired => "CALLBACK_REQUIRED",
            CallOutcome::LegalDispute => "LEGAL_DISPUTE",
            CallOutcome::UnresolvedComplaint => "UNRESOLVED_COMPLAINT",
            CallOutcome::CustomerSatisfied => "CUSTOMER_SATISFIED",
            CallOutcome::CustomerDissatisfied => "CUSTOMER_DISSATISFIED",
            CallOutcome::FollowUpNeeded => "FOLLOW_UP_NEEDED",
            CallOutcome::NoResolution => "NO_RESOLUTION",
        }
    }
}

/// Urgency attached to the classified outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }
}

/// Rough read of where the customer landed emotionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SatisfactionIndicator {
    Satisfied,
    NeutralToSatisfied,
    Neutral,
    Dissatisfied,
    HighlyDissatisfied,
}

impl SatisfactionIndicator {
    pub const fn label(self) -> &'static str {
        match self {
            SatisfactionIndicator::Satisfied => "satisfied",
            SatisfactionIndicator::NeutralToSatisfied => "neutral_to_satisfied",
            SatisfactionIndicator::Neutral => "neutral",
            SatisfactionIndicator::Dissatisfied => "dissatisfied",
            SatisfactionIndicator::HighlyDissatisfied => "highly_dissatisfied",
        }
    }
}

/// Full outcome classification for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeClassification {
    pub primary_outcome: CallOutcome,
    pub confidence_score: f32,
    pub outcome_reasoning: String,
    pub secondary_outcomes: Vec<CallOutcome>,
    pub next_action: String,
    pub urgency_level: UrgencyLevel,
    pub requires_follow_up: bool,
    pub customer_satisfaction_indicator: SatisfactionIndicator,
}

mod components;
mod escalation;

use serde::{Deserialize, Serialize};

use super::client_profile::ClientProfile;
use super::domain::{AgentConduct, PolicyViolation};

/// Multi-factor risk scorer for a single audited call.
///
/// Pure and infallible: unknown or missing inputs contribute zero, every
/// component is capped on its own, and the summed score is clamped to
/// [0, 100] before classification.
pub struct RiskScoreCalculator;

impl RiskScoreCalculator {
    pub fn assess(input: &RiskInput<'_>, profile: Option<&ClientProfile>) -> RiskAssessment {
        let breakdown = components::score_components(input);
        let total = breakdown.total().clamp(0, 100);

        let risk_level = RiskLevel::from_score(total);
        let escalation_action = escalation::decide_action(
            total,
            input.policy_violations,
            input.prohibited_phrase_count,
        );
        let justification = escalation::build_justification(
            total,
            &breakdown,
            input.policy_violations,
            input.detected_threats,
            input.prohibited_phrase_count,
        );
        let auto_escalate =
            escalation::should_auto_escalate(total, input.prohibited_phrase_count, profile);

        tracing::debug!(
            total,
            risk_level = risk_level.label(),
            escalation_action = escalation_action.label(),
            "risk assessment complete"
        );

        RiskAssessment {
            total_score: f32::from(total),
            risk_level,
            breakdown,
            escalation_action,
            justification,
            requires_immediate_action: total >= 80,
            auto_escalate,
        }
    }
}

/// Borrowed view of everything the risk scorer consumes.
#[derive(Debug, Clone, Copy)]
pub struct RiskInput<'a> {
    pub policy_violations: &'a [PolicyViolation],
    pub emotional_tone: &'a str,
    pub detected_threats: &'a [String],
    pub agent_conduct: &'a AgentConduct,
    pub time_violation: bool,
    pub prohibited_phrase_count: usize,
    pub high_arousal_count: usize,
}

/// Risk level bands over the clamped 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: i16) -> Self {
        if score >= 81 {
            RiskLevel::Critical
        } else if score >= 61 {
            RiskLevel::High
        } else if score >= 41 {
            RiskLevel::Moderate
        } else if score >= 21 {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Minimal => "minimal",
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub const fn category(self) -> &'static str {
        match self {
            RiskLevel::Minimal => "MINIMAL",
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// Who a risky call gets routed to, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscalationAction {
    #[serde(rename = "No escalation required")]
    None,
    #[serde(rename = "Supervisor review recommended")]
    SupervisorReview,
    #[serde(rename = "Manager review required")]
    ManagerReview,
    #[serde(rename = "Escalate to compliance team")]
    ComplianceTeam,
    #[serde(rename = "Legal team review required")]
    LegalReview,
    #[serde(rename = "Immediate intervention required")]
    ImmediateIntervention,
    #[serde(rename = "Executive level attention needed")]
    ExecutiveAttention,
}

impl EscalationAction {
    pub const fn label(self) -> &'static str {
        match self {
            EscalationAction::None => "No escalation required",
            EscalationAction::SupervisorReview => "Supervisor review recommended",
            EscalationAction::ManagerReview => "Manager review required",
            EscalationAction::ComplianceTeam => "Escalate to compliance team",
            EscalationAction::LegalReview => "Legal team review required",
            EscalationAction::ImmediateIntervention => "Immediate intervention required",
            EscalationAction::ExecutiveAttention => "Executive level attention needed",
        }
    }
}

/// Per-component sub-scores. Each component is capped independently; the sum
/// (after the outer clamp) is the assessment's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RiskBreakdown {
    pub policy_violations: i16,
    pub emotional_intensity: i16,
    pub threat_level: i16,
    pub agent_conduct: i16,
    pub time_violation: i16,
    pub prohibited_phrases: i16,
}

impl RiskBreakdown {
    pub fn total(&self) -> i16 {
        self.policy_violations
            + self.emotional_intensity
            + self.threat_level
            + self.agent_conduct
            + self.time_violation
            + self.prohibited_phrases
    }
}

/// Complete risk assessment for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub total_score: f32,
    pub risk_level: RiskLevel,
    pub breakdown: RiskBreakdown,
    pub escalation_action: EscalationAction,
    pub justification: String,
    pub requires_immediate_action: bool,
    pub auto_escalate: bool,
}

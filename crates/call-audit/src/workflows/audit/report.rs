use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client_profile::ClientProfile;
use super::domain::{CallSignals, PolicyViolation, TranscriptTurn, ViolationSeverity};
use super::outcome::OutcomeClassification;
use super::performance::PerformanceAssessment;
use super::risk::RiskAssessment;

/// Rough size classification of the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationComplexity {
    Low,
    Medium,
    High,
}

impl ConversationComplexity {
    pub fn from_turn_count(turn_count: usize) -> Self {
        if turn_count <= 6 {
            ConversationComplexity::Low
        } else if turn_count <= 14 {
            ConversationComplexity::Medium
        } else {
            ConversationComplexity::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConversationComplexity::Low => "low",
            ConversationComplexity::Medium => "medium",
            ConversationComplexity::High => "high",
        }
    }
}

/// Call-level metadata attached to every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub turn_count: usize,
    pub conversation_complexity: ConversationComplexity,
}

/// Echo of the client context the audit ran under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigApplied {
    pub business_domain: String,
    pub monitored_products: Vec<String>,
    pub active_policy_set: String,
    pub risk_triggers: Vec<String>,
}

impl ConfigApplied {
    fn from_profile(profile: &ClientProfile) -> Self {
        Self {
            business_domain: profile.business_domain.clone(),
            monitored_products: profile.monitored_products.clone(),
            active_policy_set: profile.active_policy_set.clone(),
            risk_triggers: profile.risk_triggers.clone(),
        }
    }
}

/// Compliance findings together with the full risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceAndRiskAudit {
    pub is_within_policy: bool,
    pub compliance_flags: Vec<String>,
    pub policy_violations: Vec<PolicyViolation>,
    pub detected_threats: Vec<String>,
    pub risk_assessment: RiskAssessment,
}

/// Outcome classification and agent assessment, merged as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAndOutcomes {
    pub call_outcome: OutcomeClassification,
    pub agent_performance: PerformanceAssessment,
    pub final_status: String,
    pub recommended_action: String,
}

/// The complete audit report handed to downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub summary: String,
    pub category: String,
    pub metadata: ReportMetadata,
    pub config_applied: ConfigApplied,
    pub compliance_and_risk_audit: ComplianceAndRiskAudit,
    pub performance_and_outcomes: PerformanceAndOutcomes,
}

const TIME_CLAUSE_ID: &str = "INTERNAL-TIME-01";

impl AuditReport {
    /// Merge the three assessment structures and the post-guard signals into
    /// the named report sections. A detected time violation becomes a
    /// violation entry here, after scoring; the calculators only ever see it
    /// as the flat time component.
    pub(crate) fn assemble(
        call_timestamp: Option<DateTime<Utc>>,
        transcript_turns: &[TranscriptTurn],
        profile: &ClientProfile,
        signals: CallSignals,
        time_violation: bool,
        risk: RiskAssessment,
        outcome: OutcomeClassification,
        performance: PerformanceAssessment,
    ) -> Self {
        let turn_count = transcript_turns.len();

        let mut policy_violations = signals.policy_violations;
        if time_violation
            && !policy_violations
                .iter()
                .any(|violation| violation.clause_id == TIME_CLAUSE_ID)
        {
            policy_violations.push(
                PolicyViolation::new(
                    TIME_CLAUSE_ID,
                    "Operating Hours Compliance",
                    ViolationSeverity::Medium,
                )
                .with_description(format!(
                    "Call placed outside the permitted {}-{} window",
                    profile.allowed_call_hours.start, profile.allowed_call_hours.end
                )),
            );
        }

        Self {
            summary: signals.summary,
            category: signals.category,
            metadata: ReportMetadata {
                timestamp: call_timestamp,
                turn_count,
                conversation_complexity: ConversationComplexity::from_turn_count(turn_count),
            },
            config_applied: ConfigApplied::from_profile(profile),
            compliance_and_risk_audit: ComplianceAndRiskAudit {
                is_within_policy: signals.is_within_policy,
                compliance_flags: signals.compliance_flags,
                policy_violations,
                detected_threats: signals.detected_threats,
                risk_assessment: risk,
            },
            performance_and_outcomes: PerformanceAndOutcomes {
                call_outcome: outcome,
                agent_performance: performance,
                final_status: signals.final_status,
                recommended_action: signals.recommended_action,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConversationComplexity;

    #[test]
    fn complexity_bands_follow_turn_count() {
        assert_eq!(
            ConversationComplexity::from_turn_count(6),
            ConversationComplexity::Low
        );
        assert_eq!(
            ConversationComplexity::from_turn_count(7),
            ConversationComplexity::Medium
        );
        assert_eq!(
            ConversationComplexity::from_turn_count(14),
            ConversationComplexity::Medium
        );
        assert_eq!(
            ConversationComplexity::from_turn_count(15),
            ConversationComplexity::High
        );
    }
}

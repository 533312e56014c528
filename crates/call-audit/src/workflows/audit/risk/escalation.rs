use super::{EscalationAction, RiskBreakdown};
use crate::workflows::audit::client_profile::ClientProfile;
use crate::workflows::audit::domain::{PolicyViolation, ViolationSeverity};

/// Priority chain for routing. Prohibited phrases and critical violations
/// override every score band.
pub(super) fn decide_action(
    score: i16,
    violations: &[PolicyViolation],
    prohibited_phrase_count: usize,
) -> EscalationAction {
    if prohibited_phrase_count > 0 {
        return EscalationAction::ImmediateIntervention;
    }

    if violations
        .iter()
        .any(|violation| violation.severity == ViolationSeverity::Critical)
    {
        return EscalationAction::ImmediateIntervention;
    }

    if score >= 90 {
        EscalationAction::ExecutiveAttention
    } else if score >= 80 {
        EscalationAction::LegalReview
    } else if score >= 65 {
        EscalationAction::ComplianceTeam
    } else if score >= 50 {
        EscalationAction::ManagerReview
    } else if score >= 35 {
        EscalationAction::SupervisorReview
    } else {
        EscalationAction::None
    }
}

pub(super) fn should_auto_escalate(
    score: i16,
    prohibited_phrase_count: usize,
    profile: Option<&ClientProfile>,
) -> bool {
    match profile {
        Some(profile) => {
            if !profile.auto_escalate_on_critical {
                return false;
            }
            score >= profile.risk_scoring.critical_threshold as i16 || prohibited_phrase_count > 0
        }
        None => score >= 80 || prohibited_phrase_count > 0,
    }
}

/// Human-readable justification listing every factor that fired, in fixed
/// order: prohibited phrases, critical violations, high violations, threats,
/// emotional intensity, agent conduct, time violation.
pub(super) fn build_justification(
    score: i16,
    breakdown: &RiskBreakdown,
    violations: &[PolicyViolation],
    threats: &[String],
    prohibited_phrase_count: usize,
) -> String {
    let mut parts = Vec::new();

    if prohibited_phrase_count > 0 {
        parts.push(format!(
            "{prohibited_phrase_count} prohibited phrase(s) detected (automatic critical risk)"
        ));
    }

    let critical = violations
        .iter()
        .filter(|violation| violation.severity == ViolationSeverity::Critical)
        .count();
    let high = violations
        .iter()
        .filter(|violation| violation.severity == ViolationSeverity::High)
        .count();
    if critical > 0 {
        parts.push(format!("{critical} critical policy violation(s)"));
    }
    if high > 0 {
        parts.push(format!("{high} high-severity violation(s)"));
    }

    if !threats.is_empty() {
        parts.push(format!("{} threat(s) detected", threats.len()));
    }

    if breakdown.emotional_intensity >= 15 {
        parts.push("high emotional intensity".to_string());
    }

    if breakdown.agent_conduct >= 15 {
        parts.push("poor agent conduct".to_string());
    }

    if breakdown.time_violation > 0 {
        parts.push("call timing violation".to_string());
    }

    if parts.is_empty() {
        return "Low risk call with no major compliance concerns".to_string();
    }

    format!("Risk score {score}/100 due to: {}", parts.join(", "))
}

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::client_profile::{ClientProfile, ProfileError};
use super::domain::{high_arousal_count, AuditId, AuditIntake, AuditStatus, CallSignals};
use super::outcome::CallOutcomeClassifier;
use super::performance::{AgentPerformanceCalculator, PerformanceInput};
use super::phrases;
use super::report::AuditReport;
use super::repository::{
    AlertError, AlertPublisher, AuditRecord, AuditRepository, EscalationAlert, RepositoryError,
};
use super::risk::{RiskInput, RiskScoreCalculator};

/// Service composing the phrase guard, the three calculators, and the
/// storage/alert adapters.
///
/// Each audit runs Risk, then Outcome, then Performance: the outcome
/// classifier consumes the risk score and the performance scorer consumes
/// the classified outcome.
pub struct CallAuditService<R, A> {
    repository: Arc<R>,
    alerts: Arc<A>,
    profile: ClientProfile,
}

static AUDIT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_audit_id() -> AuditId {
    let id = AUDIT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AuditId(format!("audit-{id:06}"))
}

impl<R, A> CallAuditService<R, A>
where
    R: AuditRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, profile: ClientProfile) -> Self {
        Self {
            repository,
            alerts,
            profile,
        }
    }

    /// Run the full scoring pipeline for one call and persist the result.
    pub fn audit(&self, intake: AuditIntake) -> Result<AuditRecord, AuditServiceError> {
        let AuditIntake {
            call_timestamp,
            transcript_turns,
            acoustic_segments,
            signals,
            time_violation,
            client_profile,
        } = intake;

        let profile = match client_profile {
            Some(profile) => {
                profile.validate()?;
                profile
            }
            None => self.profile.clone(),
        };

        // Degraded upstream data flows through the same path as real data.
        let mut signals = signals.unwrap_or_else(CallSignals::fallback);

        let hits = phrases::scan_agent_turns(&transcript_turns, &profile);
        phrases::apply_hits(&mut signals, &hits);
        let prohibited_phrase_count = hits.len();

        let conduct = signals.conduct();
        let risk = RiskScoreCalculator::assess(
            &RiskInput {
                policy_violations: &signals.policy_violations,
                emotional_tone: &signals.emotional_tone,
                detected_threats: &signals.detected_threats,
                agent_conduct: &conduct,
                time_violation,
                prohibited_phrase_count,
                high_arousal_count: high_arousal_count(&acoustic_segments),
            },
            Some(&profile),
        );

        let outcome =
            CallOutcomeClassifier::classify(&signals, &transcript_turns, risk.total_score);

        let performance = AgentPerformanceCalculator::assess(&PerformanceInput {
            politeness: &signals.agent_politeness,
            empathy: &signals.agent_empathy,
            professionalism: &signals.agent_professionalism,
            policy_violations: &signals.policy_violations,
            detected_threats: &signals.detected_threats,
            call_outcome: outcome.primary_outcome.label(),
            prohibited_phrase_count,
            time_violation,
            transcript_turns: &transcript_turns,
            emotional_tone: &signals.emotional_tone,
        });

        let status = if risk.auto_escalate {
            AuditStatus::Escalated
        } else if !signals.policy_violations.is_empty() {
            AuditStatus::Flagged
        } else {
            AuditStatus::Clear
        };

        let audit_id = next_audit_id();
        info!(
            audit_id = %audit_id.0,
            risk_score = risk.total_score,
            outcome = outcome.primary_outcome.label(),
            agent_score = performance.total_score,
            status = status.label(),
            "call audit complete"
        );

        let report = AuditReport::assemble(
            call_timestamp,
            &transcript_turns,
            &profile,
            signals,
            time_violation,
            risk,
            outcome,
            performance,
        );

        let record = AuditRecord {
            audit_id: audit_id.clone(),
            status,
            report,
        };
        let stored = self.repository.insert(record)?;

        if stored.risk().auto_escalate {
            let mut details = BTreeMap::new();
            details.insert(
                "risk_level".to_string(),
                stored.risk().risk_level.label().to_string(),
            );
            details.insert(
                "escalation_action".to_string(),
                stored.risk().escalation_action.label().to_string(),
            );
            self.alerts.publish(EscalationAlert {
                template: "audit_escalated".to_string(),
                audit_id,
                details,
            })?;
        }

        Ok(stored)
    }

    /// Fetch a stored audit for API responses.
    pub fn get(&self, audit_id: &AuditId) -> Result<AuditRecord, AuditServiceError> {
        let record = self
            .repository
            .fetch(audit_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the audit service.
#[derive(Debug, thiserror::Error)]
pub enum AuditServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}

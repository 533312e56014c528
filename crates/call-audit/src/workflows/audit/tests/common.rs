use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::audit::client_profile::ClientProfile;
use crate::workflows::audit::domain::{
    AuditId, AuditIntake, CallSignals, PolicyViolation, TranscriptTurn, ViolationSeverity,
};
use crate::workflows::audit::repository::{
    AlertError, AlertPublisher, AuditRecord, AuditRepository, EscalationAlert, RepositoryError,
};
use crate::workflows::audit::{audit_router, AuditStatus, CallAuditService};

pub(super) fn violation(severity: ViolationSeverity) -> PolicyViolation {
    PolicyViolation::new("RBI-REC-04", "No Physical Threats", severity)
        .with_description("Agent pressured the customer about repayment")
        .with_evidence("02:15", "You need to pay this today.")
}

pub(super) fn polite_transcript() -> Vec<TranscriptTurn> {
    vec![
        TranscriptTurn::agent(
            "00:05",
            "Good morning, I understand your situation and I appreciate your patience today.",
        ),
        TranscriptTurn::customer("00:20", "I missed last month's payment, things were tight."),
        TranscriptTurn::agent(
            "00:35",
            "Thank you for explaining. I can help set up a plan that works for your budget.",
        ),
        TranscriptTurn::customer("01:10", "That would be a relief, thank you."),
        TranscriptTurn::agent(
            "01:25",
            "My apologies for the stress this caused; consider the matter resolved on our side.",
        ),
    ]
}

pub(super) fn curt_transcript() -> Vec<TranscriptTurn> {
    vec![
        TranscriptTurn::agent("00:05", "Pay now."),
        TranscriptTurn::customer("00:12", "I cannot this week."),
        TranscriptTurn::agent("00:18", "Not my problem."),
    ]
}

/// Signals for an uneventful, in-policy call whose final status does not
/// trip the pending/review classifier rule.
pub(super) fn neutral_signals() -> CallSignals {
    CallSignals {
        summary: "Routine repayment reminder call.".to_string(),
        category: "Debt Recovery".to_string(),
        overall_sentiment: "Neutral".to_string(),
        emotional_tone: "Neutral".to_string(),
        is_within_policy: true,
        compliance_flags: Vec::new(),
        policy_violations: Vec::new(),
        detected_threats: Vec::new(),
        agent_politeness: "fair".to_string(),
        agent_empathy: "medium".to_string(),
        agent_professionalism: "fair".to_string(),
        final_status: "Closed".to_string(),
        recommended_action: "None.".to_string(),
    }
}

pub(super) fn profile() -> ClientProfile {
    ClientProfile::default()
}

pub(super) fn intake_with(
    transcript_turns: Vec<TranscriptTurn>,
    signals: Option<CallSignals>,
) -> AuditIntake {
    AuditIntake {
        call_timestamp: None,
        transcript_turns,
        acoustic_segments: Vec::new(),
        signals,
        time_violation: false,
        client_profile: None,
    }
}

pub(super) fn build_service() -> (
    CallAuditService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = CallAuditService::new(repository.clone(), alerts.clone(), profile());
    (service, repository, alerts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AuditId, AuditRecord>>>,
}

impl AuditRepository for MemoryRepository {
    fn insert(&self, record: AuditRecord) -> Result<AuditRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.audit_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.audit_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AuditRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.audit_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AuditId) -> Result<Option<AuditRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn flagged(&self, limit: usize) -> Result<Vec<AuditRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status != AuditStatus::Clear)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<EscalationAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<EscalationAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: EscalationAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) fn audit_router_with_service(
    service: CallAuditService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    audit_router(Arc::new(service))
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{AuditId, AuditStatus};
use super::outcome::{CallOutcome, OutcomeClassification};
use super::performance::PerformanceAssessment;
use super::report::AuditReport;
use super::risk::{EscalationAction, RiskAssessment, RiskLevel};

/// Repository record containing the report plus routing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub audit_id: AuditId,
    pub status: AuditStatus,
    pub report: AuditReport,
}

impl AuditRecord {
    pub fn risk(&self) -> &RiskAssessment {
        &self.report.compliance_and_risk_audit.risk_assessment
    }

    pub fn outcome(&self) -> &OutcomeClassification {
        &self.report.performance_and_outcomes.call_outcome
    }

    pub fn performance(&self) -> &PerformanceAssessment {
        &self.report.performance_and_outcomes.agent_performance
    }

    pub fn summary_view(&self) -> AuditSummaryView {
        let risk = self.risk();
        AuditSummaryView {
            audit_id: self.audit_id.clone(),
            status: self.status.label(),
            risk_score: risk.total_score,
            risk_level: risk.risk_level,
            escalation_action: risk.escalation_action,
            primary_outcome: self.outcome().primary_outcome,
            agent_score: self.performance().total_score,
            requires_immediate_action: risk.requires_immediate_action,
        }
    }
}

/// Sanitized representation of a stored audit's headline numbers.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSummaryView {
    pub audit_id: AuditId,
    pub status: &'static str,
    pub risk_score: f32,
    pub risk_level: RiskLevel,
    pub escalation_action: EscalationAction,
    pub primary_outcome: CallOutcome,
    pub agent_score: f32,
    pub requires_immediate_action: bool,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AuditRepository: Send + Sync {
    fn insert(&self, record: AuditRecord) -> Result<AuditRecord, RepositoryError>;
    fn update(&self, record: AuditRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AuditId) -> Result<Option<AuditRecord>, RepositoryError>;
    fn flagged(&self, limit: usize) -> Result<Vec<AuditRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound escalation hooks (e-mail, case queues, etc.).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: EscalationAlert) -> Result<(), AlertError>;
}

/// Alert payload dispatched when an audit auto-escalates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationAlert {
    pub template: String,
    pub audit_id: AuditId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

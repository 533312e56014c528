//! Call-audit scoring workflow: turns structured signals extracted from a
//! debt-recovery call (violations, tone, threats, conduct ratings) into a
//! bounded risk score, an outcome classification, and an agent performance
//! assessment, merged into one report.
//!
//! The three calculators are pure and infallible; garbage or missing
//! upstream data degrades to neutral contributions instead of errors.

pub mod client_profile;
pub mod domain;
pub mod outcome;
pub mod performance;
pub(crate) mod phrases;
pub mod report;
pub mod repository;
pub mod risk;
pub mod router;
pub mod service;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use client_profile::{
    AgentQualityThresholds, AllowedCallHours, ClientProfile, ProfileError, RiskScoringSettings,
};
pub use domain::{
    high_arousal_count, AcousticSegment, AgentConduct, ArousalLevel, AuditId, AuditIntake,
    AuditStatus, CallSignals, PolicyViolation, Speaker, TranscriptTurn, ViolationSeverity,
};
pub use outcome::{
    CallOutcome, CallOutcomeClassifier, OutcomeClassification, SatisfactionIndicator,
    UrgencyLevel,
};
pub use performance::{
    AgentPerformanceCalculator, ImprovementArea, PerformanceAssessment, PerformanceBreakdown,
    PerformanceInput, PerformanceLevel, TrainingPriority,
};
pub use report::{AuditReport, ConversationComplexity};
pub use repository::{
    AlertError, AlertPublisher, AuditRecord, AuditRepository, AuditSummaryView, EscalationAlert,
    RepositoryError,
};
pub use risk::{
    EscalationAction, RiskAssessment, RiskBreakdown, RiskInput, RiskLevel, RiskScoreCalculator,
};
pub use router::audit_router;
pub use service::{AuditServiceError, CallAuditService};
pub use transcript::{TranscriptCsvImporter, TranscriptImportError};

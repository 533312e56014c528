use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::client_profile::ClientProfile;

/// Identifier wrapper for completed call audits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditId(pub String);

/// Side of the conversation a transcript turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Agent,
    Customer,
}

impl Speaker {
    pub const fn label(self) -> &'static str {
        match self {
            Speaker::Agent => "agent",
            Speaker::Customer => "customer",
        }
    }

    /// Lenient mapping from diarization output; anything that does not
    /// identify the agent is treated as the customer.
    pub fn from_label(value: &str) -> Self {
        if value.trim().to_ascii_lowercase().contains("agent") {
            Speaker::Agent
        } else {
            Speaker::Customer
        }
    }
}

/// One diarized utterance with its in-call timestamp ("MM:SS").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub speaker: Speaker,
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

impl TranscriptTurn {
    pub fn agent(timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn customer(timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Customer,
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Severity attached to a policy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ViolationSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            ViolationSeverity::Critical => "critical",
            ViolationSeverity::High => "high",
            ViolationSeverity::Medium => "medium",
            ViolationSeverity::Low => "low",
        }
    }

    /// Case-insensitive lookup; anything unrecognized degrades to medium.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => ViolationSeverity::Critical,
            "high" => ViolationSeverity::High,
            "low" => ViolationSeverity::Low,
            _ => ViolationSeverity::Medium,
        }
    }
}

impl Default for ViolationSeverity {
    fn default() -> Self {
        ViolationSeverity::Medium
    }
}

impl<'de> Deserialize<'de> for ViolationSeverity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ViolationSeverity::from_label(&raw))
    }
}

/// A cited policy breach reported by the upstream extraction layer or the
/// prohibited-phrase guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyViolation {
    pub clause_id: String,
    pub rule_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub evidence_quote: String,
    #[serde(default)]
    pub severity: ViolationSeverity,
}

impl PolicyViolation {
    pub fn new(
        clause_id: impl Into<String>,
        rule_name: impl Into<String>,
        severity: ViolationSeverity,
    ) -> Self {
        Self {
            clause_id: clause_id.into(),
            rule_name: rule_name.into(),
            description: String::new(),
            timestamp: String::new(),
            evidence_quote: String::new(),
            severity,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_evidence(
        mut self,
        timestamp: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        self.timestamp = timestamp.into();
        self.evidence_quote = quote.into();
        self
    }
}

/// Free-text conduct ratings consumed by the risk calculator. Values are left
/// unparsed: the risk component matches them by equality while the
/// performance component matches by substring, and both behaviors matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConduct {
    pub politeness: String,
    pub professionalism: String,
}

impl Default for AgentConduct {
    fn default() -> Self {
        Self {
            politeness: "fair".to_string(),
            professionalism: "fair".to_string(),
        }
    }
}

/// Acoustic intensity classification for one audio segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArousalLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Per-segment audio emotion signal produced by the (out-of-scope) acoustic
/// analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticSegment {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub energy_score: f32,
    #[serde(default)]
    pub pitch_hz: f32,
    #[serde(default)]
    pub zcr: f32,
    #[serde(default, rename = "acoustic_arousal")]
    pub arousal: ArousalLevel,
}

/// Number of segments the acoustic analyzer flagged as high arousal.
pub fn high_arousal_count(segments: &[AcousticSegment]) -> usize {
    segments
        .iter()
        .filter(|segment| segment.arousal == ArousalLevel::High)
        .count()
}

fn default_true() -> bool {
    true
}

fn neutral_tone() -> String {
    "Neutral".to_string()
}

fn fair_rating() -> String {
    "fair".to_string()
}

fn medium_rating() -> String {
    "medium".to_string()
}

/// Structured judgments extracted upstream from the call recording. This is
/// the scoring core's read-only input contract; missing fields deserialize to
/// the same neutral values the fallback object carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSignals {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "neutral_tone")]
    pub overall_sentiment: String,
    #[serde(default = "neutral_tone")]
    pub emotional_tone: String,
    #[serde(default = "default_true")]
    pub is_within_policy: bool,
    #[serde(default)]
    pub compliance_flags: Vec<String>,
    #[serde(default)]
    pub policy_violations: Vec<PolicyViolation>,
    #[serde(default)]
    pub detected_threats: Vec<String>,
    #[serde(default = "fair_rating")]
    pub agent_politeness: String,
    #[serde(default = "medium_rating")]
    pub agent_empathy: String,
    #[serde(default = "fair_rating")]
    pub agent_professionalism: String,
    #[serde(default)]
    pub final_status: String,
    #[serde(default)]
    pub recommended_action: String,
}

impl CallSignals {
    /// Neutral preset used when the upstream analyzer fails, so the scoring
    /// core is invoked identically for real and degraded inputs.
    pub fn fallback() -> Self {
        Self {
            summary: "Analysis could not be completed. Manual review recommended.".to_string(),
            category: "Unclassified - Requires Review".to_string(),
            overall_sentiment: "Neutral".to_string(),
            emotional_tone: "Neutral".to_string(),
            is_within_policy: true,
            compliance_flags: Vec::new(),
            policy_violations: Vec::new(),
            detected_threats: Vec::new(),
            agent_politeness: "fair".to_string(),
            agent_empathy: "medium".to_string(),
            agent_professionalism: "fair".to_string(),
            final_status: "Pending Review".to_string(),
            recommended_action: "Manual review required.".to_string(),
        }
    }

    pub fn conduct(&self) -> AgentConduct {
        AgentConduct {
            politeness: self.agent_politeness.clone(),
            professionalism: self.agent_professionalism.clone(),
        }
    }

    pub fn has_critical_violations(&self) -> bool {
        self.policy_violations
            .iter()
            .any(|violation| violation.severity == ViolationSeverity::Critical)
    }

    pub fn violation_count(&self, severity: ViolationSeverity) -> usize {
        self.policy_violations
            .iter()
            .filter(|violation| violation.severity == severity)
            .count()
    }
}

impl Default for CallSignals {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Everything the audit service needs to score one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditIntake {
    #[serde(default)]
    pub call_timestamp: Option<DateTime<Utc>>,
    pub transcript_turns: Vec<TranscriptTurn>,
    #[serde(default)]
    pub acoustic_segments: Vec<AcousticSegment>,
    /// Upstream extraction result; `None` engages the neutral fallback.
    #[serde(default)]
    pub signals: Option<CallSignals>,
    #[serde(default)]
    pub time_violation: bool,
    /// Per-call override of the service's default client profile.
    #[serde(default)]
    pub client_profile: Option<ClientProfile>,
}

/// High level status tracked for stored audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditStatus {
    Clear,
    Flagged,
    Escalated,
}

impl AuditStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AuditStatus::Clear => "clear",
            AuditStatus::Flagged => "flagged",
            AuditStatus::Escalated => "escalated",
        }
    }
}

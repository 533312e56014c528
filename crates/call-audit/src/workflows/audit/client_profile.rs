use serde::{Deserialize, Serialize};

/// Validation errors raised when a client profile carries out-of-range dials.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("{field} must be between 0 and 100 (found {value})")]
    ThresholdOutOfRange { field: &'static str, value: u16 },
    #[error("{field} must be between 0.0 and 1.0 (found {value})")]
    WeightOutOfRange { field: &'static str, value: f32 },
    #[error("max_call_attempts_per_day must be at least 1")]
    NoCallAttempts,
}

/// Risk-scoring dials exposed to clients. The weight fields are range-checked
/// on load but the calculator runs on its fixed component weights; only the
/// thresholds and the auto-escalate toggle influence scoring decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoringSettings {
    #[serde(default = "RiskScoringSettings::default_base_threshold")]
    pub base_threshold: u16,
    #[serde(default = "RiskScoringSettings::default_critical_threshold")]
    pub critical_threshold: u16,
    #[serde(default = "RiskScoringSettings::default_weight_policy_violations")]
    pub weight_policy_violations: f32,
    #[serde(default = "RiskScoringSettings::default_weight_emotional_tone")]
    pub weight_emotional_tone: f32,
    #[serde(default = "RiskScoringSettings::default_weight_threat_detection")]
    pub weight_threat_detection: f32,
}

impl RiskScoringSettings {
    const fn default_base_threshold() -> u16 {
        50
    }

    const fn default_critical_threshold() -> u16 {
        80
    }

    const fn default_weight_policy_violations() -> f32 {
        0.4
    }

    const fn default_weight_emotional_tone() -> f32 {
        0.3
    }

    const fn default_weight_threat_detection() -> f32 {
        0.3
    }
}

impl Default for RiskScoringSettings {
    fn default() -> Self {
        Self {
            base_threshold: Self::default_base_threshold(),
            critical_threshold: Self::default_critical_threshold(),
            weight_policy_violations: Self::default_weight_policy_violations(),
            weight_emotional_tone: Self::default_weight_emotional_tone(),
            weight_threat_detection: Self::default_weight_threat_detection(),
        }
    }
}

/// Minimum acceptable agent quality metrics for this organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentQualityThresholds {
    #[serde(default = "AgentQualityThresholds::default_politeness")]
    pub minimum_politeness_score: u16,
    #[serde(default = "AgentQualityThresholds::default_empathy")]
    pub minimum_empathy_score: u16,
    #[serde(default = "AgentQualityThresholds::default_professionalism")]
    pub minimum_professionalism_score: u16,
    #[serde(default = "AgentQualityThresholds::default_overall")]
    pub minimum_overall_score: u16,
}

impl AgentQualityThresholds {
    const fn default_politeness() -> u16 {
        60
    }

    const fn default_empathy() -> u16 {
        50
    }

    const fn default_professionalism() -> u16 {
        70
    }

    const fn default_overall() -> u16 {
        60
    }
}

impl Default for AgentQualityThresholds {
    fn default() -> Self {
        Self {
            minimum_politeness_score: Self::default_politeness(),
            minimum_empathy_score: Self::default_empathy(),
            minimum_professionalism_score: Self::default_professionalism(),
            minimum_overall_score: Self::default_overall(),
        }
    }
}

/// Permitted calling window for recovery calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedCallHours {
    pub start: String,
    pub end: String,
    pub timezone: String,
}

impl Default for AllowedCallHours {
    fn default() -> Self {
        Self {
            start: "08:00".to_string(),
            end: "19:00".to_string(),
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

/// Organization-level audit context: which phrases are forbidden, which
/// triggers matter, and how aggressively to escalate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default = "ClientProfile::default_organization_name")]
    pub organization_name: String,
    #[serde(default = "ClientProfile::default_business_domain")]
    pub business_domain: String,
    #[serde(default = "ClientProfile::default_policy_set")]
    pub active_policy_set: String,
    #[serde(default = "ClientProfile::default_monitored_products")]
    pub monitored_products: Vec<String>,
    #[serde(default = "ClientProfile::default_risk_triggers")]
    pub risk_triggers: Vec<String>,
    #[serde(default = "ClientProfile::default_prohibited_phrases")]
    pub prohibited_phrases: Vec<String>,
    #[serde(default = "ClientProfile::default_auto_escalate")]
    pub auto_escalate_on_critical: bool,
    #[serde(default)]
    pub risk_scoring: RiskScoringSettings,
    #[serde(default)]
    pub agent_quality_thresholds: AgentQualityThresholds,
    #[serde(default)]
    pub allowed_call_hours: AllowedCallHours,
    #[serde(default = "ClientProfile::default_max_call_attempts")]
    pub max_call_attempts_per_day: u8,
}

impl ClientProfile {
    fn default_organization_name() -> String {
        "Default Organization".to_string()
    }

    fn default_business_domain() -> String {
        "Banking / Debt Recovery".to_string()
    }

    fn default_policy_set() -> String {
        "RBI_Compliance_v2.1".to_string()
    }

    fn default_monitored_products() -> Vec<String> {
        ["Credit Card", "Personal Loan", "Savings Account"]
            .map(str::to_string)
            .to_vec()
    }

    fn default_risk_triggers() -> Vec<String> {
        [
            "Legal Threats",
            "Harassment",
            "Unauthorized Debit",
            "Physical Visit Threat",
            "Social Shaming",
            "Jail Mention",
            "Court Mention",
            "Family Mention",
            "Police Mention",
            "Coercion",
            "Abusive Language",
            "Threat",
        ]
        .map(str::to_string)
        .to_vec()
    }

    fn default_prohibited_phrases() -> Vec<String> {
        [
            "you will go to jail",
            "we will send someone to your house",
            "we will tell your family",
            "we will tell your employer",
            "you are a criminal",
            "you are a fraud",
        ]
        .map(str::to_string)
        .to_vec()
    }

    const fn default_auto_escalate() -> bool {
        true
    }

    const fn default_max_call_attempts() -> u8 {
        3
    }

    /// Range-check every numeric dial.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let thresholds = [
            ("base_threshold", self.risk_scoring.base_threshold),
            ("critical_threshold", self.risk_scoring.critical_threshold),
            (
                "minimum_politeness_score",
                self.agent_quality_thresholds.minimum_politeness_score,
            ),
            (
                "minimum_empathy_score",
                self.agent_quality_thresholds.minimum_empathy_score,
            ),
            (
                "minimum_professionalism_score",
                self.agent_quality_thresholds.minimum_professionalism_score,
            ),
            (
                "minimum_overall_score",
                self.agent_quality_thresholds.minimum_overall_score,
            ),
        ];
        for (field, value) in thresholds {
            if value > 100 {
                return Err(ProfileError::ThresholdOutOfRange { field, value });
            }
        }

        let weights = [
            (
                "weight_policy_violations",
                self.risk_scoring.weight_policy_violations,
            ),
            (
                "weight_emotional_tone",
                self.risk_scoring.weight_emotional_tone,
            ),
            (
                "weight_threat_detection",
                self.risk_scoring.weight_threat_detection,
            ),
        ];
        for (field, value) in weights {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(ProfileError::WeightOutOfRange { field, value });
            }
        }

        if self.max_call_attempts_per_day == 0 {
            return Err(ProfileError::NoCallAttempts);
        }

        Ok(())
    }
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            organization_name: Self::default_organization_name(),
            business_domain: Self::default_business_domain(),
            active_policy_set: Self::default_policy_set(),
            monitored_products: Self::default_monitored_products(),
            risk_triggers: Self::default_risk_triggers(),
            prohibited_phrases: Self::default_prohibited_phrases(),
            auto_escalate_on_critical: Self::default_auto_escalate(),
            risk_scoring: RiskScoringSettings::default(),
            agent_quality_thresholds: AgentQualityThresholds::default(),
            allowed_call_hours: AllowedCallHours::default(),
            max_call_attempts_per_day: Self::default_max_call_attempts(),
        }
    }
}

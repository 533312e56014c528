mod coaching;
mod components;

use serde::{Deserialize, Serialize};

use super::domain::{PolicyViolation, TranscriptTurn};

/// Multi-dimensional agent quality scorer.
///
/// Six additive components (communication, politeness, empathy,
/// professionalism, resolution, compliance) plus negative penalties, summed
/// and clamped to [0, 100], with coaching output derived from the breakdown.
pub struct AgentPerformanceCalculator;

impl AgentPerformanceCalculator {
    pub fn assess(input: &PerformanceInput<'_>) -> PerformanceAssessment {
        let breakdown = PerformanceBreakdown {
            communication_skills: components::communication_score(
                input.transcript_turns,
                input.emotional_tone,
            ),
            politeness: components::politeness_score(input.politeness),
            empathy: components::empathy_score(input.empathy),
            professionalism: components::professionalism_score(input.professionalism),
            problem_resolution: components::resolution_score(
                input.call_outcome,
                input.policy_violations,
            ),
            compliance_adherence: components::compliance_score(
                input.policy_violations,
                input.prohibited_phrase_count,
            ),
            penalties: components::penalties(
                input.prohibited_phrase_count,
                input.detected_threats,
                input.time_violation,
                input.policy_violations,
            ),
        };

        let total = breakdown.total().clamp(0, 100);
        let performance_level = PerformanceLevel::from_score(total);

        let strengths = coaching::identify_strengths(
            &breakdown,
            input.politeness,
            input.empathy,
            input.professionalism,
        );
        let weaknesses = coaching::identify_weaknesses(
            &breakdown,
            input.politeness,
            input.empathy,
            input.professionalism,
            input.policy_violations,
            input.call_outcome,
        );
        let training_priority = coaching::training_priority(
            total,
            input.prohibited_phrase_count,
            input.policy_violations,
        );
        let training_recommendations = coaching::training_recommendations(
            &weaknesses,
            input.policy_violations,
            input.prohibited_phrase_count,
        );
        let specific_feedback =
            coaching::specific_feedback(total, &strengths, &weaknesses, input.policy_violations);

        tracing::debug!(
            total,
            performance_level = performance_level.label(),
            training_priority = training_priority.label(),
            "agent performance assessment complete"
        );

        PerformanceAssessment {
            total_score: f32::from(total),
            performance_level,
            breakdown,
            strengths,
            weaknesses,
            training_priority,
            training_recommendations,
            specific_feedback,
            requires_coaching: total < 70,
            requires_disciplinary_action: total < 40 || input.prohibited_phrase_count > 0,
            commendation_worthy: total >= 90,
        }
    }
}

/// Borrowed view of everything the performance scorer consumes. The outcome
/// arrives as its display label because the resolution component matches it
/// by substring, exactly like the qualitative ratings.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceInput<'a> {
    pub politeness: &'a str,
    pub empathy: &'a str,
    pub professionalism: &'a str,
    pub policy_violations: &'a [PolicyViolation],
    pub detected_threats: &'a [String],
    pub call_outcome: &'a str,
    pub prohibited_phrase_count: usize,
    pub time_violation: bool,
    pub transcript_turns: &'a [TranscriptTurn],
    pub emotional_tone: &'a str,
}

/// Performance bands over the clamped 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Exceptional,
    Excellent,
    Good,
    Satisfactory,
    NeedsImprovement,
    Poor,
    Unacceptable,
}

impl PerformanceLevel {
    pub fn from_score(score: i16) -> Self {
        if score >= 90 {
            PerformanceLevel::Exceptional
        } else if score >= 80 {
            PerformanceLevel::Excellent
        } else if score >= 70 {
            PerformanceLevel::Good
        } else if score >= 60 {
            PerformanceLevel::Satisfactory
        } else if score >= 40 {
            PerformanceLevel::NeedsImprovement
        } else if score >= 20 {
            PerformanceLevel::Poor
        } else {
            PerformanceLevel::Unacceptable
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Exceptional => "exceptional",
            PerformanceLevel::Excellent => "excellent",
            PerformanceLevel::Good => "good",
            PerformanceLevel::Satisfactory => "satisfactory",
            PerformanceLevel::NeedsImprovement => "needs_improvement",
            PerformanceLevel::Poor => "poor",
            PerformanceLevel::Unacceptable => "unacceptable",
        }
    }

    pub const fn category(self) -> &'static str {
        match self {
            PerformanceLevel::Exceptional => "EXCEPTIONAL",
            PerformanceLevel::Excellent => "EXCELLENT",
            PerformanceLevel::Good => "GOOD",
            PerformanceLevel::Satisfactory => "SATISFACTORY",
            PerformanceLevel::NeedsImprovement => "NEEDS_IMPROVEMENT",
            PerformanceLevel::Poor => "POOR",
            PerformanceLevel::Unacceptable => "UNACCEPTABLE",
        }
    }
}

/// How soon the agent needs retraining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingPriority {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl TrainingPriority {
    pub const fn label(self) -> &'static str {
        match self {
            TrainingPriority::Critical => "critical",
            TrainingPriority::High => "high",
            TrainingPriority::Medium => "medium",
            TrainingPriority::Low => "low",
            TrainingPriority::None => "none",
        }
    }
}

/// Coaching focus areas mapped from the breakdown and violation texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImprovementArea {
    #[serde(rename = "Communication Clarity")]
    CommunicationClarity,
    #[serde(rename = "Active Listening")]
    ActiveListening,
    #[serde(rename = "Empathy and Customer Understanding")]
    EmpathyBuilding,
    #[serde(rename = "Politeness and Courtesy")]
    PolitenessCourtesy,
    #[serde(rename = "Professional Demeanor")]
    Professionalism,
    #[serde(rename = "Problem Resolution Skills")]
    ProblemSolving,
    #[serde(rename = "Compliance and Policy Adherence")]
    ComplianceTraining,
    #[serde(rename = "Emotional Control and Composure")]
    EmotionalRegulation,
    #[serde(rename = "Appropriate Language Use")]
    LanguageUse,
    #[serde(rename = "Conflict De-escalation")]
    ConflictResolution,
    #[serde(rename = "Product/Service Knowledge")]
    ProductKnowledge,
    #[serde(rename = "Call Management and Control")]
    CallControl,
}

impl ImprovementArea {
    pub const fn label(self) -> &'static str {
        match self {
            ImprovementArea::CommunicationClarity => "Communication Clarity",
            ImprovementArea::ActiveListening => "Active Listening",
            ImprovementArea::EmpathyBuilding => "Empathy and Customer Understanding",
            ImprovementArea::PolitenessCourtesy => "Politeness and Courtesy",
            ImprovementArea::Professionalism => "Professional Demeanor",
            ImprovementArea::ProblemSolving => "Problem Resolution Skills",
            ImprovementArea::ComplianceTraining => "Compliance and Policy Adherence",
            ImprovementArea::EmotionalRegulation => "Emotional Control and Composure",
            ImprovementArea::LanguageUse => "Appropriate Language Use",
            ImprovementArea::ConflictResolution => "Conflict De-escalation",
            ImprovementArea::ProductKnowledge => "Product/Service Knowledge",
            ImprovementArea::CallControl => "Call Management and Control",
        }
    }
}

/// Per-component sub-scores; `penalties` is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PerformanceBreakdown {
    pub communication_skills: i16,
    pub politeness: i16,
    pub empathy: i16,
    pub professionalism: i16,
    pub problem_resolution: i16,
    pub compliance_adherence: i16,
    pub penalties: i16,
}

impl PerformanceBreakdown {
    pub fn total(&self) -> i16 {
        self.communication_skills
            + self.politeness
            + self.empathy
            + self.professionalism
            + self.problem_resolution
            + self.compliance_adherence
            + self.penalties
    }
}

/// Complete agent quality assessment for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAssessment {
    pub total_score: f32,
    pub performance_level: PerformanceLevel,
    pub breakdown: PerformanceBreakdown,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<ImprovementArea>,
    pub training_priority: TrainingPriority,
    pub training_recommendations: Vec<String>,
    pub specific_feedback: String,
    pub requires_coaching: bool,
    pub requires_disciplinary_action: bool,
    pub commendation_worthy: bool,
}

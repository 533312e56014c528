use super::common::*;
use crate::workflows::audit::domain::{PolicyViolation, TranscriptTurn, ViolationSeverity};
use crate::workflows::audit::performance::{
    AgentPerformanceCalculator, ImprovementArea, PerformanceInput, PerformanceLevel,
    TrainingPriority,
};

fn base_input<'a>(turns: &'a [TranscriptTurn]) -> PerformanceInput<'a> {
    PerformanceInput {
        politeness: "fair",
        empathy: "medium",
        professionalism: "fair",
        policy_violations: &[],
        detected_threats: &[],
        call_outcome: "Resolved",
        prohibited_phrase_count: 0,
        time_violation: false,
        transcript_turns: turns,
        emotional_tone: "Neutral",
    }
}

#[test]
fn exemplary_call_scores_exceptional() {
    let turns = polite_transcript();
    let mut input = base_input(&turns);
    input.politeness = "excellent";
    input.empathy = "high";
    input.professionalism = "excellent";

    let assessment = AgentPerformanceCalculator::assess(&input);

    // 30 + 12 + 13 + 20 + 15 + 10 with no penalties.
    assert_eq!(assessment.breakdown.communication_skills, 30);
    assert_eq!(assessment.total_score, 100.0);
    assert_eq!(assessment.performance_level, PerformanceLevel::Exceptional);
    assert!(assessment.commendation_worthy);
    assert!(!assessment.requires_coaching);
    assert_eq!(assessment.training_priority, TrainingPriority::None);
    assert!(assessment
        .strengths
        .iter()
        .any(|strength| strength.contains("Full compliance")));
}

#[test]
fn rating_ladders_map_to_component_scores() {
    let turns = polite_transcript();
    let mut input = base_input(&turns);
    input.politeness = "poor";
    input.empathy = "low";
    input.professionalism = "good";

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.breakdown.politeness, 2);
    assert_eq!(assessment.breakdown.empathy, 4);
    assert_eq!(assessment.breakdown.professionalism, 16);
}

#[test]
fn unknown_ratings_score_zero() {
    let turns = polite_transcript();
    let mut input = base_input(&turns);
    input.politeness = "unacceptable";
    input.empathy = "none";
    input.professionalism = "unacceptable";

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.breakdown.politeness, 0);
    assert_eq!(assessment.breakdown.empathy, 0);
    assert_eq!(assessment.breakdown.professionalism, 0);
}

#[test]
fn missing_agent_turns_default_to_fair_communication() {
    let turns = vec![TranscriptTurn::customer("00:05", "Hello? Anyone there?")];
    let input = base_input(&turns);

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.breakdown.communication_skills, 18);
}

#[test]
fn aggressive_tone_dents_communication() {
    let turns = curt_transcript();
    let mut input = base_input(&turns);
    input.emotional_tone = "Aggressive";

    let assessment = AgentPerformanceCalculator::assess(&input);

    // Base 18, no length or phrase bonuses, minus the tone deduction.
    assert_eq!(assessment.breakdown.communication_skills, 8);
}

#[test]
fn prohibited_phrases_force_disciplinary_action() {
    let turns = polite_transcript();
    let mut input = base_input(&turns);
    input.prohibited_phrase_count = 1;

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.breakdown.compliance_adherence, 0);
    assert_eq!(assessment.breakdown.penalties, -15);
    assert!(assessment.requires_disciplinary_action);
    assert_eq!(assessment.training_priority, TrainingPriority::Critical);
    assert!(assessment.training_recommendations[0].starts_with("CRITICAL:"));
}

#[test]
fn prohibited_phrase_penalty_caps_at_two_hits() {
    let turns = polite_transcript();
    let mut input = base_input(&turns);
    input.prohibited_phrase_count = 5;

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.breakdown.penalties, -30);
}

#[test]
fn harassment_penalty_applies_once() {
    let turns = polite_transcript();
    let violations = vec![
        violation(ViolationSeverity::High)
            .with_description("Repeated harassment over the customer's workplace"),
        violation(ViolationSeverity::High)
            .with_description("Coercion regarding family members"),
    ];
    let mut input = base_input(&turns);
    input.policy_violations = &violations;

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.breakdown.penalties, -25);
}

#[test]
fn threat_penalty_requires_confirming_violation() {
    let turns = polite_transcript();
    let threats = vec!["Customer was threatened with a home visit".to_string()];
    let mut input = base_input(&turns);
    input.detected_threats = &threats;

    let without_violation = AgentPerformanceCalculator::assess(&input);
    assert_eq!(without_violation.breakdown.penalties, 0);

    let violations =
        vec![violation(ViolationSeverity::High).with_description("Threat of home visit")];
    input.policy_violations = &violations;
    let with_violation = AgentPerformanceCalculator::assess(&input);
    assert_eq!(with_violation.breakdown.penalties, -20);
}

#[test]
fn escalation_with_serious_violations_zeroes_resolution() {
    let turns = polite_transcript();
    let violations = vec![violation(ViolationSeverity::High)];
    let mut input = base_input(&turns);
    input.call_outcome = "Escalated";
    input.policy_violations = &violations;

    let assessment = AgentPerformanceCalculator::assess(&input);
    assert_eq!(assessment.breakdown.problem_resolution, 0);

    input.policy_violations = &[];
    let without_violations = AgentPerformanceCalculator::assess(&input);
    assert_eq!(without_violations.breakdown.problem_resolution, 6);
}

#[test]
fn transferred_outcome_earns_partial_resolution() {
    let turns = polite_transcript();
    let mut input = base_input(&turns);
    input.call_outcome = "Transferred";

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.breakdown.problem_resolution, 10);
}

#[test]
fn weaknesses_are_deduplicated_and_mapped() {
    let turns = curt_transcript();
    let violations = vec![
        violation(ViolationSeverity::High).with_description("Aggressive threat made to customer"),
        violation(ViolationSeverity::Medium).with_description("Inappropriate language used"),
    ];
    let mut input = base_input(&turns);
    input.politeness = "poor";
    input.call_outcome = "Customer Dissatisfied";
    input.policy_violations = &violations;

    let assessment = AgentPerformanceCalculator::assess(&input);

    let conflict_count = assessment
        .weaknesses
        .iter()
        .filter(|area| **area == ImprovementArea::ConflictResolution)
        .count();
    assert_eq!(conflict_count, 1);
    assert!(assessment
        .weaknesses
        .contains(&ImprovementArea::PolitenessCourtesy));
    assert!(assessment
        .weaknesses
        .contains(&ImprovementArea::LanguageUse));
    assert!(assessment
        .weaknesses
        .contains(&ImprovementArea::EmotionalRegulation));
}

#[test]
fn recommendations_are_truncated_to_five() {
    let turns = curt_transcript();
    let violations = vec![
        violation(ViolationSeverity::Critical).with_description("Threatening language"),
        violation(ViolationSeverity::High).with_description("Inappropriate remarks"),
    ];
    let mut input = base_input(&turns);
    input.politeness = "unacceptable";
    input.empathy = "none";
    input.professionalism = "poor";
    input.call_outcome = "Dropped";
    input.prohibited_phrase_count = 2;
    input.policy_violations = &violations;

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.training_recommendations.len(), 5);
    assert_eq!(assessment.training_priority, TrainingPriority::Critical);
}

#[test]
fn total_score_never_leaves_bounds() {
    let turns = curt_transcript();
    let violations: Vec<PolicyViolation> = (0..6)
        .map(|_| violation(ViolationSeverity::Critical).with_description("Harassment and threat"))
        .collect();
    let threats = vec!["Explicit threat".to_string()];
    let mut input = base_input(&turns);
    input.politeness = "unacceptable";
    input.empathy = "none";
    input.professionalism = "unacceptable";
    input.call_outcome = "Legal Dispute";
    input.prohibited_phrase_count = 4;
    input.time_violation = true;
    input.policy_violations = &violations;
    input.detected_threats = &threats;
    input.emotional_tone = "Threatening";

    let assessment = AgentPerformanceCalculator::assess(&input);

    assert_eq!(assessment.total_score, 0.0);
    assert_eq!(assessment.performance_level, PerformanceLevel::Unacceptable);
    assert!(assessment.requires_coaching);
    assert!(assessment.requires_disciplinary_action);
}

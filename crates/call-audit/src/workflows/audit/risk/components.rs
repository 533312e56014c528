use super::{RiskBreakdown, RiskInput};
use crate::workflows::audit::domain::{AgentConduct, PolicyViolation, ViolationSeverity};

// Per-violation weights by severity.
const CRITICAL_VIOLATION: i16 = 30;
const HIGH_VIOLATION: i16 = 20;
const MEDIUM_VIOLATION: i16 = 10;
const LOW_VIOLATION: i16 = 5;
const VIOLATION_CAP: i16 = 40;

// Emotional tone weights, checked in descending-intensity order.
const THREATENING_TONE: i16 = 25;
const AGGRESSIVE_TONE: i16 = 20;
const DISTRESSED_TONE: i16 = 15;
const ANGRY_TONE: i16 = 15;
const FRUSTRATED_TONE: i16 = 10;
const ANXIOUS_TONE: i16 = 8;
const AROUSAL_BONUS_CAP: i16 = 10;
const EMOTION_CAP: i16 = 25;

// Threat phrasing weights.
const EXPLICIT_THREAT: i16 = 25;
const IMPLIED_THREAT: i16 = 15;
const INTIMIDATION: i16 = 10;
const THREAT_CAP: i16 = 25;

// Agent conduct weights.
const UNACCEPTABLE_CONDUCT: i16 = 25;
const POOR_CONDUCT: i16 = 15;
const UNPROFESSIONAL: i16 = 10;
const CONDUCT_CAP: i16 = 25;

const TIME_VIOLATION: i16 = 15;

const PROHIBITED_PHRASE: i16 = 30;
const PROHIBITED_CAP: i16 = 60;

pub(super) fn score_components(input: &RiskInput<'_>) -> RiskBreakdown {
    RiskBreakdown {
        policy_violations: violation_component(input.policy_violations),
        emotional_intensity: emotion_component(input.emotional_tone, input.high_arousal_count),
        threat_level: threat_component(input.detected_threats),
        agent_conduct: conduct_component(input.agent_conduct),
        time_violation: if input.time_violation {
            TIME_VIOLATION
        } else {
            0
        },
        prohibited_phrases: prohibited_component(input.prohibited_phrase_count),
    }
}

fn violation_component(violations: &[PolicyViolation]) -> i16 {
    let score = violations
        .iter()
        .map(|violation| match violation.severity {
            ViolationSeverity::Critical => CRITICAL_VIOLATION,
            ViolationSeverity::High => HIGH_VIOLATION,
            ViolationSeverity::Medium => MEDIUM_VIOLATION,
            ViolationSeverity::Low => LOW_VIOLATION,
        })
        .sum::<i16>();
    score.min(VIOLATION_CAP)
}

fn emotion_component(emotional_tone: &str, high_arousal_count: usize) -> i16 {
    let tone = emotional_tone.to_lowercase();

    // First match wins: "threatening" must outrank "aggressive".
    let base = if tone.contains("threatening") {
        THREATENING_TONE
    } else if tone.contains("aggressive") {
        AGGRESSIVE_TONE
    } else if tone.contains("distressed") {
        DISTRESSED_TONE
    } else if tone.contains("angry") {
        ANGRY_TONE
    } else if tone.contains("frustrated") {
        FRUSTRATED_TONE
    } else if tone.contains("anxious") || tone.contains("panicked") {
        ANXIOUS_TONE
    } else {
        0
    };

    let arousal_bonus = i16::try_from(high_arousal_count.saturating_mul(2))
        .unwrap_or(AROUSAL_BONUS_CAP)
        .min(AROUSAL_BONUS_CAP);

    (base + arousal_bonus).min(EMOTION_CAP)
}

fn threat_component(threats: &[String]) -> i16 {
    const EXPLICIT_MARKERS: [&str; 4] = ["will", "going to", "must", "force"];
    const IMPLIED_MARKERS: [&str; 3] = ["might", "could", "may"];

    let score = threats
        .iter()
        .map(|threat| {
            let threat = threat.to_lowercase();
            if EXPLICIT_MARKERS.iter().any(|word| threat.contains(word)) {
                EXPLICIT_THREAT
            } else if IMPLIED_MARKERS.iter().any(|word| threat.contains(word)) {
                IMPLIED_THREAT
            } else {
                INTIMIDATION
            }
        })
        .sum::<i16>();
    score.min(THREAT_CAP)
}

fn conduct_component(conduct: &AgentConduct) -> i16 {
    let mut score = 0;

    let politeness = conduct.politeness.trim().to_lowercase();
    if politeness == "unacceptable" {
        score += UNACCEPTABLE_CONDUCT;
    } else if politeness == "poor" {
        score += POOR_CONDUCT;
    }

    let professionalism = conduct.professionalism.trim().to_lowercase();
    if professionalism == "unacceptable" {
        score += UNACCEPTABLE_CONDUCT;
    } else if professionalism == "poor" {
        score += UNPROFESSIONAL;
    }

    score.min(CONDUCT_CAP)
}

fn prohibited_component(count: usize) -> i16 {
    i16::try_from(count.saturating_mul(PROHIBITED_PHRASE as usize))
        .unwrap_or(PROHIBITED_CAP)
        .min(PROHIBITED_CAP)
}

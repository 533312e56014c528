use crate::workflows::audit::domain::{
    PolicyViolation, Speaker, TranscriptTurn, ViolationSeverity,
};

// Politeness ladder (max 12).
const EXCELLENT_POLITENESS: i16 = 12;
const GOOD_POLITENESS: i16 = 9;
const FAIR_POLITENESS: i16 = 6;
const POOR_POLITENESS: i16 = 2;

// Empathy ladder (max 13).
const HIGH_EMPATHY: i16 = 13;
const MEDIUM_EMPATHY: i16 = 8;
const LOW_EMPATHY: i16 = 4;

// Professionalism ladder (max 20).
const EXCELLENT_PROFESSIONALISM: i16 = 20;
const GOOD_PROFESSIONALISM: i16 = 16;
const FAIR_PROFESSIONALISM: i16 = 12;
const POOR_PROFESSIONALISM: i16 = 6;

// Problem resolution (max 15).
const RESOLVED_EFFECTIVELY: i16 = 15;
const PARTIAL_RESOLUTION: i16 = 10;
const ATTEMPTED_RESOLUTION: i16 = 6;
const NO_RESOLUTION: i16 = 0;

// Compliance adherence (max 10).
const FULL_COMPLIANCE: i16 = 10;
const MINOR_VIOLATIONS: i16 = 5;
const MAJOR_VIOLATIONS: i16 = 0;

// Deductions.
const PROHIBITED_PHRASE_PENALTY: i16 = -15;
const THREAT_MADE_PENALTY: i16 = -20;
const HARASSMENT_PENALTY: i16 = -25;
const TIME_VIOLATION_PENALTY: i16 = -5;

const COMMUNICATION_BASE: i16 = 18;
const COMMUNICATION_CAP: i16 = 30;

const PROFESSIONAL_PHRASES: [&str; 5] = ["understand", "assist", "help", "appreciate", "apologies"];

/// Communication quality heuristic over the agent's own turns: message
/// detail, professional phrasing, minus a deduction for an aggressive tone.
pub(super) fn communication_score(turns: &[TranscriptTurn], emotional_tone: &str) -> i16 {
    let agent_messages: Vec<&str> = turns
        .iter()
        .filter(|turn| turn.speaker == Speaker::Agent)
        .map(|turn| turn.message.as_str())
        .collect();

    if agent_messages.is_empty() {
        return COMMUNICATION_BASE;
    }

    let mut score = COMMUNICATION_BASE;

    let total_len: usize = agent_messages.iter().map(|message| message.len()).sum();
    let avg_message_length = total_len as f32 / agent_messages.len() as f32;
    if avg_message_length > 50.0 {
        score += 6;
    } else if avg_message_length > 30.0 {
        score += 3;
    }

    let professional_count: usize = agent_messages
        .iter()
        .map(|message| {
            let message = message.to_lowercase();
            PROFESSIONAL_PHRASES
                .iter()
                .filter(|phrase| message.contains(*phrase))
                .count()
        })
        .sum();
    if professional_count >= 3 {
        score += 6;
    } else if professional_count >= 1 {
        score += 3;
    }

    let tone = emotional_tone.to_lowercase();
    if tone.contains("aggressive") || tone.contains("threatening") {
        score -= 10;
    }

    score.clamp(0, COMMUNICATION_CAP)
}

pub(super) fn politeness_score(politeness: &str) -> i16 {
    let politeness = politeness.to_lowercase();
    if politeness.contains("excellent") {
        EXCELLENT_POLITENESS
    } else if politeness.contains("good") {
        GOOD_POLITENESS
    } else if politeness.contains("fair") {
        FAIR_POLITENESS
    } else if politeness.contains("poor") {
        POOR_POLITENESS
    } else {
        0
    }
}

pub(super) fn empathy_score(empathy: &str) -> i16 {
    let empathy = empathy.to_lowercase();
    if empathy.contains("high") {
        HIGH_EMPATHY
    } else if empathy.contains("medium") {
        MEDIUM_EMPATHY
    } else if empathy.contains("low") {
        LOW_EMPATHY
    } else {
        0
    }
}

pub(super) fn professionalism_score(professionalism: &str) -> i16 {
    let professionalism = professionalism.to_lowercase();
    if professionalism.contains("excellent") {
        EXCELLENT_PROFESSIONALISM
    } else if professionalism.contains("good") {
        GOOD_PROFESSIONALISM
    } else if professionalism.contains("fair") {
        FAIR_PROFESSIONALISM
    } else if professionalism.contains("poor") {
        POOR_PROFESSIONALISM
    } else {
        0
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn has_severity_at_least_high(violations: &[PolicyViolation]) -> bool {
    violations.iter().any(|violation| {
        matches!(
            violation.severity,
            ViolationSeverity::Critical | ViolationSeverity::High
        )
    })
}

pub(super) fn resolution_score(call_outcome: &str, violations: &[PolicyViolation]) -> i16 {
    let outcome = call_outcome.to_lowercase();

    if contains_any(&outcome, &["resolved", "satisfied", "customer satisfied"]) {
        RESOLVED_EFFECTIVELY
    } else if contains_any(&outcome, &["callback", "pending", "follow-up", "transferred"]) {
        PARTIAL_RESOLUTION
    } else if contains_any(&outcome, &["escalated", "unresolved"]) {
        if has_severity_at_least_high(violations) {
            NO_RESOLUTION
        } else {
            ATTEMPTED_RESOLUTION
        }
    } else if contains_any(&outcome, &["dropped", "legal", "dissatisfied"]) {
        NO_RESOLUTION
    } else {
        ATTEMPTED_RESOLUTION
    }
}

pub(super) fn compliance_score(
    violations: &[PolicyViolation],
    prohibited_phrase_count: usize,
) -> i16 {
    if prohibited_phrase_count > 0 {
        return MAJOR_VIOLATIONS;
    }

    let critical = violations
        .iter()
        .any(|violation| violation.severity == ViolationSeverity::Critical);
    let high = violations
        .iter()
        .any(|violation| violation.severity == ViolationSeverity::High);

    if critical {
        MAJOR_VIOLATIONS
    } else if high || violations.len() >= 3 {
        MINOR_VIOLATIONS
    } else if !violations.is_empty() {
        MINOR_VIOLATIONS
    } else {
        FULL_COMPLIANCE
    }
}

const HARASSMENT_KEYWORDS: [&str; 3] = ["harassment", "intimidation", "coercion"];

pub(super) fn penalties(
    prohibited_phrase_count: usize,
    detected_threats: &[String],
    time_violation: bool,
    violations: &[PolicyViolation],
) -> i16 {
    let mut penalty = 0;

    if prohibited_phrase_count > 0 {
        penalty += PROHIBITED_PHRASE_PENALTY * prohibited_phrase_count.min(2) as i16;
    }

    // Threat penalty only when a violation confirms the agent made it.
    if !detected_threats.is_empty()
        && violations
            .iter()
            .any(|violation| violation.description.to_lowercase().contains("threat"))
    {
        penalty += THREAT_MADE_PENALTY;
    }

    // At most one harassment deduction, even across several such violations.
    if violations.iter().any(|violation| {
        let description = violation.description.to_lowercase();
        HARASSMENT_KEYWORDS
            .iter()
            .any(|keyword| description.contains(keyword))
    }) {
        penalty += HARASSMENT_PENALTY;
    }

    if time_violation {
        penalty += TIME_VIOLATION_PENALTY;
    }

    penalty
}

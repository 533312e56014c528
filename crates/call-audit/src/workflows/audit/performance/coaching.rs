use super::{ImprovementArea, PerformanceBreakdown, TrainingPriority};
use crate::workflows::audit::domain::{PolicyViolation, ViolationSeverity};

pub(super) fn identify_strengths(
    breakdown: &PerformanceBreakdown,
    politeness: &str,
    empathy: &str,
    professionalism: &str,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if breakdown.communication_skills >= 24 {
        strengths.push("Excellent communication clarity and articulation".to_string());
    }

    let politeness = politeness.to_lowercase();
    if politeness == "excellent" || politeness == "good" {
        strengths.push("Strong politeness and courtesy".to_string());
    }

    if empathy.to_lowercase() == "high" {
        strengths.push("High empathy and customer understanding".to_string());
    }

    let professionalism = professionalism.to_lowercase();
    if professionalism == "excellent" || professionalism == "good" {
        strengths.push("Professional demeanor and conduct".to_string());
    }

    if breakdown.problem_resolution >= 12 {
        strengths.push("Effective problem resolution skills".to_string());
    }

    if breakdown.compliance_adherence == 10 {
        strengths.push("Full compliance with policies and regulations".to_string());
    }

    if breakdown.penalties == 0 {
        strengths.push("No policy violations or inappropriate conduct".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Completed the call interaction".to_string());
    }

    strengths
}

fn push_unique(weaknesses: &mut Vec<ImprovementArea>, area: ImprovementArea) {
    if !weaknesses.contains(&area) {
        weaknesses.push(area);
    }
}

pub(super) fn identify_weaknesses(
    breakdown: &PerformanceBreakdown,
    politeness: &str,
    empathy: &str,
    professionalism: &str,
    violations: &[PolicyViolation],
    call_outcome: &str,
) -> Vec<ImprovementArea> {
    let mut weaknesses = Vec::new();

    if breakdown.communication_skills < 18 {
        push_unique(&mut weaknesses, ImprovementArea::CommunicationClarity);
        push_unique(&mut weaknesses, ImprovementArea::ActiveListening);
    }

    let politeness = politeness.to_lowercase();
    if politeness == "poor" || politeness == "unacceptable" {
        push_unique(&mut weaknesses, ImprovementArea::PolitenessCourtesy);
    }

    let empathy = empathy.to_lowercase();
    if empathy == "low" || empathy == "none" {
        push_unique(&mut weaknesses, ImprovementArea::EmpathyBuilding);
    }

    let professionalism = professionalism.to_lowercase();
    if professionalism == "poor" || professionalism == "unacceptable" {
        push_unique(&mut weaknesses, ImprovementArea::Professionalism);
    }

    if breakdown.problem_resolution < 10 {
        push_unique(&mut weaknesses, ImprovementArea::ProblemSolving);
    }

    if breakdown.compliance_adherence < 10 {
        push_unique(&mut weaknesses, ImprovementArea::ComplianceTraining);
    }

    for violation in violations {
        let description = violation.description.to_lowercase();
        if description.contains("language") || description.contains("inappropriate") {
            push_unique(&mut weaknesses, ImprovementArea::LanguageUse);
        }
        if description.contains("threat") || description.contains("aggressive") {
            push_unique(&mut weaknesses, ImprovementArea::ConflictResolution);
            push_unique(&mut weaknesses, ImprovementArea::EmotionalRegulation);
        }
    }

    let outcome = call_outcome.to_lowercase();
    if outcome.contains("dissatisfied") || outcome.contains("dropped") {
        push_unique(&mut weaknesses, ImprovementArea::ConflictResolution);
    }

    weaknesses
}

pub(super) fn training_priority(
    score: i16,
    prohibited_phrase_count: usize,
    violations: &[PolicyViolation],
) -> TrainingPriority {
    if prohibited_phrase_count > 0 {
        return TrainingPriority::Critical;
    }

    if violations
        .iter()
        .any(|violation| violation.severity == ViolationSeverity::Critical)
    {
        return TrainingPriority::Critical;
    }

    if score < 40 {
        TrainingPriority::Critical
    } else if score < 60 {
        TrainingPriority::High
    } else if score < 70 {
        TrainingPriority::Medium
    } else if score < 80 {
        TrainingPriority::Low
    } else {
        TrainingPriority::None
    }
}

const fn recommendation_for(area: ImprovementArea) -> &'static str {
    match area {
        ImprovementArea::CommunicationClarity => {
            "Communication skills workshop: Clear articulation and message structuring"
        }
        ImprovementArea::ActiveListening => {
            "Active listening training: Techniques for better customer understanding"
        }
        ImprovementArea::EmpathyBuilding => "Empathy and emotional intelligence training",
        ImprovementArea::PolitenessCourtesy => {
            "Customer service excellence: Politeness and professional courtesy"
        }
        ImprovementArea::Professionalism => {
            "Professional conduct and business etiquette training"
        }
        ImprovementArea::ProblemSolving => "Problem-solving and resolution skills workshop",
        ImprovementArea::ComplianceTraining => {
            "Compliance and regulatory adherence certification course"
        }
        ImprovementArea::EmotionalRegulation => {
            "Stress management and emotional control training"
        }
        ImprovementArea::LanguageUse => {
            "Appropriate language and tone training for customer interactions"
        }
        ImprovementArea::ConflictResolution => {
            "Conflict de-escalation and resolution techniques"
        }
        ImprovementArea::ProductKnowledge => "Product/service knowledge enhancement sessions",
        ImprovementArea::CallControl => "Call management and control strategies workshop",
    }
}

pub(super) fn training_recommendations(
    weaknesses: &[ImprovementArea],
    violations: &[PolicyViolation],
    prohibited_phrase_count: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if prohibited_phrase_count > 0 {
        recommendations.push(
            "CRITICAL: Immediate training on prohibited language and appropriate communication"
                .to_string(),
        );
        recommendations
            .push("CRITICAL: Review and sign-off on company communication guidelines".to_string());
    }

    if violations
        .iter()
        .any(|violation| violation.severity == ViolationSeverity::Critical)
    {
        recommendations.push(
            "CRITICAL: Mandatory compliance retraining on policy violations committed".to_string(),
        );
    }

    for weakness in weaknesses {
        recommendations.push(recommendation_for(*weakness).to_string());
    }

    if recommendations.is_empty() {
        recommendations
            .push("Continue current performance level with periodic refresher training".to_string());
    }

    recommendations.truncate(5);
    recommendations
}

pub(super) fn specific_feedback(
    score: i16,
    strengths: &[String],
    weaknesses: &[ImprovementArea],
    violations: &[PolicyViolation],
) -> String {
    let mut feedback = Vec::new();

    feedback.push(
        if score >= 90 {
            "Outstanding performance demonstrating exceptional customer service and compliance."
        } else if score >= 80 {
            "Excellent performance with strong customer service and professional conduct."
        } else if score >= 70 {
            "Good performance overall with room for skill enhancement."
        } else if score >= 60 {
            "Satisfactory performance but requires focused improvement in key areas."
        } else if score >= 40 {
            "Performance needs significant improvement. Coaching required."
        } else {
            "Unacceptable performance. Immediate intervention and retraining necessary."
        }
        .to_string(),
    );

    if !strengths.is_empty() {
        let listed: Vec<&str> = strengths.iter().take(3).map(String::as_str).collect();
        feedback.push(format!("Key strengths: {}", listed.join(", ")));
    }

    if !weaknesses.is_empty() {
        let listed: Vec<&str> = weaknesses
            .iter()
            .take(3)
            .map(|weakness| weakness.label())
            .collect();
        feedback.push(format!(
            "Focus areas for improvement: {}",
            listed.join(", ")
        ));
    }

    let critical = violations
        .iter()
        .filter(|violation| violation.severity == ViolationSeverity::Critical)
        .count();
    let high = violations
        .iter()
        .filter(|violation| violation.severity == ViolationSeverity::High)
        .count();
    if critical > 0 {
        feedback.push(format!(
            "{critical} critical policy violation(s) require immediate corrective action."
        ));
    } else if high > 0 {
        feedback.push(format!(
            "{high} high-severity violation(s) need to be addressed promptly."
        ));
    }

    feedback.join(" ")
}

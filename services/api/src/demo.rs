use crate::infra::{load_client_profile, InMemoryAlertPublisher, InMemoryAuditRepository};
use call_audit::error::AppError;
use call_audit::workflows::audit::{
    AuditIntake, AuditRecord, CallAuditService, CallSignals, PolicyViolation, TranscriptCsvImporter,
    TranscriptTurn, ViolationSeverity,
};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AuditArgs {
    /// Diarized transcript export (CSV with Timestamp,Speaker,Message columns)
    #[arg(long)]
    pub(crate) transcript: PathBuf,
    /// Optional extraction-signals JSON produced by the upstream analyzer
    #[arg(long)]
    pub(crate) signals: Option<PathBuf>,
    /// Optional client profile JSON overriding the built-in defaults
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Mark the call as placed outside permitted hours
    #[arg(long)]
    pub(crate) time_violation: bool,
    /// Print the complete report JSON instead of the summary lines
    #[arg(long)]
    pub(crate) full_report: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print complete report JSON for each demo call
    #[arg(long)]
    pub(crate) full_report: bool,
}

fn build_service() -> (
    Arc<CallAuditService<InMemoryAuditRepository, InMemoryAlertPublisher>>,
    Arc<InMemoryAlertPublisher>,
) {
    let repository = Arc::new(InMemoryAuditRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let profile = load_client_profile(None);
    let service = Arc::new(CallAuditService::new(repository, alerts.clone(), profile));
    (service, alerts)
}

pub(crate) fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let AuditArgs {
        transcript,
        signals,
        profile,
        time_violation,
        full_report,
    } = args;

    let transcript_turns = TranscriptCsvImporter::from_path(transcript)?;
    let signals = signals.map(read_json::<CallSignals>).transpose()?;
    let client_profile = profile.map(read_json).transpose()?;

    let (service, alerts) = build_service();
    let record = service.audit(AuditIntake {
        call_timestamp: Some(Utc::now()),
        transcript_turns,
        acoustic_segments: Vec::new(),
        signals,
        time_violation,
        client_profile,
    })?;

    render_record(&record, full_report);
    if !alerts.events().is_empty() {
        println!("Escalation alert dispatched for {}", record.audit_id.0);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { full_report } = args;
    let (service, alerts) = build_service();

    println!("Call audit demo");

    println!("\n--- Clean repayment-plan call ---");
    let clean = service.audit(clean_call_intake())?;
    render_record(&clean, full_report);

    println!("\n--- Threatening collection call ---");
    let escalated = service.audit(escalated_call_intake())?;
    render_record(&escalated, full_report);

    let events = alerts.events();
    println!("\nEscalation alerts dispatched: {}", events.len());
    for event in events {
        println!("  {} -> {}", event.audit_id.0, event.template);
    }

    Ok(())
}

fn render_record(record: &AuditRecord, full_report: bool) {
    let risk = record.risk();
    let outcome = record.outcome();
    let performance = record.performance();

    println!("Audit {} [{}]", record.audit_id.0, record.status.label());
    println!(
        "  Risk: {}/100 ({}) -> {}",
        risk.total_score,
        risk.risk_level.label(),
        risk.escalation_action.label()
    );
    println!("  Justification: {}", risk.justification);
    println!(
        "  Outcome: {} (confidence {:.2}), urgency {}",
        outcome.primary_outcome.label(),
        outcome.confidence_score,
        outcome.urgency_level.label()
    );
    println!("  Next action: {}", outcome.next_action);
    println!(
        "  Agent: {}/100 ({}), training priority {}",
        performance.total_score,
        performance.performance_level.label(),
        performance.training_priority.label()
    );
    println!("  Feedback: {}", performance.specific_feedback);

    if full_report {
        match serde_json::to_string_pretty(&record.report) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("  (could not render full report: {err})"),
        }
    }
}

fn clean_call_intake() -> AuditIntake {
    let transcript_turns = vec![
        TranscriptTurn::agent(
            "00:05",
            "Good morning, this is a reminder about your personal loan installment.",
        ),
        TranscriptTurn::customer("00:18", "Yes, I lost track of the date this month."),
        TranscriptTurn::agent(
            "00:30",
            "I understand, it happens. I can help you settle it today or set a new date.",
        ),
        TranscriptTurn::customer("00:55", "Let us settle it today. Thank you for the patience."),
        TranscriptTurn::agent("01:05", "Thank you, the payment is confirmed and resolved."),
    ];

    let mut signals = CallSignals::fallback();
    signals.summary = "Routine installment reminder resolved on the call.".to_string();
    signals.category = "Debt Recovery".to_string();
    signals.emotional_tone = "Calm".to_string();
    signals.final_status = "Closed".to_string();
    signals.agent_politeness = "excellent".to_string();
    signals.agent_empathy = "high".to_string();
    signals.agent_professionalism = "good".to_string();
    signals.recommended_action = "None.".to_string();

    AuditIntake {
        call_timestamp: Some(Utc::now()),
        transcript_turns,
        acoustic_segments: Vec::new(),
        signals: Some(signals),
        time_violation: false,
        client_profile: None,
    }
}

fn escalated_call_intake() -> AuditIntake {
    let transcript_turns = vec![
        TranscriptTurn::agent("00:05", "You have ignored every notice about this loan."),
        TranscriptTurn::customer("00:15", "I told you, I need two more weeks."),
        TranscriptTurn::agent(
            "00:25",
            "No more extensions. We will send someone to your house if this stays unpaid.",
        ),
        TranscriptTurn::customer("00:40", "That is a threat. I will talk to my lawyer."),
    ];

    let mut signals = CallSignals::fallback();
    signals.summary = "Agent escalated a routine follow-up into threats.".to_string();
    signals.category = "Debt Recovery".to_string();
    signals.emotional_tone = "Aggressive".to_string();
    signals.is_within_policy = false;
    signals.policy_violations.push(
        PolicyViolation::new("RBI-REC-04", "No Physical Threats", ViolationSeverity::High)
            .with_description("Agent threatened a home visit over the unpaid installment")
            .with_evidence("00:25", "We will send someone to your house if this stays unpaid."),
    );
    signals
        .detected_threats
        .push("Agent said recovery staff will visit the customer's house".to_string());
    signals.agent_politeness = "poor".to_string();
    signals.agent_empathy = "low".to_string();
    signals.agent_professionalism = "poor".to_string();
    signals.final_status = "Escalated to Compliance Manager".to_string();
    signals.recommended_action = "Review agent conduct with the compliance team.".to_string();

    AuditIntake {
        call_timestamp: Some(Utc::now()),
        transcript_turns,
        acoustic_segments: Vec::new(),
        signals: Some(signals),
        time_violation: false,
        client_profile: None,
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: PathBuf) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{}: {err}", path.display()),
        ))
    })
}

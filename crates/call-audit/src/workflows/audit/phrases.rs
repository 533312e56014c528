use tracing::warn;

use super::client_profile::ClientProfile;
use super::domain::{CallSignals, PolicyViolation, Speaker, TranscriptTurn, ViolationSeverity};

pub(crate) const PROHIBITED_CLAUSE_ID: &str = "CLIENT-PROHIBITED-PHRASE";
pub(crate) const PROHIBITED_FLAG: &str = "Prohibited Language";

/// One prohibited phrase found in an agent utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseHit {
    pub timestamp: String,
    pub phrase: String,
    pub context: String,
}

/// Scan agent turns for client-configured prohibited phrases. Matching is a
/// case-insensitive substring check; customer turns never count.
pub fn scan_agent_turns(turns: &[TranscriptTurn], profile: &ClientProfile) -> Vec<PhraseHit> {
    let mut hits = Vec::new();

    for turn in turns {
        if turn.speaker != Speaker::Agent {
            continue;
        }

        let message = turn.message.to_lowercase();
        for phrase in &profile.prohibited_phrases {
            if message.contains(&phrase.to_lowercase()) {
                warn!(
                    timestamp = %turn.timestamp,
                    phrase = %phrase,
                    "prohibited phrase detected in agent utterance"
                );
                hits.push(PhraseHit {
                    timestamp: turn.timestamp.clone(),
                    phrase: phrase.clone(),
                    context: turn.message.clone(),
                });
            }
        }
    }

    hits
}

/// Fold phrase hits back into the extraction result: every hit becomes a
/// critical violation and the call is marked outside policy.
pub fn apply_hits(signals: &mut CallSignals, hits: &[PhraseHit]) {
    if hits.is_empty() {
        return;
    }

    for hit in hits {
        signals.policy_violations.push(
            PolicyViolation::new(
                PROHIBITED_CLAUSE_ID,
                "Prohibited Language Used",
                ViolationSeverity::Critical,
            )
            .with_description(format!("Agent used prohibited phrase: '{}'", hit.phrase))
            .with_evidence(hit.timestamp.clone(), hit.context.clone()),
        );
    }

    signals.is_within_policy = false;
    if !signals
        .compliance_flags
        .iter()
        .any(|flag| flag == PROHIBITED_FLAG)
    {
        signals.compliance_flags.push(PROHIBITED_FLAG.to_string());
    }
}

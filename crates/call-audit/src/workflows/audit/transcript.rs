use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{Speaker, TranscriptTurn};

#[derive(Debug)]
pub enum TranscriptImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for TranscriptImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptImportError::Io(err) => {
                write!(f, "failed to read transcript export: {}", err)
            }
            TranscriptImportError::Csv(err) => write!(f, "invalid transcript CSV data: {}", err),
        }
    }
}

impl std::error::Error for TranscriptImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscriptImportError::Io(err) => Some(err),
            TranscriptImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TranscriptImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TranscriptImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Importer for diarized call exports with `Timestamp,Speaker,Message`
/// columns, the batch intake path used by the CLI.
pub struct TranscriptCsvImporter;

impl TranscriptCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TranscriptTurn>, TranscriptImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TranscriptTurn>, TranscriptImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut turns = Vec::new();

        for record in csv_reader.deserialize::<TranscriptRow>() {
            let row = record?;
            turns.push(TranscriptTurn {
                speaker: Speaker::from_label(&row.speaker),
                message: row.message,
                timestamp: row.timestamp.unwrap_or_default(),
            });
        }

        Ok(turns)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptRow {
    #[serde(
        rename = "Timestamp",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    timestamp: Option<String>,
    #[serde(rename = "Speaker")]
    speaker: String,
    #[serde(rename = "Message")]
    message: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

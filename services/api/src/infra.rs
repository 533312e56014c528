use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

use call_audit::workflows::audit::{
    AlertError, AlertPublisher, AuditId, AuditRecord, AuditRepository, AuditStatus, ClientProfile,
    EscalationAlert, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAuditRepository {
    records: Arc<Mutex<HashMap<AuditId, AuditRecord>>>,
}

impl AuditRepository for InMemoryAuditRepository {
    fn insert(&self, record: AuditRecord) -> Result<AuditRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.audit_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.audit_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AuditRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.audit_id) {
            guard.insert(record.audit_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AuditId) -> Result<Option<AuditRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn flagged(&self, limit: usize) -> Result<Vec<AuditRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status != AuditStatus::Clear)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAlertPublisher {
    events: Arc<Mutex<Vec<EscalationAlert>>>,
}

impl AlertPublisher for InMemoryAlertPublisher {
    fn publish(&self, alert: EscalationAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryAlertPublisher {
    pub(crate) fn events(&self) -> Vec<EscalationAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

/// Load the client profile named by configuration, falling back to the
/// built-in defaults when no path is set or the file is unusable.
pub(crate) fn load_client_profile(path: Option<&str>) -> ClientProfile {
    let Some(path) = path else {
        return ClientProfile::default();
    };

    match read_profile(Path::new(path)) {
        Ok(profile) => profile,
        Err(reason) => {
            warn!(path, %reason, "falling back to default client profile");
            ClientProfile::default()
        }
    }
}

fn read_profile(path: &Path) -> Result<ClientProfile, String> {
    let raw = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    let profile: ClientProfile = serde_json::from_str(&raw).map_err(|err| err.to_string())?;
    profile.validate().map_err(|err| err.to_string())?;
    Ok(profile)
}

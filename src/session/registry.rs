use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use super::{on_export, on_generate, Effect, Session, SessionError, SessionSummary};
use crate::record::{ExportSettings, FieldValues, PlayerRecord};

/// All live sessions, each with its own record store.
///
/// Every operation touches exactly one session; closing a session drops its
/// records.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Session>>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    pub fn create(&self) -> Result<SessionSummary, SessionError> {
        self.insert(Session::new())
    }

    /// Register an already built session.
    pub fn insert(&self, session: Session) -> Result<SessionSummary, SessionError> {
        let mut sessions = self.sessions.write();
        if sessions.len() >= self.max_sessions {
            tracing::warn!(limit = self.max_sessions, "Refusing new session");
            return Err(SessionError::LimitReached(self.max_sessions));
        }
        let summary = session.summary();
        sessions.insert(session.id, session);
        tracing::info!(session_id = %summary.id, "Session opened");
        Ok(summary)
    }

    pub fn summary(&self, id: Uuid) -> Result<SessionSummary, SessionError> {
        self.sessions
            .read()
            .get(&id)
            .map(Session::summary)
            .ok_or(SessionError::NotFound(id))
    }

    /// Summaries ordered by creation time.
    pub fn list(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> =
            self.sessions.read().values().map(Session::summary).collect();
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        summaries
    }

    pub fn records(&self, id: Uuid) -> Result<Vec<PlayerRecord>, SessionError> {
        self.sessions
            .read()
            .get(&id)
            .map(|session| session.store.records().to_vec())
            .ok_or(SessionError::NotFound(id))
    }

    /// Run the generate action on one session, returning the effect to apply.
    pub fn generate(&self, id: Uuid, values: FieldValues) -> Result<Effect, SessionError> {
        let mut sessions = self.sessions.write();
        let session = sessions.remove(&id).ok_or(SessionError::NotFound(id))?;
        let (session, effect) = on_generate(session, values);
        let records = session.store.len();
        sessions.insert(id, session);
        tracing::debug!(session_id = %id, records, "Record generated");
        Ok(effect)
    }

    /// Run the export action on one session. A failure leaves the records as they were.
    pub fn export(&self, id: Uuid, settings: &ExportSettings) -> Result<Effect, SessionError> {
        let sessions = self.sessions.read();
        let session = sessions.get(&id).ok_or(SessionError::NotFound(id))?;
        let effect = on_export(session, settings).inspect_err(|e| {
            tracing::warn!(session_id = %id, error = %e, "Export failed");
        })?;
        tracing::info!(
            session_id = %id,
            records = session.store.len(),
            "Export prepared"
        );
        Ok(effect)
    }

    pub fn close(&self, id: Uuid) -> Result<(), SessionError> {
        let removed = self.sessions.write().remove(&id);
        match removed {
            Some(session) => {
                tracing::info!(
                    session_id = %id,
                    records = session.store.len(),
                    "Session closed"
                );
                Ok(())
            }
            None => Err(SessionError::NotFound(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

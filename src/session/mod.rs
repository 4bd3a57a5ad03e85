//! Session-scoped state and the pure action handlers that drive it

mod registry;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::form::FormError;
use crate::record::{
    collect, download, Download, ExportError, ExportSettings, FieldValues, PlayerRecord,
    RecordStore,
};

pub use registry::SessionRegistry;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),
    #[error("Session limit of {0} reached")]
    LimitReached(usize),
    #[error("Invalid form: {0}")]
    Form(#[from] FormError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// One user's working state. Nothing here is shared with other sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub store: RecordStore,
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now())
    }

    pub fn with_id(id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            store: RecordStore::new(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            created_at: self.created_at,
            records: self.store.len(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub records: usize,
}

/// Side effects for the host to carry out after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Render the full table, in store order.
    ShowTable(Vec<PlayerRecord>),
    /// Offer a file download.
    Download(Download),
}

/// "Generate": collect the form values and append the record.
pub fn on_generate(mut session: Session, values: FieldValues) -> (Session, Effect) {
    session.store.append(collect(values));
    let effect = Effect::ShowTable(session.store.records().to_vec());
    (session, effect)
}

/// "Download": serialize the session's table. The session is only read.
pub fn on_export(session: &Session, settings: &ExportSettings) -> Result<Effect, ExportError> {
    download(&session.store, settings).map(Effect::Download)
}

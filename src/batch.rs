//! Batch input surface: one JSON form per line, fed through the same actions
//! an interactive session uses.

use std::io::BufRead;

use thiserror::Error;

use crate::form::{FormError, PlayerForm};
use crate::session::{on_generate, Session};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid JSON: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Form { line: usize, source: FormError },
}

/// Run "generate" once per non-blank input line, in order.
///
/// Stops at the first bad line; nothing after it is read.
pub fn collect_lines<R: BufRead>(reader: R) -> Result<Session, BatchError> {
    let mut session = Session::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let form: PlayerForm = serde_json::from_str(&line).map_err(|source| BatchError::Json {
            line: line_number,
            source,
        })?;
        let values = form.validate().map_err(|source| BatchError::Form {
            line: line_number,
            source,
        })?;

        session = on_generate(session, values).0;
    }

    tracing::info!(
        session_id = %session.id,
        records = session.store.len(),
        "Batch collected"
    );
    Ok(session)
}

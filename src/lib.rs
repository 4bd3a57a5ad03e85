pub mod batch;
pub mod config;
pub mod form;
pub mod record;
pub mod session;
pub mod util;
pub mod web;

pub use batch::{collect_lines, BatchError};
pub use config::Config;
pub use form::{form_schema, FormError, PlayerForm};
pub use record::{
    collect, export, parse, Download, ExportError, ExportSettings, FieldValues, PlayerRecord,
    Position, PositionDetail, RecordStore, TransferStatus,
};
pub use session::{on_export, on_generate, Effect, Session, SessionError, SessionRegistry};
pub use web::{build_router, run_server, ServerConfig, WebAppState};

//! HTTP surface: sessions, the player form, the table and the CSV download

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::WebError;
pub use server::{build_router, run_server, ServerConfig};
pub use state::WebAppState;

//! HTTP request handlers for the transfer-desk web API.

pub mod form;
pub mod players;
pub mod sessions;

//! Shared test utilities for transfer-desk
//!
//! - Field-value and form fixtures
//! - Temporary data directories for CLI runs

pub mod fixtures;

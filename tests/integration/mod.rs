//! Integration tests for transfer-desk
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod record_flow;

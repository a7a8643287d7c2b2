//! Integration test utilities for the vote tally server
//!
//! This crate provides helpers for running end-to-end tests against
//! the plain-text HTTP API.

pub mod helpers;

pub use helpers::*;

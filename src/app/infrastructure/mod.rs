//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Logging setup
//! - Platform-specific detection
//! - Persistent key-value storage

pub mod error;
pub mod logging;
pub mod platform;
pub mod storage;

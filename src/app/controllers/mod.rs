//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Page lifecycle dispatch
//! - In-flight submission bookkeeping

pub mod flow;
pub mod submission;

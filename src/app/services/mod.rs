//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Talking to the shortening service
//! - Theme resolution

pub mod shortener;
pub mod theme;

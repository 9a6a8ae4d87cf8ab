//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (page state machine, theme preference, settings, messages)
//! - `controllers/` - Orchestration (flow dispatch, submission tracking)
//! - `services/` - Business operations (shortening client, theme resolution)
//! - `infrastructure/` - External integrations (storage, platform, logging, error)
//! - `page.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod page;
pub mod services;

// Re-exports for convenient external access
pub use controllers::flow::{FlowController, Render};
pub use controllers::submission::SubmissionTracker;
pub use domain::{AppAction, AppSettings, AppState, FinalState, InitialState, InvalidTransition, Message, ShortenError};
pub use infrastructure::platform::detect_system_dark_mode;
pub use page::{Page, View};
pub use services::shortener::{HttpShortener, Shortener};
pub use services::theme::ThemeResolver;

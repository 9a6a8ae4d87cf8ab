//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Page lifecycle state machine
//! - Theme preference
//! - Application settings
//! - Message types for the event system

pub mod flow;
pub mod messages;
pub mod settings;
pub mod shorten_error;
pub mod theme;

pub use flow::{ActionKind, AppAction, AppState, FinalState, InitialState, InvalidTransition, StateKind, transition};
pub use messages::{Completion, Message, SubmissionId};
pub use settings::AppSettings;
pub use shorten_error::ShortenError;
pub use theme::{THEME_KEY, ThemePreference};

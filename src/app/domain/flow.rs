//! Page lifecycle as a two-state machine.
//!
//! The page is either collecting a long URL (`initial`) or showing the short
//! URL it got back (`final`). [`transition`] is the only place that decides
//! how an [`AppAction`] moves between them; anything outside the table below
//! is an [`InvalidTransition`].
//!
//! | state   | action          | next                                   |
//! |---------|-----------------|----------------------------------------|
//! | initial | `SetUrl(u)`     | initial, `url = u`, `error = None`     |
//! | initial | `UrlSubmitted`  | initial, `error = None`, `loading`     |
//! | initial | `GotSlug(s)`    | final, `short_url = s`, `copied = false` |
//! | initial | `CreateFailed(e)` | initial, not loading, `error = e`    |
//! | final   | `BackClicked`   | fresh initial                          |

use std::fmt;

use thiserror::Error;

use super::shorten_error::ShortenError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialState {
    pub url: String,
    pub loading: bool,
    pub error: Option<ShortenError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalState {
    /// Absolute short URL, already resolved against the service origin.
    pub short_url: String,
    /// Seed for the copy control; the flow itself never sets it.
    pub copied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Initial(InitialState),
    Final(FinalState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Initial(InitialState::default())
    }
}

impl AppState {
    pub fn kind(&self) -> StateKind {
        match self {
            AppState::Initial(_) => StateKind::Initial,
            AppState::Final(_) => StateKind::Final,
        }
    }

    pub fn as_initial(&self) -> Option<&InitialState> {
        match self {
            AppState::Initial(s) => Some(s),
            AppState::Final(_) => None,
        }
    }

    pub fn as_final(&self) -> Option<&FinalState> {
        match self {
            AppState::Final(s) => Some(s),
            AppState::Initial(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    SetUrl(String),
    UrlSubmitted,
    /// Carries the absolute short URL.
    GotSlug(String),
    CreateFailed(ShortenError),
    BackClicked,
}

impl AppAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            AppAction::SetUrl(_) => ActionKind::SetUrl,
            AppAction::UrlSubmitted => ActionKind::UrlSubmitted,
            AppAction::GotSlug(_) => ActionKind::GotSlug,
            AppAction::CreateFailed(_) => ActionKind::CreateFailed,
            AppAction::BackClicked => ActionKind::BackClicked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Initial,
    Final,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Initial => f.write_str("initial"),
            StateKind::Final => f.write_str("final"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SetUrl,
    UrlSubmitted,
    GotSlug,
    CreateFailed,
    BackClicked,
}

impl ActionKind {
    /// The only state this action may be dispatched in.
    pub fn source_state(self) -> StateKind {
        match self {
            ActionKind::BackClicked => StateKind::Final,
            _ => StateKind::Initial,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::SetUrl => "SET_URL",
            ActionKind::UrlSubmitted => "URL_SUBMITTED",
            ActionKind::GotSlug => "GOT_SLUG",
            ActionKind::CreateFailed => "CREATE_FAILED",
            ActionKind::BackClicked => "BACK_CLICKED",
        };
        f.write_str(name)
    }
}

/// An action arrived while the page was in the wrong state.
///
/// This is a bug in whoever dispatched the action, never a user-facing
/// condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cannot handle action {action} while in state '{state}'")]
pub struct InvalidTransition {
    pub action: ActionKind,
    pub state: StateKind,
}

/// Compute the state that follows `action`. Never mutates `state`.
pub fn transition(state: &AppState, action: AppAction) -> Result<AppState, InvalidTransition> {
    match (state, action) {
        (AppState::Initial(current), AppAction::SetUrl(url)) => Ok(AppState::Initial(InitialState {
            url,
            error: None,
            ..current.clone()
        })),
        (AppState::Initial(current), AppAction::UrlSubmitted) => Ok(AppState::Initial(InitialState {
            error: None,
            loading: true,
            ..current.clone()
        })),
        (AppState::Initial(_), AppAction::GotSlug(short_url)) => Ok(AppState::Final(FinalState {
            short_url,
            copied: false,
        })),
        (AppState::Initial(current), AppAction::CreateFailed(error)) => Ok(AppState::Initial(InitialState {
            loading: false,
            error: Some(error),
            ..current.clone()
        })),
        (AppState::Final(_), AppAction::BackClicked) => Ok(AppState::default()),
        (state, action) => Err(InvalidTransition {
            action: action.kind(),
            state: state.kind(),
        }),
    }
}

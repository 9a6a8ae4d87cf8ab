use crate::app::domain::{AppAction, AppState, InvalidTransition, StateKind, transition};

/// What the presentation layer has to do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Same view, new contents.
    Refresh,
    /// The other view must be shown.
    Switch(StateKind),
}

/// Holds the page state; `dispatch` is the only way to change it.
#[derive(Debug, Default)]
pub struct FlowController {
    state: AppState,
}

impl FlowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply `action`, or report why it is not allowed. On error the state is untouched.
    pub fn try_dispatch(&mut self, action: AppAction) -> Result<Render, InvalidTransition> {
        let before = self.state.kind();
        let next = transition(&self.state, action)?;
        let after = next.kind();
        self.state = next;
        tracing::debug!(%before, %after, "page transition");

        Ok(if before == after {
            Render::Refresh
        } else {
            Render::Switch(after)
        })
    }

    /// Apply `action`.
    ///
    /// # Panics
    ///
    /// When `action` is not valid in the current state. That is always a bug
    /// in the caller's sequencing.
    pub fn dispatch(&mut self, action: AppAction) -> Render {
        match self.try_dispatch(action) {
            Ok(render) => render,
            Err(e) => {
                tracing::error!("{}", e);
                panic!("{}", e);
            }
        }
    }
}

//! Light/dark mode resolution.
//!
//! An explicit choice in storage always wins. Without one, the OS preference
//! decides, and when the OS cannot be asked the page is light. Toggling
//! writes an explicit choice so the next start honors it.

use crate::app::domain::{THEME_KEY, ThemePreference};
use crate::app::infrastructure::storage::KeyValueStore;

/// Capability-gated query of the OS color scheme.
pub trait SystemPreference {
    /// `Some(true)` for dark, `Some(false)` for light, `None` if unknown.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Whatever paints the light or dark palette.
pub trait ThemeSurface {
    fn set_dark_mode(&mut self, is_dark: bool);
}

pub struct ThemeResolver<S, Q> {
    store: S,
    system: Q,
    applied: Option<bool>,
}

impl<S: KeyValueStore, Q: SystemPreference> ThemeResolver<S, Q> {
    pub fn new(store: S, system: Q) -> Self {
        Self {
            store,
            system,
            applied: None,
        }
    }

    pub fn stored_preference(&self) -> Option<ThemePreference> {
        self.store
            .get(THEME_KEY)
            .map(|value| ThemePreference::from_sentinel(&value))
    }

    pub fn resolve_initial_theme(&self) -> bool {
        match self.stored_preference() {
            Some(pref) => pref.is_dark(),
            None => self.system.prefers_dark().unwrap_or(false),
        }
    }

    /// Paint `is_dark` onto `surface` unless that is already what it shows.
    pub fn apply_theme<T: ThemeSurface + ?Sized>(&mut self, surface: &mut T, is_dark: bool) {
        if self.applied == Some(is_dark) {
            return;
        }
        surface.set_dark_mode(is_dark);
        self.applied = Some(is_dark);
    }

    /// Flip `current` and remember the result as an explicit choice.
    pub fn toggle_theme(&mut self, current: bool) -> bool {
        let next = ThemePreference::from_dark(!current);
        if let Err(e) = self.store.set(THEME_KEY, next.as_sentinel()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        next.is_dark()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

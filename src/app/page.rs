use std::sync::Arc;

use url::Url;

use super::controllers::flow::{FlowController, Render};
use super::controllers::submission::{SubmissionTracker, spawn_submission};
use super::domain::{AppAction, AppState, Completion, Message, StateKind};
use super::infrastructure::storage::KeyValueStore;
use super::services::shortener::Shortener;
use super::services::theme::{SystemPreference, ThemeResolver, ThemeSurface};

/// The presentation side of the page.
pub trait View: ThemeSurface {
    fn render(&mut self, state: &AppState, render: Render);
    fn copy_to_clipboard(&mut self, text: &str);
    /// Mark the copy control as done.
    fn show_copied(&mut self);
}

/// Callback used by worker threads to post messages back to the UI loop.
pub type Notifier = Arc<dyn Fn(Message) + Send + Sync>;

/// Main application coordinator: turns messages into state machine actions,
/// runs submissions and keeps the theme in sync.
pub struct Page<S, Q> {
    flow: FlowController,
    submissions: SubmissionTracker,
    theme: ThemeResolver<S, Q>,
    dark_mode: bool,
    client: Arc<dyn Shortener>,
    origin: Url,
    notify: Notifier,
}

impl<S: KeyValueStore, Q: SystemPreference> Page<S, Q> {
    pub fn new(client: Arc<dyn Shortener>, origin: Url, theme: ThemeResolver<S, Q>, notify: Notifier) -> Self {
        let dark_mode = theme.resolve_initial_theme();
        Self {
            flow: FlowController::new(),
            submissions: SubmissionTracker::new(),
            theme,
            dark_mode,
            client,
            origin,
            notify,
        }
    }

    pub fn state(&self) -> &AppState {
        self.flow.state()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Paint the initial theme and view.
    pub fn start<V: View + ?Sized>(&mut self, view: &mut V) {
        self.theme.apply_theme(view, self.dark_mode);
        view.render(self.flow.state(), Render::Switch(self.flow.state().kind()));
    }

    /// Handle one message. Returns `false` once the page should close.
    pub fn handle<V: View + ?Sized>(&mut self, message: Message, view: &mut V) -> bool {
        match message {
            Message::UrlChanged(url) => self.dispatch(AppAction::SetUrl(url), view),
            Message::Submit => self.submit(view),
            Message::Completed(completion) => self.complete(completion, view),
            Message::CopyClicked => self.copy(view),
            Message::BackClicked => {
                self.submissions.abandon();
                self.dispatch(AppAction::BackClicked, view);
            }
            Message::ToggleTheme => {
                self.dark_mode = self.theme.toggle_theme(self.dark_mode);
                self.theme.apply_theme(view, self.dark_mode);
            }
            Message::Quit => return false,
        }
        true
    }

    fn dispatch<V: View + ?Sized>(&mut self, action: AppAction, view: &mut V) {
        let render = self.flow.dispatch(action);
        view.render(self.flow.state(), render);
    }

    fn submit<V: View + ?Sized>(&mut self, view: &mut V) {
        let long_url = match self.flow.state() {
            AppState::Initial(s) if s.loading => {
                tracing::debug!("submit ignored, request already in flight");
                return;
            }
            AppState::Initial(s) => s.url.trim().to_string(),
            AppState::Final(_) => {
                tracing::debug!("submit ignored outside the form");
                return;
            }
        };
        if long_url.is_empty() {
            return;
        }

        self.dispatch(AppAction::UrlSubmitted, view);
        let id = self.submissions.begin();
        tracing::info!(submission = id.0, %long_url, "creating short link");

        let notify = Arc::clone(&self.notify);
        spawn_submission(
            Arc::clone(&self.client),
            self.origin.clone(),
            id,
            long_url,
            move |completion| notify(Message::Completed(completion)),
        );
    }

    fn complete<V: View + ?Sized>(&mut self, completion: Completion, view: &mut V) {
        if !self.submissions.complete(completion.id) {
            tracing::debug!(submission = completion.id.0, "discarding stale completion");
            return;
        }
        let action = match completion.outcome {
            Ok(short_url) => AppAction::GotSlug(short_url),
            Err(error) => AppAction::CreateFailed(error),
        };
        self.dispatch(action, view);
    }

    fn copy<V: View + ?Sized>(&mut self, view: &mut V) {
        match self.flow.state() {
            AppState::Final(s) => {
                view.copy_to_clipboard(&s.short_url);
                view.show_copied();
            }
            AppState::Initial(_) => {
                tracing::warn!("copy requested while in state '{}'", StateKind::Initial);
            }
        }
    }
}

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ferris_link::app::controllers::flow::Render;
use ferris_link::app::domain::{AppState, Completion, Message, ShortenError, StateKind, SubmissionId, THEME_KEY};
use ferris_link::app::infrastructure::platform::NoSystemPreference;
use ferris_link::app::infrastructure::storage::{KeyValueStore, MemoryStore};
use ferris_link::app::page::{Notifier, Page, View};
use ferris_link::app::services::shortener::Shortener;
use ferris_link::app::services::theme::{ThemeResolver, ThemeSurface};
use url::Url;

struct FakeShortener {
    result: Result<String, ShortenError>,
    calls: Mutex<Vec<String>>,
}

impl FakeShortener {
    fn new(result: Result<String, ShortenError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: Mutex::new(Vec::new()),
        })
    }
}

impl Shortener for FakeShortener {
    fn create_short_url(&self, long_url: &str) -> Result<String, ShortenError> {
        self.calls.lock().unwrap().push(long_url.to_string());
        self.result.clone()
    }
}

#[derive(Default)]
struct RecordingView {
    renders: Vec<(AppState, Render)>,
    dark: Vec<bool>,
    clipboard: Option<String>,
    copied: bool,
}

impl ThemeSurface for RecordingView {
    fn set_dark_mode(&mut self, is_dark: bool) {
        self.dark.push(is_dark);
    }
}

impl View for RecordingView {
    fn render(&mut self, state: &AppState, render: Render) {
        self.renders.push((state.clone(), render));
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn show_copied(&mut self) {
        self.copied = true;
    }
}

type TestPage = Page<MemoryStore, NoSystemPreference>;

fn page_with(client: Arc<FakeShortener>, store: MemoryStore) -> (TestPage, Receiver<Message>) {
    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);
    let notify: Notifier = Arc::new(move |m| {
        let _ = tx.lock().unwrap().send(m);
    });
    let origin = Url::parse("http://localhost:3000").unwrap();
    let theme = ThemeResolver::new(store, NoSystemPreference);
    (Page::new(client, origin, theme, notify), rx)
}

fn next_message(rx: &Receiver<Message>) -> Message {
    rx.recv_timeout(Duration::from_secs(5)).expect("worker never answered")
}

#[test]
fn submit_then_result_then_back() {
    let client = FakeShortener::new(Ok("/abc123".to_string()));
    let (mut page, rx) = page_with(client.clone(), MemoryStore::new());
    let mut view = RecordingView::default();
    page.start(&mut view);

    assert!(page.handle(Message::UrlChanged("example.com".to_string()), &mut view));
    assert!(page.handle(Message::Submit, &mut view));
    assert!(page.state().as_initial().unwrap().loading);

    let completion = next_message(&rx);
    page.handle(completion, &mut view);

    let result = page.state().as_final().unwrap();
    assert_eq!(result.short_url, "http://localhost:3000/abc123");
    assert!(!result.copied);
    assert_eq!(view.renders.last().unwrap().1, Render::Switch(StateKind::Final));
    assert_eq!(*client.calls.lock().unwrap(), vec!["example.com".to_string()]);

    page.handle(Message::BackClicked, &mut view);
    let fresh = page.state().as_initial().unwrap();
    assert_eq!(fresh.url, "");
    assert!(fresh.error.is_none());
    assert!(!fresh.loading);
}

#[test]
fn failure_keeps_form_and_edit_clears_error() {
    let client = FakeShortener::new(Err(ShortenError::Service { status: 500 }));
    let (mut page, rx) = page_with(client, MemoryStore::new());
    let mut view = RecordingView::default();
    page.start(&mut view);

    page.handle(Message::UrlChanged("example.com".to_string()), &mut view);
    page.handle(Message::Submit, &mut view);
    let completion = next_message(&rx);
    page.handle(completion, &mut view);

    let s = page.state().as_initial().unwrap();
    assert!(!s.loading);
    assert_eq!(s.error, Some(ShortenError::Service { status: 500 }));
    assert_eq!(s.url, "example.com");

    page.handle(Message::UrlChanged("example.org".to_string()), &mut view);
    assert!(page.state().as_initial().unwrap().error.is_none());
}

#[test]
fn blank_and_duplicate_submits_are_ignored() {
    let client = FakeShortener::new(Ok("/abc123".to_string()));
    let (mut page, rx) = page_with(client.clone(), MemoryStore::new());
    let mut view = RecordingView::default();

    page.handle(Message::UrlChanged("   ".to_string()), &mut view);
    page.handle(Message::Submit, &mut view);
    assert!(!page.state().as_initial().unwrap().loading);

    page.handle(Message::UrlChanged("example.com".to_string()), &mut view);
    page.handle(Message::Submit, &mut view);
    page.handle(Message::Submit, &mut view);

    let completion = next_message(&rx);
    page.handle(completion, &mut view);
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    assert_eq!(client.calls.lock().unwrap().len(), 1);
}

#[test]
fn stale_completion_is_discarded() {
    let client = FakeShortener::new(Ok("/abc123".to_string()));
    let (mut page, _rx) = page_with(client, MemoryStore::new());
    let mut view = RecordingView::default();

    page.handle(Message::UrlChanged("example.com".to_string()), &mut view);
    let before = page.state().clone();
    page.handle(
        Message::Completed(Completion {
            id: SubmissionId(42),
            outcome: Ok("http://localhost:3000/old".to_string()),
        }),
        &mut view,
    );
    assert_eq!(page.state(), &before);
}

#[test]
#[should_panic(expected = "Cannot handle action BACK_CLICKED while in state 'initial'")]
fn back_from_form_is_a_bug() {
    let client = FakeShortener::new(Ok("/abc123".to_string()));
    let (mut page, _rx) = page_with(client, MemoryStore::new());
    let mut view = RecordingView::default();
    page.handle(Message::BackClicked, &mut view);
}

#[test]
fn copy_puts_short_url_on_clipboard() {
    let client = FakeShortener::new(Ok("/abc123".to_string()));
    let (mut page, rx) = page_with(client, MemoryStore::new());
    let mut view = RecordingView::default();

    page.handle(Message::CopyClicked, &mut view);
    assert_eq!(view.clipboard, None);

    page.handle(Message::UrlChanged("example.com".to_string()), &mut view);
    page.handle(Message::Submit, &mut view);
    let completion = next_message(&rx);
    page.handle(completion, &mut view);
    page.handle(Message::CopyClicked, &mut view);

    assert_eq!(view.clipboard.as_deref(), Some("http://localhost:3000/abc123"));
    assert!(view.copied);
}

#[test]
fn toggle_theme_persists_and_repaints() {
    let client = FakeShortener::new(Ok("/abc123".to_string()));
    let (mut page, _rx) = page_with(client, MemoryStore::with_entry(THEME_KEY, "dark"));
    let mut view = RecordingView::default();

    assert!(page.dark_mode());
    page.start(&mut view);
    page.handle(Message::ToggleTheme, &mut view);
    page.handle(Message::ToggleTheme, &mut view);

    assert!(page.dark_mode());
    assert_eq!(view.dark, vec![true, false, true]);
}

#[test]
fn toggle_theme_writes_sentinel() {
    let mut resolver = ThemeResolver::new(MemoryStore::new(), NoSystemPreference);
    assert!(!resolver.resolve_initial_theme());
    let dark = resolver.toggle_theme(false);
    assert!(dark);
    assert_eq!(resolver.store().get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn quit_stops_the_loop() {
    let client = FakeShortener::new(Ok("/abc123".to_string()));
    let (mut page, _rx) = page_with(client, MemoryStore::new());
    let mut view = RecordingView::default();
    assert!(!page.handle(Message::Quit, &mut view));
}

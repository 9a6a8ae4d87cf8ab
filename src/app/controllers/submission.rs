use std::sync::Arc;
use std::thread;

use url::Url;

use crate::app::domain::{Completion, SubmissionId};
use crate::app::services::shortener::{Shortener, resolve_short_url};

/// Tracks the one shortening request that is allowed to be in flight.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    next_id: u64,
    pending: Option<SubmissionId>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission; any earlier one becomes stale.
    pub fn begin(&mut self) -> SubmissionId {
        self.next_id += 1;
        let id = SubmissionId(self.next_id);
        self.pending = Some(id);
        id
    }

    pub fn pending(&self) -> Option<SubmissionId> {
        self.pending
    }

    /// True if `id` is the current submission. Clears it either way it matches.
    pub fn complete(&mut self, id: SubmissionId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Forget the pending submission; its answer will be discarded.
    pub fn abandon(&mut self) {
        self.pending = None;
    }
}

/// Run one shortening request on a worker thread.
///
/// `notify` is called exactly once with the absolute short URL or the error.
pub fn spawn_submission<F>(
    client: Arc<dyn Shortener>,
    origin: Url,
    id: SubmissionId,
    long_url: String,
    notify: F,
) -> thread::JoinHandle<()>
where
    F: FnOnce(Completion) + Send + 'static,
{
    thread::spawn(move || {
        let outcome = client
            .create_short_url(&long_url)
            .and_then(|slug| resolve_short_url(&slug, &origin));

        match &outcome {
            Ok(short_url) => tracing::info!(submission = id.0, %short_url, "short link created"),
            Err(e) => tracing::warn!(submission = id.0, "short link failed: {}", e),
        }

        notify(Completion { id, outcome });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::ShortenError;
    use std::sync::mpsc;

    struct FixedShortener(Result<String, ShortenError>);

    impl Shortener for FixedShortener {
        fn create_short_url(&self, _long_url: &str) -> Result<String, ShortenError> {
            self.0.clone()
        }
    }

    fn origin() -> Url {
        Url::parse("http://localhost:3000").unwrap()
    }

    #[test]
    fn test_tracker_ids_increase() {
        let mut tracker = SubmissionTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        assert!(b > a);
        assert_eq!(tracker.pending(), Some(b));
    }

    #[test]
    fn test_stale_completion_rejected() {
        let mut tracker = SubmissionTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.complete(first));
        assert!(tracker.complete(second));
        assert!(!tracker.complete(second));
    }

    #[test]
    fn test_abandon_discards_pending() {
        let mut tracker = SubmissionTracker::new();
        let id = tracker.begin();
        tracker.abandon();
        assert_eq!(tracker.pending(), None);
        assert!(!tracker.complete(id));
    }

    #[test]
    fn test_spawn_resolves_slug() {
        let (tx, rx) = mpsc::channel();
        let client = Arc::new(FixedShortener(Ok("/abc123".to_string())));
        spawn_submission(client, origin(), SubmissionId(1), "example.com".to_string(), move |c| {
            tx.send(c).unwrap();
        })
        .join()
        .unwrap();

        let completion = rx.recv().unwrap();
        assert_eq!(completion.id, SubmissionId(1));
        assert_eq!(completion.outcome, Ok("http://localhost:3000/abc123".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_spawn_reports_failure() {
        let (tx, rx) = mpsc::channel();
        let client = Arc::new(FixedShortener(Err(ShortenError::Service { status: 503 })));
        spawn_submission(client, origin(), SubmissionId(4), "example.com".to_string(), move |c| {
            tx.send(c).unwrap();
        })
        .join()
        .unwrap();

        let completion = rx.recv().unwrap();
        assert_eq!(completion.outcome, Err(ShortenError::Service { status: 503 }));
    }
}

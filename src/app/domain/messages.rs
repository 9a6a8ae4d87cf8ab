use super::shorten_error::ShortenError;

/// Identifies one shortening request so late answers can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

/// The single outcome of one shortening request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub id: SubmissionId,
    /// Absolute short URL on success.
    pub outcome: Result<String, ShortenError>,
}

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and worker threads send these; the loop in main handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Form
    UrlChanged(String),
    Submit,
    Completed(Completion),

    // Result
    CopyClicked,
    BackClicked,

    // Window
    ToggleTheme,
    Quit,
}

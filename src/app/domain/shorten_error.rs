use thiserror::Error;

/// Why a short link could not be created.
///
/// Kept cloneable so it can sit inside [`super::flow::InitialState`] until the
/// user edits the URL or submits again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortenError {
    #[error("Failed to reach shortening service: {0}")]
    Network(String),

    #[error("Shortening service returned status {status}")]
    Service { status: i32 },

    #[error("Invalid response from shortening service: {0}")]
    InvalidResponse(String),

    #[error("Cannot build short URL from '{slug}': {reason}")]
    InvalidShortUrl { slug: String, reason: String },
}

impl ShortenError {
    /// Text shown to the user, whatever went wrong.
    pub fn user_message(&self) -> &'static str {
        "Sorry, there was an error. Please try again."
    }
}

use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::domain::{AppSettings, ShortenError};

/// Anything that can turn a long URL into a slug.
pub trait Shortener: Send + Sync {
    /// Returns the slug (e.g. `/abc123`) for `long_url`.
    fn create_short_url(&self, long_url: &str) -> Result<String, ShortenError>;
}

#[derive(Debug, Serialize)]
struct CreateLinkRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateLinkResponse {
    slug: String,
}

/// Talks to the shortening service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpShortener {
    endpoint: String,
    timeout_secs: u64,
}

impl HttpShortener {
    pub fn new(service_url: &str, timeout_secs: u64) -> Self {
        Self {
            endpoint: format!("{}/api/links", service_url.trim_end_matches('/')),
            timeout_secs,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(&settings.service_url, settings.request_timeout_secs)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Shortener for HttpShortener {
    fn create_short_url(&self, long_url: &str) -> Result<String, ShortenError> {
        let request = minreq::post(&self.endpoint)
            .with_header("User-Agent", "FerrisLink")
            .with_header("Accept", "application/json")
            .with_timeout(self.timeout_secs)
            .with_json(&CreateLinkRequest { url: long_url })
            .map_err(|e| ShortenError::InvalidResponse(format!("Failed to encode request: {}", e)))?;

        let response = request
            .send()
            .map_err(|e| ShortenError::Network(e.to_string()))?;

        if !(200..300).contains(&response.status_code) {
            return Err(ShortenError::Service {
                status: response.status_code,
            });
        }

        let body: CreateLinkResponse = response
            .json()
            .map_err(|e| ShortenError::InvalidResponse(e.to_string()))?;

        if body.slug.trim().is_empty() {
            return Err(ShortenError::InvalidResponse("empty slug".to_string()));
        }

        Ok(body.slug)
    }
}

/// Resolve `slug` against `origin` the way a browser resolves a relative link.
pub fn resolve_short_url(slug: &str, origin: &Url) -> Result<String, ShortenError> {
    origin
        .join(slug)
        .map(String::from)
        .map_err(|e| ShortenError::InvalidShortUrl {
            slug: slug.to_string(),
            reason: e.to_string(),
        })
}

//! URL validation and cache-key normalization.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;

/// Validates a submitted URL and produces its normalized form.
///
/// Adds an `https://` prefix if no scheme is present, then requires a
/// well-formed http/https URL with a host. The fragment is stripped: it is
/// never sent on the wire, so two URLs differing only in fragment are the
/// same page and must share one cache entry. The parser also lowercases the
/// host, so the returned URL's string form is the canonical cache key.
///
/// Returns `None` if the URL is invalid, too long, or uses an unsupported
/// scheme.
pub fn validate_and_normalize_url(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() || raw.len() > MAX_URL_LENGTH {
        let preview: String = raw.chars().take(50).collect();
        warn!(
            "Rejecting URL with invalid length ({} chars): {preview}...",
            raw.len()
        );
        return None;
    }

    // Normalize: add https:// prefix when no scheme is present. Inputs that
    // already carry a scheme are parsed as-is so non-http schemes are
    // rejected below instead of being smuggled in as a bogus hostname.
    let prefixed = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    match Url::parse(&prefixed) {
        Ok(mut parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                warn!("Rejecting unsupported scheme for URL: {raw}");
                return None;
            }
            if parsed.host_str().is_none() {
                warn!("Rejecting URL without a host: {raw}");
                return None;
            }
            parsed.set_fragment(None);
            Some(parsed)
        }
        Err(_) => {
            warn!("Rejecting invalid URL: {raw}");
            None
        }
    }
}

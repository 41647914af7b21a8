//! CLI input validation
//!
//! All validation happens before any page is visited; a bad slug never
//! costs a network round trip.

use crate::{FugotchaError, Result};

/// Normalizes the page slug argument.
///
/// The slug is the part of the URL after `fugazi_live_series/`. Users may
/// paste the whole path (or the whole URL); only the final path segment is
/// kept.
pub fn normalize_slug(input: &str) -> Result<String> {
    let trimmed = input.trim().trim_end_matches('/');

    // rsplit always yields at least one item
    let slug = trimmed.rsplit('/').next().unwrap_or("");

    if slug.is_empty() {
        return Err(FugotchaError::Validation(
            "Page is a required parameter.".to_string(),
        ));
    }

    Ok(slug.to_string())
}

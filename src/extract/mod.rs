//! Field extraction
//!
//! Pulls the schema's values out of the current page through the driver:
//! - `extract` for fixed single-value fields (optional fields read as empty
//!   strings when absent; a missing required field aborts the page)
//! - `extract_all` for the variable-length track list
//! - `page_slug` for the derived first column

use crate::config::{FieldDescriptor, Presence, TrackSchema};
use crate::driver::PageDriver;
use crate::{FugotchaError, Result};
use url::Url;

/// Extracts one fixed field from the current page.
///
/// The text is trimmed by the driver; any configured boilerplate (e.g. the
/// "Fugazi Live Series" prefix on the release number) is removed and the
/// value re-trimmed.
pub fn extract<D: PageDriver>(driver: &D, field: &FieldDescriptor) -> Result<String> {
    match driver.query_one(field.locator) {
        Some(text) => {
            let value = match field.strip {
                Some(boilerplate) => text.replace(boilerplate, "").trim().to_string(),
                None => text,
            };
            Ok(value)
        }
        None => match field.presence {
            Presence::Optional => Ok(String::new()),
            Presence::Required => Err(FugotchaError::MissingRequiredField {
                field: field.label.to_string(),
                url: driver.current_url().to_string(),
            }),
        },
    }
}

/// Extracts the ordered track list from the current page.
///
/// The container must exist on every release page; zero entries inside it
/// is a normal outcome.
pub fn extract_all<D: PageDriver>(driver: &D, tracks: &TrackSchema) -> Result<Vec<String>> {
    if driver.query_one(tracks.container).is_none() {
        return Err(FugotchaError::MissingRequiredField {
            field: tracks.label.to_string(),
            url: driver.current_url().to_string(),
        });
    }

    Ok(driver.query_all(tracks.item))
}

/// Derives the page identifier from the current location: its last
/// non-empty path segment.
///
/// Never empty for a successfully loaded series page.
pub fn page_slug(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or_default()
        .to_string()
}

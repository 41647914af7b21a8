//! The fixed field schema for a Fugazi Live Series release page
//!
//! One release per page. Each record is: page slug, release ID, the fixed
//! detail columns in the order below, then a variable-length track tail.
//! The schema is defined once for this site and never changes at runtime.

use std::fmt;

/// An opaque query identifying zero or more elements in a rendered page
///
/// Locators are CSS selectors interpreted only by the page driver; the rest
/// of the pipeline never looks at markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator(&'static str);

impl Locator {
    pub const fn new(selector: &'static str) -> Self {
        Self(selector)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a missing field aborts the page or yields an empty column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absence is fatal for the page (and hence the session)
    Required,

    /// Absence is normal; the column is emitted as an empty string
    Optional,
}

/// Describes one fixed-arity field of the release page
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Column label in the CSV header
    pub label: &'static str,

    /// Where to find the field's text in the page
    pub locator: Locator,

    pub presence: Presence,

    /// Literal site boilerplate removed from the value before trimming,
    /// e.g. the "Fugazi Live Series" prefix on the release number.
    pub strip: Option<&'static str>,
}

/// Describes the variable-length track list at the end of each record
///
/// The container must exist on every release page; a container with zero
/// track entries is legal (some volumes have no listed tracks yet).
#[derive(Debug, Clone, Copy)]
pub struct TrackSchema {
    /// Sentinel header label marking the start of the track tail
    pub label: &'static str,

    pub container: Locator,
    pub item: Locator,
}

/// Header label for the derived page-slug column (not a queried field)
pub const PAGE_SLUG_LABEL: &str = "Page Slug";

/// The fixed-arity queried fields, in emit order
pub const FIELD_SCHEMA: &[FieldDescriptor] = &[
    FieldDescriptor {
        label: "Release ID",
        locator: Locator::new("#productInfo .releaseNumber"),
        presence: Presence::Required,
        strip: Some("Fugazi Live Series"),
    },
    FieldDescriptor {
        label: "Date",
        locator: Locator::new("#productInfo .showDate"),
        presence: Presence::Optional,
        strip: None,
    },
    FieldDescriptor {
        label: "Venue",
        locator: Locator::new("#productInfo .venue"),
        presence: Presence::Optional,
        strip: None,
    },
    FieldDescriptor {
        label: "City",
        locator: Locator::new("#productInfo .city"),
        presence: Presence::Optional,
        strip: None,
    },
    FieldDescriptor {
        label: "Country",
        locator: Locator::new("#productInfo .country"),
        presence: Presence::Optional,
        strip: None,
    },
    FieldDescriptor {
        label: "Door Price",
        locator: Locator::new("#productInfo .doorPrice"),
        presence: Presence::Optional,
        strip: None,
    },
    FieldDescriptor {
        label: "Attendance",
        locator: Locator::new("#productInfo .attendance"),
        presence: Presence::Optional,
        strip: None,
    },
    FieldDescriptor {
        label: "Recorded By",
        locator: Locator::new("#productInfo .recordedBy"),
        presence: Presence::Optional,
        strip: None,
    },
    FieldDescriptor {
        label: "Mastered By",
        locator: Locator::new("#productInfo .masteredBy"),
        presence: Presence::Optional,
        strip: None,
    },
];

/// The track list
pub const TRACKS: TrackSchema = TrackSchema {
    label: "Tracks =>",
    container: Locator::new(".mp3_list"),
    item: Locator::new(".mp3_list .track_name"),
};

/// The "next page" control
pub const NEXT_PAGE: Locator = Locator::new("#nextButton a");

/// The full header row: slug, fixed labels, then the track-tail sentinel.
pub fn header_labels() -> Vec<&'static str> {
    let mut labels = Vec::with_capacity(FIELD_SCHEMA.len() + 2);
    labels.push(PAGE_SLUG_LABEL);
    labels.extend(FIELD_SCHEMA.iter().map(|f| f.label));
    labels.push(TRACKS.label);
    labels
}

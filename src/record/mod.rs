//! In-memory records
//!
//! A `Record` is one page's worth of ordered column values: slug, the fixed
//! fields in schema order, then the track tail. No escaping happens here;
//! that is the CSV encoder's job, which keeps records independent of the
//! output format.

/// Ordered column values for one visited page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record(Vec<String>);

impl Record {
    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Assembles one record: page slug, each fixed field value in schema order,
/// then every track. Field values are already normalized (absent optionals
/// arrive as empty strings), so this never fails.
pub fn build(page_slug: String, fields: Vec<String>, tracks: Vec<String>) -> Record {
    let mut values = Vec::with_capacity(1 + fields.len() + tracks.len());
    values.push(page_slug);
    values.extend(fields);
    values.extend(tracks);
    Record(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_order_is_slug_fields_tracks() {
        let record = build(
            "p1".to_string(),
            vec!["20XXX".to_string(), "".to_string(), "Fort Reno".to_string()],
            vec!["Waiting Room".to_string(), "Bad Mouth".to_string()],
        );
        assert_eq!(
            record.values(),
            ["p1", "20XXX", "", "Fort Reno", "Waiting Room", "Bad Mouth"]
        );
        assert_eq!(record.len(), 6);
    }

    #[test]
    fn test_empty_track_tail_keeps_fixed_columns() {
        let record = build("p1".to_string(), vec!["20XXX".to_string()], vec![]);
        assert_eq!(record.values(), ["p1", "20XXX"]);
    }

    #[test]
    fn test_values_are_not_escaped_here() {
        let record = build("p1".to_string(), vec![r#"say "go""#.to_string()], vec![]);
        assert_eq!(record.values()[1], r#"say "go""#);
    }
}

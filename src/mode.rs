use serde::Serialize;

use crate::splitter::{split_by_max_length, split_by_segment_count};

/// Segmentation policy selected by the caller
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SplitMode {
    /// Bound each segment's character length
    MaxLength { max_len: usize },
    /// Produce a fixed number of segments
    SegmentCount { count: usize },
}

impl SplitMode {
    /// Run the selected policy over the input text
    pub fn split(&self, text: &str) -> Vec<String> {
        match *self {
            SplitMode::MaxLength { max_len } => split_by_max_length(text, max_len),
            SplitMode::SegmentCount { count } => split_by_segment_count(text, count),
        }
    }

    /// Short label for log lines
    pub fn label(&self) -> String {
        match *self {
            SplitMode::MaxLength { max_len } => format!("max {} chars per segment", max_len),
            SplitMode::SegmentCount { count } => format!("exactly {} segments", count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_dispatches_to_matching_splitter() {
        let text = "a\nb\nc\nd\ne";

        let by_count = SplitMode::SegmentCount { count: 2 }.split(text);
        assert_eq!(by_count.len(), 2);

        let by_length = SplitMode::MaxLength { max_len: 4 }.split(text);
        assert_eq!(by_length, split_by_max_length(text, 4));
    }

    #[test]
    fn mode_serializes_with_policy_tag() {
        let json = serde_json::to_string(&SplitMode::MaxLength { max_len: 1000 }).unwrap();
        assert_eq!(json, r#"{"policy":"max_length","max_len":1000}"#);

        let json = serde_json::to_string(&SplitMode::SegmentCount { count: 5 }).unwrap();
        assert_eq!(json, r#"{"policy":"segment_count","count":5}"#);
    }
}

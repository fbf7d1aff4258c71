mod header;
mod segmenter;


pub use header::add_segment_header;
pub use segmenter::{split_by_max_length, split_by_segment_count};

/// Preferred cut point: a line of exactly 80 dashes
pub const SEPARATOR_LINE: &str =
    "--------------------------------------------------------------------------------";

/// Default maximum characters per segment
pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 1000;

/// Default number of segments
pub const DEFAULT_SEGMENT_COUNT: usize = 5;

/// A line counts as a separator iff trimming surrounding whitespace leaves
/// exactly the 80-dash literal
pub fn is_separator_line(line: &str) -> bool {
    line.trim() == SEPARATOR_LINE
}

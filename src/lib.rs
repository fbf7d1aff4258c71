// Public API exports
pub mod input;
pub mod mode;
pub mod report;
pub mod splitter;

// Re-export main types for convenience
pub use input::{read_input, InputError, InputSource, DEFAULT_MAX_INPUT_BYTES};

pub use mode::SplitMode;

pub use report::{hash_text, write_parts, RunReport, SegmentStats};

pub use splitter::{
    add_segment_header, is_separator_line, split_by_max_length, split_by_segment_count,
    DEFAULT_MAX_SEGMENT_LENGTH, DEFAULT_SEGMENT_COUNT, SEPARATOR_LINE,
};

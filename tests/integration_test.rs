//! Integration tests for smartsplit
//!
//! Drives the full pipeline: load text, segment it, report on it, write parts.

use std::fs;

use smartsplit::{
    add_segment_header, read_input, write_parts, InputSource, RunReport, SplitMode,
    DEFAULT_MAX_INPUT_BYTES, SEPARATOR_LINE,
};

/// A paste that looks like the real input: blocks of file content divided by
/// separator lines
fn sample_paste() -> String {
    let mut text = String::new();
    for file in 1..=4 {
        for line in 1..=10 {
            text.push_str(&format!("file {} line {}\n", file, line));
        }
        text.push_str(SEPARATOR_LINE);
        text.push('\n');
    }
    text
}

#[test]
fn file_to_parts_round_trip() {
    let dir = std::env::temp_dir().join("smartsplit_integration");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let input_path = dir.join("paste.txt");
    let text = sample_paste();
    fs::write(&input_path, &text).unwrap();

    // Load through the input module
    let source = InputSource::from_arg(input_path.to_str().unwrap());
    let loaded = read_input(&source, DEFAULT_MAX_INPUT_BYTES).unwrap();
    assert_eq!(loaded, text);

    // Segment into an exact part count
    let mode = SplitMode::SegmentCount { count: 4 };
    let segments = mode.split(&loaded);
    assert_eq!(segments.len(), 4);

    // Write parts and check them back
    let out_dir = dir.join("parts");
    let report = RunReport::new(&loaded, mode, &segments);
    write_parts(&out_dir, &report, &segments, false).unwrap();

    let mut rebuilt = String::new();
    for index in 1..=4 {
        rebuilt.push_str(&fs::read_to_string(out_dir.join(format!("part_{:02}.txt", index))).unwrap());
    }
    assert_eq!(rebuilt, format!("{}\n", text));

    assert!(out_dir.join("manifest.json").exists());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn max_length_mode_respects_separator_blocks() {
    let text = sample_paste();

    // Each block is ~220 chars, so a 200-char budget forces a cut exactly at
    // every separator line
    let segments = SplitMode::MaxLength { max_len: 200 }.split(&text);

    assert!(segments.len() > 1);
    for segment in &segments[..segments.len() - 1] {
        assert!(
            segment.ends_with(&format!("{}\n", SEPARATOR_LINE)),
            "expected segment to close on a separator"
        );
    }
}

#[test]
fn headered_parts_carry_position_and_final_marker() {
    let text = sample_paste();
    let segments = SplitMode::SegmentCount { count: 3 }.split(&text);
    let total = segments.len();

    let stamped: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| add_segment_header(segment, index, total))
        .collect();

    assert!(stamped[0].starts_with("*** Part 1 of 3 ***\n\n"));
    assert!(stamped[1].starts_with("*** Part 2 of 3 ***\n\n"));
    assert!(stamped[2].starts_with("*** Part 3 of 3 - Final ***\n\n"));
}

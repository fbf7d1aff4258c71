use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::mode::SplitMode;
use crate::splitter::{add_segment_header, is_separator_line};

/// Everything a consumer needs to know about one segmentation run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generator: String,
    pub created_at: String,
    pub mode: SplitMode,
    pub source_hash: String,
    pub input_chars: usize,
    pub segment_count: usize,
    pub segments: Vec<SegmentStats>,
}

/// Per-segment shape summary
#[derive(Debug, Serialize)]
pub struct SegmentStats {
    pub index: usize,
    pub chars: usize,
    pub lines: usize,
    pub ends_on_separator: bool,
}

/// SHA256 of the input text, so consumers can tell which source a set of
/// parts was produced from
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

impl RunReport {
    /// Build a report describing one run over `text`
    pub fn new(text: &str, mode: SplitMode, segments: &[String]) -> Self {
        let stats = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| SegmentStats {
                index,
                chars: segment.chars().count(),
                lines: segment.matches('\n').count(),
                ends_on_separator: segment
                    .lines()
                    .last()
                    .map(is_separator_line)
                    .unwrap_or(false),
            })
            .collect();

        RunReport {
            generator: format!("smartsplit v{}", env!("CARGO_PKG_VERSION")),
            created_at: Utc::now().to_rfc3339(),
            mode,
            source_hash: hash_text(text),
            input_chars: text.chars().count(),
            segment_count: segments.len(),
            segments: stats,
        }
    }
}

/// Write each segment as `part_NN.txt` plus a `manifest.json` describing the
/// run. Headers are stamped into the part files when `with_headers` is set.
pub fn write_parts(
    dir: &Path,
    report: &RunReport,
    segments: &[String],
    with_headers: bool,
) -> Result<()> {
    fs::create_dir_all(dir)
        .context(format!("Failed to create output directory: {}", dir.display()))?;

    let total = segments.len();
    for (index, segment) in segments.iter().enumerate() {
        let path = dir.join(format!("part_{:02}.txt", index + 1));
        let contents = if with_headers {
            add_segment_header(segment, index, total)
        } else {
            segment.clone()
        };
        fs::write(&path, contents)
            .context(format!("Failed to write part file: {}", path.display()))?;
    }

    let manifest_path = dir.join("manifest.json");
    let manifest = serde_json::to_string_pretty(report)
        .context("Failed to serialize manifest")?;
    fs::write(&manifest_path, manifest)
        .context(format!("Failed to write {}", manifest_path.display()))?;

    eprintln!(
        "[report] ✓ Wrote {} part files + manifest.json to {}",
        total,
        dir.display()
    );

    Ok(())
}

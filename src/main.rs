use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use smartsplit::{
    add_segment_header, read_input, write_parts, InputSource, RunReport, SplitMode,
    DEFAULT_MAX_INPUT_BYTES, DEFAULT_MAX_SEGMENT_LENGTH,
};

/// Split a large block of text into ordered segments, preferring cuts on
/// 80-dash separator lines
#[derive(Parser, Debug)]
#[command(name = "smartsplit", version, about)]
struct Cli {
    /// Input file, or `-` to read from stdin
    #[arg(default_value = "-")]
    input: String,

    /// Maximum characters per segment (the default policy)
    #[arg(short = 'm', long, value_name = "CHARS", conflicts_with = "segments")]
    max_length: Option<usize>,

    /// Produce exactly this many segments instead
    #[arg(short = 'n', long, value_name = "COUNT")]
    segments: Option<usize>,

    /// Stamp every emitted segment with a "*** Part i of N ***" header
    #[arg(long)]
    headers: bool,

    /// Print only the given part (1-based)
    #[arg(short = 'p', long, value_name = "K")]
    part: Option<usize>,

    /// Print a JSON report of the run instead of segment text
    #[arg(long, conflicts_with = "part")]
    json: bool,

    /// Write part_NN.txt files and a manifest.json into this directory
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Refuse inputs larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    max_input_bytes: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = match cli.segments {
        Some(count) => SplitMode::SegmentCount { count },
        None => SplitMode::MaxLength {
            max_len: cli.max_length.unwrap_or(DEFAULT_MAX_SEGMENT_LENGTH),
        },
    };

    let source = InputSource::from_arg(&cli.input);
    let text =
        read_input(&source, cli.max_input_bytes).context("Failed to load input text")?;
    eprintln!("[split] Loaded {} bytes from {}", text.len(), source);

    let segments = mode.split(&text);
    eprintln!(
        "[split] ✓ Produced {} segments ({})",
        segments.len(),
        mode.label()
    );

    if segments.is_empty() {
        eprintln!("[split] Input was empty, nothing to emit");
        return Ok(());
    }

    let report = RunReport::new(&text, mode, &segments);

    if let Some(dir) = &cli.output_dir {
        return write_parts(dir, &report, &segments, cli.headers);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    let total = segments.len();
    match cli.part {
        Some(part) => {
            if part == 0 || part > total {
                bail!("Part {} is out of range (this run produced 1..={})", part, total);
            }
            emit(&segments[part - 1], part - 1, total, cli.headers);
        }
        None => {
            for (index, segment) in segments.iter().enumerate() {
                emit(segment, index, total, cli.headers);
            }
        }
    }

    Ok(())
}

/// Print one segment to stdout, stamped when headers are requested
fn emit(segment: &str, index: usize, total: usize, with_header: bool) {
    if with_header {
        print!("{}", add_segment_header(segment, index, total));
    } else {
        print!("{}", segment);
    }
}

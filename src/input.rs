use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;

/// Default cap on input size
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 64 * 1024 * 1024; // 64 MB

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    ReadFailed(String),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Input too large: {size} bytes (max: {max})")]
    TooLarge { size: u64, max: u64 },
}

/// Where the text to split comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the whole input text, enforcing the size cap
pub fn read_input(source: &InputSource, max_bytes: u64) -> Result<String, InputError> {
    let bytes = match source {
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .take(max_bytes.saturating_add(1))
                .read_to_end(&mut buffer)
                .map_err(|e| InputError::ReadFailed(e.to_string()))?;

            if buffer.len() as u64 > max_bytes {
                return Err(InputError::TooLarge {
                    size: buffer.len() as u64,
                    max: max_bytes,
                });
            }
            buffer
        }
        InputSource::File(path) => {
            let size = fs::metadata(path)
                .map_err(|e| InputError::ReadFailed(format!("{}: {}", path.display(), e)))?
                .len();

            if size > max_bytes {
                return Err(InputError::TooLarge {
                    size,
                    max: max_bytes,
                });
            }

            fs::read(path)
                .map_err(|e| InputError::ReadFailed(format!("{}: {}", path.display(), e)))?
        }
    };

    String::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8(e.to_string()))
}

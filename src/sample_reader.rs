use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

/// One parsed run: iteration indices and their elapsed times, in file order.
///
/// The two vectors grow in lock-step, so index `i` in both refers to the
/// same source line.
#[derive(Debug, Default)]
pub struct Samples {
    pub iterations: Vec<i64>,
    pub times: Vec<i64>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    fn push(&mut self, iteration: i64, time: i64) {
        self.iterations.push(iteration);
        self.times.push(time);
    }
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("could not open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("read failed on line {line}: {source}")]
    Read { line: usize, source: std::io::Error },

    #[error("line {line}: expected 2 values, found {found}")]
    TokenCount { line: usize, found: usize },

    #[error("line {line}: not an integer: {source}")]
    BadInteger { line: usize, source: ParseIntError },
}

/// # Sample file reader
/// One sample per line, two whitespace-separated base-10 integers.
/// Reading stops at end of file or at the first blank line, so anything
/// after a blank line is silently dropped. That truncation is the contract
/// inherited from the original script and is kept as-is.
///
/// * `path` - The location of the sample file
pub fn read(path: &Path) -> Result<Samples, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut samples = Samples::default();
    let mut buf = String::new();
    let mut line_no = 0;

    loop {
        line_no += 1;
        buf.clear();
        reader.read_line(&mut buf).map_err(|source| ReadError::Read {
            line: line_no,
            source,
        })?;

        let line = buf.trim();
        if line.is_empty() {
            // End of file reads as an empty string too, so this covers both.
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(ReadError::TokenCount {
                line: line_no,
                found: tokens.len(),
            });
        }

        let iteration = parse_int(tokens[0], line_no)?;
        let time = parse_int(tokens[1], line_no)?;
        samples.push(iteration, time);
    }

    Ok(samples)
}

fn parse_int(token: &str, line: usize) -> Result<i64, ReadError> {
    token
        .parse()
        .map_err(|source| ReadError::BadInteger { line, source })
}

//! Input URL loading from a file and/or standard input.
//!
//! Lines are trimmed but otherwise passed through as-is: no comment syntax,
//! no blank-line filtering, no URL validation. Malformed entries fail later,
//! at fetch time.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read URLs from {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("failed to read URLs from stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// One trimmed entry per line, in order.
///
/// Lines that are not valid UTF-8 are converted lossily and kept; only real
/// I/O failures are errors.
pub fn read_urls<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|l| String::from_utf8_lossy(&l).trim().to_string()))
        .collect()
}

pub fn read_urls_from_file(path: &Path) -> Result<Vec<String>, InputError> {
    let file_err = |source| InputError::File {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(file_err)?;
    read_urls(BufReader::new(file)).map_err(file_err)
}

/// Lines from `path` when given; falls back to `stdin` when that yields nothing.
pub fn load_urls<R: BufRead>(path: Option<&Path>, stdin: R) -> Result<Vec<String>, InputError> {
    let mut urls = match path {
        Some(p) => read_urls_from_file(p)?,
        None => Vec::new(),
    };
    if urls.is_empty() {
        urls = read_urls(stdin).map_err(InputError::Stdin)?;
    }
    tracing::debug!(count = urls.len(), from_file = path.is_some(), "loaded input urls");
    Ok(urls)
}

//! Printing of endpoint groups and per-URL error lines.

use std::io::{self, Write};

use crate::fetch::FetchError;

/// Sinks for endpoint lines and error lines. Owned by the pool's collector,
/// so writes from different workers never interleave.
#[derive(Debug)]
pub struct Output<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> Output<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// One endpoint per line, then flush so the group lands as a unit.
    pub fn endpoints(&mut self, endpoints: &[String]) -> io::Result<()> {
        for endpoint in endpoints {
            writeln!(self.out, "{}", endpoint)?;
        }
        self.out.flush()
    }

    pub fn failure(&mut self, url: &str, error: &FetchError) -> io::Result<()> {
        writeln!(self.err, "failed to extract URLs for {}: {}", url, error)?;
        self.err.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_one_per_line() {
        let mut output = Output::new(Vec::new(), Vec::new());
        output
            .endpoints(&["/a/".to_string(), "http://b.test/".to_string()])
            .unwrap();
        let (out, err) = output.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "/a/\nhttp://b.test/\n");
        assert!(err.is_empty());
    }

    #[test]
    fn failure_names_url_and_cause() {
        let mut output = Output::new(Vec::new(), Vec::new());
        let e = FetchError::Request(curl::Error::new(7));
        output.failure("http://down.test/", &e).unwrap();
        let (out, err) = output.into_inner();
        let err = String::from_utf8(err).unwrap();
        assert!(out.is_empty());
        assert!(err.starts_with(
            "failed to extract URLs for http://down.test/: failed to make HTTP request"
        ));
        assert!(err.ends_with('\n'));
        assert_eq!(err.lines().count(), 1);
    }
}

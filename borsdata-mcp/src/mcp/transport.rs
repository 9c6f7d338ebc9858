//! Newline-delimited message transport.
//!
//! One JSON message per line in both directions. stdout is reserved for
//! protocol frames; logs go to stderr.

use std::io;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Reads lines from `R` and writes JSON frames to `W`.
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

impl LineTransport<BufReader<Stdin>, Stdout> {
    /// Transport over the process' stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Wrap an arbitrary reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Next line without its terminator, or `None` at end of input.
    ///
    /// # Errors
    /// Returns any I/O error from the reader.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Serialize `message` on a single line and flush.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub async fn write<T: Serialize>(&mut self, message: &T) -> io::Result<()> {
        let mut frame = serde_json::to_vec(message).map_err(io::Error::other)?;
        frame.push(b'\n');
        self.writer.write_all(&frame).await?;
        self.writer.flush().await
    }

    /// Give back the writer, e.g. to inspect what was sent.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn reads_lines_and_strips_terminators() {
        let input: &[u8] = b"first\r\nsecond\n\nlast";
        let mut t = LineTransport::new(input, Vec::new());
        assert_eq!(t.read_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(t.read_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(t.read_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(t.read_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(t.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn frames_are_single_lines() {
        let mut t = LineTransport::new(&b""[..], Vec::new());
        t.write(&json!({"text": "a\nb", "nested": {"k": [1, 2]}}))
            .await
            .unwrap();
        let out = String::from_utf8(t.into_writer()).unwrap();
        assert!(out.ends_with('\n'));
        assert_eq!(out.matches('\n').count(), 1);
    }
}

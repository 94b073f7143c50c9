//! Streaming puzzle loader
//!
//! Reads whitespace/line-delimited integer tokens from any `BufRead` source
//! and yields one bordered grid per puzzle until the stream is exhausted.
//! The on-disk format has no corner values; they are synthesized as 0.

use std::io::BufRead;

use log::{debug, trace};

use crate::puzzle::grid::{Grid, MalformedInput};

/// Streaming reader yielding one `Grid` per puzzle from a token stream.
///
/// Puzzles are read positionally: each consumes exactly
/// `(n + 2)^2 - 4` tokens. A parse failure therefore corrupts the offsets of
/// everything that follows, which is why errors are not recoverable
/// mid-stream.
pub struct PuzzleReader<R: BufRead> {
    reader: R,
    n: usize,
    line_buffer: String,
    // Tokens of the current line not yet consumed, in order.
    pending: Vec<String>,
    pending_index: usize,
    puzzles_read: usize,
}

impl<R: BufRead> PuzzleReader<R> {
    /// Create a reader for puzzles of interior size `n`.
    pub fn new(reader: R, n: usize) -> Self {
        Self {
            reader,
            n,
            line_buffer: String::new(),
            pending: Vec::new(),
            pending_index: 0,
            puzzles_read: 0,
        }
    }

    /// Number of tokens a single puzzle occupies in the stream.
    pub fn tokens_per_puzzle(&self) -> usize {
        let bordered = self.n + 2;
        bordered * bordered - 4
    }

    /// Next raw token, refilling from the underlying reader as needed.
    /// Returns `None` at end of input.
    fn next_token(&mut self) -> Option<String> {
        loop {
            if self.pending_index < self.pending.len() {
                let token = self.pending[self.pending_index].clone();
                self.pending_index += 1;
                return Some(token);
            }

            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.pending = self
                        .line_buffer
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect();
                    self.pending_index = 0;
                }
                Err(err) => {
                    // An I/O failure mid-stream is indistinguishable from
                    // truncation for the caller; stop yielding tokens.
                    debug!("read error in puzzle stream: {}", err);
                    return None;
                }
            }
        }
    }

    /// Read one full puzzle's worth of values. `None` if the stream is
    /// cleanly exhausted before the first token.
    fn read_puzzle(&mut self) -> Option<Result<Grid, MalformedInput>> {
        let expected = self.tokens_per_puzzle();
        let mut values = Vec::with_capacity(expected);

        while values.len() < expected {
            let token = match self.next_token() {
                Some(token) => token,
                None if values.is_empty() => return None,
                None => {
                    return Some(Err(MalformedInput::TruncatedPuzzle {
                        expected,
                        found: values.len(),
                    }))
                }
            };
            match token.parse::<u8>() {
                Ok(value) => values.push(value),
                Err(_) => return Some(Err(MalformedInput::BadToken { token })),
            }
        }

        self.puzzles_read += 1;
        trace!(
            "read puzzle #{} ({} tokens)",
            self.puzzles_read,
            expected
        );
        Some(Grid::from_flat(self.n, &values))
    }
}

impl<R: BufRead> Iterator for PuzzleReader<R> {
    type Item = Result<Grid, MalformedInput>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_puzzle()
    }
}

//! Whitespace-delimited token input.
//!
//! Values may arrive one per line or several on one line:
//!
//! ```text
//! "6\n3\n1\n"   →  "6", "3", "1"
//! "6 3 1\n"     →  "6", "3", "1"
//! "6\n\n 3 1"   →  "6", "3", "1"
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads whitespace-separated tokens from a buffered reader.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

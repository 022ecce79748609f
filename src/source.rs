//! Opening word lists and walking them one line at a time.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, trace, warn};

use crate::error::{DictionaryError, Result};
use crate::{LINE_TERMINATOR, LONGEST_WORD};

/// What the buffering queries do with a line longer than [`LONGEST_WORD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Stop the query with [`DictionaryError::WordTooLong`].
    #[default]
    Reject,
    /// Keep only the first `LONGEST_WORD` bytes of the line.
    Truncate,
    /// Drop the line as if it were not in the list.
    Skip,
}

/// Open `path` for a single buffered pass.
pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened dictionary {}", path.display());
    Ok(BufReader::new(file))
}

/// Line reader over a word list that reuses one small buffer.
///
/// Lines come back without their terminator. A final line without a
/// terminator is still a line; a trailing terminator does not add an empty
/// one. At most `LONGEST_WORD + 1` bytes of a line are ever held, however
/// long the line is.
pub(crate) struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: u64,
}

impl<R: BufRead> Lines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(LONGEST_WORD + 1),
            line_no: 0,
        }
    }

    /// Read one line, keeping its first `keep` bytes in `buf`. Returns the
    /// full length of the line, or `None` at end of input.
    fn fill(&mut self, keep: usize) -> Result<Option<usize>> {
        self.buf.clear();
        let mut length = 0usize;
        let mut started = false;

        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if chunk.is_empty() {
                break;
            }
            started = true;

            let (body, used, done) = match chunk.iter().position(|&b| b == LINE_TERMINATOR) {
                Some(end) => (&chunk[..end], end + 1, true),
                None => (chunk, chunk.len(), false),
            };
            let room = keep.saturating_sub(self.buf.len());
            self.buf.extend_from_slice(&body[..body.len().min(room)]);
            length += body.len();

            self.reader.consume(used);
            if done {
                break;
            }
        }

        if !started {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(length))
    }

    /// Length of the next line, without keeping its content.
    pub(crate) fn next_length(&mut self) -> Result<Option<usize>> {
        self.fill(0)
    }

    /// Next line with `policy` applied to anything over `LONGEST_WORD`.
    pub(crate) fn next_word(&mut self, policy: OverflowPolicy) -> Result<Option<&mut [u8]>> {
        loop {
            let length = match self.fill(LONGEST_WORD + 1)? {
                Some(length) => length,
                None => return Ok(None),
            };
            if length > LONGEST_WORD {
                trace!("Line {} is {} bytes long ({:?})", self.line_no, length, policy);
                match policy {
                    OverflowPolicy::Reject => {
                        return Err(DictionaryError::WordTooLong {
                            line: self.line_no,
                            length,
                        });
                    }
                    OverflowPolicy::Truncate => {
                        warn!("Truncating line {} to {} bytes", self.line_no, LONGEST_WORD);
                        self.buf.truncate(LONGEST_WORD);
                    }
                    OverflowPolicy::Skip => {
                        warn!("Skipping line {} ({} bytes)", self.line_no, length);
                        continue;
                    }
                }
            }
            return Ok(Some(self.buf.as_mut_slice()));
        }
    }
}

/// Call `f` with the length of every line, counting bytes between
/// terminators without keeping the line content around.
pub(crate) fn for_each_line_length<R, F>(mut reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize),
{
    let mut length = 0usize;
    let mut pending = false;

    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if chunk.is_empty() {
            break;
        }

        for &b in chunk {
            if b == LINE_TERMINATOR {
                f(length);
                length = 0;
                pending = false;
            } else {
                length += 1;
                pending = true;
            }
        }

        let consumed = chunk.len();
        reader.consume(consumed);
    }

    // unterminated last line
    if pending {
        f(length);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_lines(input: &str) -> Vec<String> {
        let mut lines = Lines::new(Cursor::new(input));
        let mut out = Vec::new();
        while let Some(line) = lines.next_word(OverflowPolicy::Reject).unwrap() {
            out.push(String::from_utf8(line.to_vec()).unwrap());
        }
        out
    }

    #[test]
    fn trailing_terminator_adds_no_line() {
        assert_eq!(collect_lines("cat\ndog\n"), vec!["cat", "dog"]);
        assert_eq!(collect_lines("cat\ndog"), vec!["cat", "dog"]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(collect_lines("\ncat\n\n"), vec!["", "cat", ""]);
        assert!(collect_lines("").is_empty());
    }

    #[test]
    fn line_split_across_small_chunks() {
        // an 8 byte buffer forces lines to span several fill_buf calls
        let reader = BufReader::with_capacity(8, Cursor::new("abcdefghijkl\nmn\n"));
        let mut lines = Lines::new(reader);
        assert_eq!(lines.next_word(OverflowPolicy::Reject).unwrap().unwrap(), b"abcdefghijkl");
        assert_eq!(lines.next_word(OverflowPolicy::Reject).unwrap().unwrap(), b"mn");
        assert!(lines.next_word(OverflowPolicy::Reject).unwrap().is_none());
    }

    #[test]
    fn long_line_is_measured_not_stored() {
        let long = "x".repeat(10_000);
        let mut lines = Lines::new(Cursor::new(format!("{long}\nab")));
        assert_eq!(lines.next_length().unwrap(), Some(10_000));
        assert!(lines.buf.is_empty());
        assert_eq!(lines.next_length().unwrap(), Some(2));
        assert_eq!(lines.next_length().unwrap(), None);
    }

    #[test]
    fn truncate_policy_holds_bounded_buffer() {
        let long = "x".repeat(10_000);
        let mut lines = Lines::new(Cursor::new(long));
        let word = lines.next_word(OverflowPolicy::Truncate).unwrap().unwrap();
        assert_eq!(word.len(), LONGEST_WORD);
        assert!(lines.buf.capacity() < 10_000);
    }

    #[test]
    fn lengths_without_final_terminator() {
        let mut lengths = Vec::new();
        for_each_line_length(Cursor::new("ab\n\nabcd"), |n| lengths.push(n)).unwrap();
        assert_eq!(lengths, vec![2, 0, 4]);
    }

    #[test]
    fn skip_policy_moves_past_long_lines() {
        let long = "x".repeat(LONGEST_WORD + 1);
        let input = format!("{long}\nok\n");
        let mut lines = Lines::new(Cursor::new(input));
        let word = lines.next_word(OverflowPolicy::Skip).unwrap().unwrap();
        assert_eq!(word, b"ok");
        assert!(lines.next_word(OverflowPolicy::Skip).unwrap().is_none());
    }

    #[test]
    fn reject_policy_reports_line_number() {
        let long = "x".repeat(LONGEST_WORD + 5);
        let input = format!("ok\n{long}\n");
        let mut lines = Lines::new(Cursor::new(input));
        lines.next_word(OverflowPolicy::Reject).unwrap();
        match lines.next_word(OverflowPolicy::Reject) {
            Err(DictionaryError::WordTooLong { line, length }) => {
                assert_eq!(line, 2);
                assert_eq!(length, LONGEST_WORD + 5);
            }
            other => panic!("unexpected result: {:?}", other.map(|w| w.map(|w| w.to_vec()))),
        }
    }
}

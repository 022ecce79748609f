//! The four dictionary queries.
//!
//! Every query makes one fresh pass over the word list. Nothing is indexed
//! or cached between calls, so a [`Dictionary`] is only a path plus the
//! settings used when scanning it.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{DictionaryError, Result};
use crate::normalize::{to_upper, to_upper_in_place};
use crate::source::{self, Lines, OverflowPolicy};
use crate::LONGEST_WORD;

/// Outcome of looking a word up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordStatus {
    /// The word is in the list
    Found,
    /// The word is not in the list
    NotFound,
}

impl WordStatus {
    /// `true` for [`WordStatus::Found`].
    pub fn is_found(self) -> bool {
        self == WordStatus::Found
    }
}

/// Summary of a word list.
///
/// `shortest` and `longest` are stored in a byte. Lengths above 255 wrap
/// modulo 256, so a 300 character line shows up as 44.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DictionaryInfo {
    pub shortest: u8,
    pub longest: u8,
    pub count: u64,
}

/// A word list on disk.
#[derive(Debug, Clone)]
pub struct Dictionary {
    path: PathBuf,
    overflow: OverflowPolicy,
}

impl Dictionary {
    /// Point at the word list at `path`. Nothing is opened until a query runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overflow: OverflowPolicy::default(),
        }
    }

    /// Builder form of [`Dictionary::set_overflow_policy`].
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// Choose how lines longer than [`LONGEST_WORD`] are handled.
    pub fn set_overflow_policy(&mut self, policy: OverflowPolicy) {
        self.overflow = policy;
    }

    /// Current overflow policy, [`OverflowPolicy::Reject`] unless changed.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Path of the word list.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count the words whose first letter is `letter`, ignoring case.
    pub fn words_starting_with(&self, letter: char) -> Result<u64> {
        let reader = source::open(&self.path)?;
        let count = words_starting_with_from_reader(reader, letter, self.overflow)?;
        debug!("{} words start with {:?} in {}", count, letter, self.path.display());
        Ok(count)
    }

    /// Look `word` up, ignoring case. Stops at the first match.
    pub fn spell_check(&self, word: &str) -> Result<WordStatus> {
        let reader = source::open(&self.path)?;
        let status = spell_check_from_reader(reader, word, self.overflow)?;
        debug!("{:?} is {:?} in {}", word, status, self.path.display());
        Ok(status)
    }

    /// Add the number of words of each length `0..=max_length` into
    /// `histogram`. Longer words are ignored.
    ///
    /// `histogram` is only ever incremented, so repeated calls accumulate.
    /// On error it is left exactly as it was.
    pub fn word_lengths(&self, histogram: &mut [u64], max_length: u8) -> Result<()> {
        check_histogram(histogram, max_length)?;
        let reader = source::open(&self.path)?;
        word_lengths_from_reader(reader, histogram, max_length)
    }

    /// Shortest and longest word length and the number of words.
    pub fn info(&self) -> Result<DictionaryInfo> {
        let reader = source::open(&self.path)?;
        let info = info_from_reader(reader)?;
        debug!("Summary of {}: {:?}", self.path.display(), info);
        Ok(info)
    }
}

/// [`Dictionary::words_starting_with`] over an already open reader.
pub fn words_starting_with_from_reader<R: BufRead>(
    reader: R,
    letter: char,
    policy: OverflowPolicy,
) -> Result<u64> {
    let mut encoded = [0u8; 4];
    let prefix = to_upper(letter.encode_utf8(&mut encoded)).into_bytes();

    let mut lines = Lines::new(reader);
    let mut count = 0u64;
    while let Some(word) = lines.next_word(policy)? {
        if to_upper_in_place(word).starts_with(&prefix) {
            count += 1;
        }
    }
    Ok(count)
}

/// [`Dictionary::spell_check`] over an already open reader.
pub fn spell_check_from_reader<R: BufRead>(
    reader: R,
    word: &str,
    policy: OverflowPolicy,
) -> Result<WordStatus> {
    let mut wanted = to_upper(word).into_bytes();
    if wanted.len() > LONGEST_WORD {
        match policy {
            OverflowPolicy::Truncate => wanted.truncate(LONGEST_WORD),
            // no stored word can be this long
            OverflowPolicy::Reject | OverflowPolicy::Skip => return Ok(WordStatus::NotFound),
        }
    }

    let mut lines = Lines::new(reader);
    while let Some(line) = lines.next_word(policy)? {
        if to_upper_in_place(line) == wanted.as_slice() {
            return Ok(WordStatus::Found);
        }
    }
    Ok(WordStatus::NotFound)
}

/// [`Dictionary::word_lengths`] over an already open reader. `histogram`
/// is unchanged if the read fails.
pub fn word_lengths_from_reader<R: BufRead>(
    reader: R,
    histogram: &mut [u64],
    max_length: u8,
) -> Result<()> {
    check_histogram(histogram, max_length)?;
    let max_length = usize::from(max_length);

    // the caller's histogram is only touched once the whole pass succeeded
    let mut counts = vec![0u64; max_length + 1];
    source::for_each_line_length(reader, |length| {
        if length <= max_length {
            counts[length] += 1;
        }
    })?;

    for (slot, count) in histogram.iter_mut().zip(counts) {
        *slot += count;
    }
    Ok(())
}

/// [`Dictionary::info`] over an already open reader.
pub fn info_from_reader<R: BufRead>(reader: R) -> Result<DictionaryInfo> {
    let mut lines = Lines::new(reader);
    let mut extremes: Option<(usize, usize)> = None;
    let mut count = 0u64;

    while let Some(length) = lines.next_length()? {
        extremes = Some(match extremes {
            None => (length, length),
            Some((shortest, longest)) => (
                if length < shortest { length } else { shortest },
                if length > longest { length } else { longest },
            ),
        });
        count += 1;
    }

    let (shortest, longest) = extremes.unwrap_or((0, 0));
    Ok(DictionaryInfo {
        // wraps modulo 256
        shortest: shortest as u8,
        longest: longest as u8,
        count,
    })
}

fn check_histogram(histogram: &[u64], max_length: u8) -> Result<()> {
    let required = usize::from(max_length) + 1;
    if histogram.len() < required {
        return Err(DictionaryError::HistogramTooSmall {
            required,
            actual: histogram.len(),
        });
    }
    Ok(())
}

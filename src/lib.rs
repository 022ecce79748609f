//! # Wordlist Query
//!
//! Queries over plain-text word lists, one word per line.
//!
//! Four questions can be asked of a list: is a word in it, how many words
//! start with a given letter, how many words there are of each length, and
//! what the shortest and longest lengths and the total count are. Matching
//! ignores ASCII case. Every query reads the list from the start; nothing is
//! kept between calls.

pub mod batch;
pub mod error;
pub mod normalize;
pub mod query;
pub mod source;

use std::path::Path;

pub use batch::ALPHABET;
pub use error::{DictionaryError, Result};
pub use normalize::{to_upper, to_upper_in_place, upper_byte};
pub use query::{
    info_from_reader, spell_check_from_reader, word_lengths_from_reader,
    words_starting_with_from_reader, Dictionary, DictionaryInfo, WordStatus,
};
pub use source::OverflowPolicy;

/// Longest word the buffering queries accept without applying an
/// [`OverflowPolicy`].
pub const LONGEST_WORD: usize = 50;

/// Byte that ends each word in a list.
///
/// Only `\n` is recognised. A `\r` before it is kept as part of the word,
/// so lists with CRLF line endings must be converted before querying:
/// `"cat\r"` does not match `"cat"`.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Count the words in `dictionary` starting with `letter`, ignoring case.
pub fn words_starting_with(dictionary: impl AsRef<Path>, letter: char) -> Result<u64> {
    Dictionary::new(dictionary.as_ref()).words_starting_with(letter)
}

/// Look `word` up in `dictionary`, ignoring case.
pub fn spell_check(dictionary: impl AsRef<Path>, word: &str) -> Result<WordStatus> {
    Dictionary::new(dictionary.as_ref()).spell_check(word)
}

/// Tally word lengths `0..=max_length` of `dictionary` into `histogram`.
pub fn word_lengths(
    dictionary: impl AsRef<Path>,
    histogram: &mut [u64],
    max_length: u8,
) -> Result<()> {
    Dictionary::new(dictionary.as_ref()).word_lengths(histogram, max_length)
}

/// Shortest and longest word length and word count of `dictionary`.
pub fn info(dictionary: impl AsRef<Path>) -> Result<DictionaryInfo> {
    Dictionary::new(dictionary.as_ref()).info()
}

//! Running many independent queries at once.
//!
//! Each item opens its own handle and makes its own pass, so the items can
//! be spread over rayon's pool without sharing anything.

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::query::{Dictionary, WordStatus};

/// Letters covered by [`Dictionary::letter_counts`], in index order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

impl Dictionary {
    /// Look up every word in `words`. Results come back in input order.
    pub fn spell_check_all<S>(&self, words: &[S]) -> Result<Vec<WordStatus>>
    where
        S: AsRef<str> + Sync,
    {
        let statuses: Vec<WordStatus> = words
            .par_iter()
            .map(|word| self.spell_check(word.as_ref()))
            .collect::<Result<_>>()?;

        let found = statuses.iter().filter(|s| s.is_found()).count();
        debug!("{} of {} words found in {}", found, words.len(), self.path().display());
        Ok(statuses)
    }

    /// Words starting with each letter `A` to `Z`; index 0 is `A`.
    pub fn letter_counts(&self) -> Result<[u64; 26]> {
        let counts: Vec<u64> = ALPHABET
            .par_iter()
            .map(|&letter| self.words_starting_with(letter))
            .collect::<Result<_>>()?;

        let mut table = [0u64; 26];
        table.copy_from_slice(&counts);
        Ok(table)
    }
}

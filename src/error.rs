//! Error types for dictionary queries.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while querying a word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list could not be opened.
    #[error("cannot open dictionary {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed after the word list was opened.
    #[error("I/O error while reading dictionary: {0}")]
    Read(#[from] io::Error),

    /// A line is longer than the supported word length.
    #[error("word on line {line} is {length} characters long, longest supported is {}", crate::LONGEST_WORD)]
    WordTooLong { line: u64, length: usize },

    /// The caller's histogram cannot hold every requested length.
    #[error("histogram needs {required} slots but only has {actual}")]
    HistogramTooSmall { required: usize, actual: usize },
}

/// Shorthand for results carrying a [`DictionaryError`].
pub type Result<T> = std::result::Result<T, DictionaryError>;

use thiserror::Error;

/// Errors returned at the boundary of the engine.
///
/// Unreachable words, rejected cross-words and "no legal move" are not
/// errors — they are silent, local outcomes of the search and are
/// represented as empty results, not as `Err`.
#[derive(Error, Debug)]
pub enum Error {
    /// A rack held more than 7 tiles.
    #[error("rack has {0} tiles, at most 7 are allowed")]
    RackTooLong(usize),

    /// A rack string contained something other than `A..Z` or `?`.
    #[error("invalid rack tile '{0}'")]
    InvalidRackTile(char),

    /// A board cell string contained something other than `A..Z`, `a..z` or empty.
    #[error("invalid board tile '{0}'")]
    InvalidBoardTile(char),

    /// Board input did not have exactly 15 rows.
    #[error("invalid number of rows {0} (expected 15)")]
    InvalidRowCount(usize),

    /// A board row did not have exactly 15 columns.
    #[error("invalid row length {0} (expected 15)")]
    InvalidRowLength(usize),

    /// A word could not be read from the dictionary file.
    #[error("dictionary file \"{path}\" could not be read")]
    DictionaryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

use thiserror::Error;

/// Errors that can occur when building or walking a playlist.
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("could not reserve storage for another song")]
    Allocation,

    #[error("song name is {len} characters long, at most {max} allowed")]
    LabelTooLong { len: usize, max: usize },

    #[error("cannot link an empty sequence of songs")]
    EmptySequence,

    #[error("invalid handle")]
    InvalidHandle,

    #[error("song appears more than once in the sequence")]
    DuplicateSong,

    #[error("head not revisited after {visited} songs")]
    MalformedCycle { visited: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;

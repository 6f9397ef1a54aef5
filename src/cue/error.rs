use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error("Could not open CUE sheet {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Sample rate must be greater than zero")]
    ZeroSampleRate,

    #[error("No tracks are defined in the CUE sheet")]
    NoTracks,

    #[error("No files are referenced in the CUE sheet")]
    NoFileReferenced,
}

pub type CueResult<T> = Result<T, CueError>;

/// Reasons a single line is skipped. These never leave the parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DirectiveError {
    #[error("Missing opening or closing quote")]
    MissingQuote,

    #[error("Invalid track number: {0}")]
    InvalidTrackNumber(i64),

    #[error("Track limit of {0} reached")]
    TrackLimitReached(usize),

    #[error("No track is open")]
    NoOpenTrack,

    #[error("Missing INDEX keyword")]
    MissingIndexKeyword,

    #[error("Only INDEX 01 is used, got INDEX {0}")]
    NotIndexOne(i64),

    #[error("Invalid MSF timestamp: {0}")]
    InvalidTimestamp(String),
}

pub(crate) type DirectiveResult<T> = Result<T, DirectiveError>;

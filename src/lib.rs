//! CUE sheet parsing into track catalogues with sample-accurate start offsets.
//!
//! ```no_run
//! use cue_index::CueParser;
//!
//! let sheet = CueParser::new("album.cue").parse(44100)?;
//! for track in &sheet.tracks {
//!     println!("{:02} starts at frame {}", track.number, track.start_frame);
//! }
//! # Ok::<(), cue_index::CueError>(())
//! ```

pub mod cd;
pub mod cue;

pub use cd::Msf;
pub use cue::error::{CueError, CueResult};
pub use cue::models::{CueSheet, Track};
pub use cue::{CueParser, parse_reader};

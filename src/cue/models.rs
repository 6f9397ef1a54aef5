use crate::cd::sample_frame_to_duration;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Maximum number of tracks kept from a sheet.
pub const MAX_TRACKS: usize = 99;
/// Byte capacity of TITLE and PERFORMER fields, including the terminator slot.
pub const TEXT_CAPACITY: usize = 80;
/// Byte capacity of the FILE field, including the terminator slot.
pub const FILE_CAPACITY: usize = 160;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CueSheet {
    /// Audio file named by the first FILE directive, relative to the sheet.
    pub file: String,
    pub title: Option<String>,
    pub performer: Option<String>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Track {
    pub number: u32,
    pub title: Option<String>,
    pub performer: Option<String>,
    /// Offset of INDEX 01 in PCM sample frames, 0 when the sheet had none.
    pub start_frame: u64,
}

impl Track {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    pub fn start_time(&self, sample_rate: u32) -> Duration {
        sample_frame_to_duration(self.start_frame, sample_rate)
    }
}

impl CueSheet {
    /// Path of the referenced audio file, resolved against the directory of `cue_path`.
    pub fn resolve_file(&self, cue_path: impl AsRef<Path>) -> PathBuf {
        let cue_dir = cue_path.as_ref().parent().unwrap_or(Path::new("."));
        cue_dir.join(&self.file)
    }

    /// Exclusive end of the track at `position`, which is where the next track starts.
    ///
    /// The last track runs to the end of the audio file, so it has no end here.
    pub fn track_end_frame(&self, position: usize) -> Option<u64> {
        let next = position.checked_add(1)?;
        self.tracks.get(next).map(|track| track.start_frame)
    }
}

// Red Book timing
use std::fmt::Display;
use std::time::Duration;

pub const FRAMES_PER_SECOND: u64 = 75;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// A disc position in minutes, seconds and CD frames (1/75 s).
///
/// `frames` is not limited to `0..75`; positions read from a sheet keep
/// whatever value was written there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Msf {
    pub fn new(minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            minutes,
            seconds,
            frames,
        }
    }

    pub fn total_frames(&self) -> u64 {
        (self.minutes as u64 * SECONDS_PER_MINUTE + self.seconds as u64) * FRAMES_PER_SECOND
            + self.frames as u64
    }

    /// Offset in PCM sample frames at `sample_rate`, truncated toward zero.
    ///
    /// Returns `None` when the product does not fit into a `u64`.
    pub fn to_sample_frame(&self, sample_rate: u32) -> Option<u64> {
        self.total_frames()
            .checked_mul(sample_rate as u64)
            .map(|scaled| scaled / FRAMES_PER_SECOND)
    }
}

impl Display for Msf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes, self.seconds, self.frames
        )
    }
}

/// Converts a sample-frame offset back to wall-clock time.
pub fn sample_frame_to_duration(sample_frame: u64, sample_rate: u32) -> Duration {
    if sample_rate == 0 {
        return Duration::ZERO;
    }

    let rate = sample_rate as u64;
    let secs = sample_frame / rate;
    let nanos = (sample_frame % rate) * 1_000_000_000 / rate;

    Duration::new(secs, nanos as u32)
}

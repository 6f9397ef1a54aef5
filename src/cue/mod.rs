use crate::cue::error::{CueError, CueResult, DirectiveError, DirectiveResult};
use crate::cue::index::index_one_sample_frame;
use crate::cue::line::{Directive, classify, extract_quoted, leading_int, trim_line};
use crate::cue::models::{CueSheet, FILE_CAPACITY, MAX_TRACKS, TEXT_CAPACITY, Track};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub mod error;
mod index;
mod line;
pub mod models;

/// Log target shared by every message the parser emits.
pub const LOG_TARGET: &str = "cue";

pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    /// Parses the sheet, converting INDEX 01 positions at `sample_rate`.
    pub fn parse(&self, sample_rate: u32) -> CueResult<CueSheet> {
        if sample_rate == 0 {
            return Err(CueError::ZeroSampleRate);
        }

        let file = File::open(&self.cue_path).map_err(|source| {
            warn!(target: LOG_TARGET, "Could not open CUE sheet {:?}: {source}", self.cue_path);
            CueError::Open {
                path: self.cue_path.clone(),
                source,
            }
        })?;

        debug!(target: LOG_TARGET, "Parsing CUE sheet {:?} at {sample_rate} Hz", self.cue_path);
        parse_reader(BufReader::new(file), sample_rate)
    }
}

/// Parses a sheet from any line-oriented source.
///
/// Malformed directives are skipped. The call only fails for a zero sample rate
/// or when the sheet ends up without a track or without a FILE directive.
pub fn parse_reader(mut reader: impl BufRead, sample_rate: u32) -> CueResult<CueSheet> {
    if sample_rate == 0 {
        return Err(CueError::ZeroSampleRate);
    }

    let mut interpreter = DirectiveInterpreter::new(sample_rate);
    let mut buffer = Vec::new();
    let mut line_number = 0usize;

    loop {
        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(e) => {
                warn!(target: LOG_TARGET, "Stopped reading CUE sheet after line {line_number}: {e}");
                break;
            }
        }

        let raw = String::from_utf8_lossy(&buffer);
        let Some(line) = trim_line(&raw) else {
            continue;
        };

        if let Err(e) = interpreter.apply(line) {
            debug!(target: LOG_TARGET, "Ignoring line {line_number} ({line}): {e}");
        }
    }

    match interpreter.finish() {
        Ok(sheet) => {
            info!(
                target: LOG_TARGET,
                "Parsed CUE sheet for {:?} with {} tracks",
                sheet.file,
                sheet.tracks.len()
            );
            Ok(sheet)
        }
        Err(e) => {
            warn!(target: LOG_TARGET, "CUE sheet is unusable: {e}");
            Err(e)
        }
    }
}

/// Per-call parse state: the catalogue under construction and the open track.
struct DirectiveInterpreter {
    sample_rate: u32,
    sheet: CueSheet,
    current_track: Option<usize>,
}

impl DirectiveInterpreter {
    fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            sheet: CueSheet::default(),
            current_track: None,
        }
    }

    fn apply(&mut self, line: &str) -> DirectiveResult<()> {
        match classify(line) {
            Some(Directive::File(rest)) => {
                if self.sheet.file.is_empty() {
                    self.sheet.file = extract_quoted(rest, FILE_CAPACITY)?;
                }
            }
            Some(Directive::Track(rest)) => self.open_track(rest)?,
            Some(Directive::Title(rest)) => {
                let title = bounded_text(rest)?;
                match self.current_track_mut() {
                    Some(track) => track.title = title,
                    None => self.sheet.title = title,
                }
            }
            Some(Directive::Performer(rest)) => {
                let performer = bounded_text(rest)?;
                match self.current_track_mut() {
                    Some(track) => track.performer = performer,
                    None => self.sheet.performer = performer,
                }
            }
            Some(Directive::Index(line)) => {
                let sample_rate = self.sample_rate;
                let track = self
                    .current_track_mut()
                    .ok_or(DirectiveError::NoOpenTrack)?;
                track.start_frame = index_one_sample_frame(line, sample_rate)?;
            }
            None => {}
        }

        Ok(())
    }

    fn open_track(&mut self, rest: &str) -> DirectiveResult<()> {
        let parsed = leading_int(rest);
        let number = u32::try_from(parsed)
            .ok()
            .filter(|&number| number > 0)
            .ok_or(DirectiveError::InvalidTrackNumber(parsed))?;

        if self.sheet.tracks.len() >= MAX_TRACKS {
            return Err(DirectiveError::TrackLimitReached(MAX_TRACKS));
        }

        self.sheet.tracks.push(Track::new(number));
        self.current_track = Some(self.sheet.tracks.len() - 1);

        Ok(())
    }

    fn current_track_mut(&mut self) -> Option<&mut Track> {
        self.current_track
            .and_then(|position| self.sheet.tracks.get_mut(position))
    }

    fn finish(self) -> CueResult<CueSheet> {
        if self.sheet.tracks.is_empty() {
            return Err(CueError::NoTracks);
        }

        if self.sheet.file.is_empty() {
            return Err(CueError::NoFileReferenced);
        }

        Ok(self.sheet)
    }
}

/// Quoted TITLE/PERFORMER text; an empty string clears the field.
fn bounded_text(rest: &str) -> DirectiveResult<Option<String>> {
    let text = extract_quoted(rest, TEXT_CAPACITY)?;
    Ok((!text.is_empty()).then_some(text))
}

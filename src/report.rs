use cue_index::{CueParser, CueResult, CueSheet};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::debug;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task;

pub type SheetOutcome = (PathBuf, CueResult<CueSheet>);

/// Human readable listing of a parsed sheet.
pub fn format_sheet(sheet: &CueSheet, cue_path: &Path, sample_rate: u32) -> String {
    let mut out = String::new();

    out.push_str(&format!("Audio file: {}\n", sheet.resolve_file(cue_path).display()));
    out.push_str(&format!("Title:      {}\n", sheet.title.as_deref().unwrap_or("-")));
    out.push_str(&format!("Performer:  {}\n", sheet.performer.as_deref().unwrap_or("-")));
    out.push_str(&format!("Tracks:     {}\n", sheet.tracks.len()));

    for (position, track) in sheet.tracks.iter().enumerate() {
        let length = sheet
            .track_end_frame(position)
            .map(|end| end.saturating_sub(track.start_frame))
            .map(|frames| format_time(cue_index::cd::sample_frame_to_duration(frames, sample_rate)))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!(
            "{:02}  {:>12}  {}  {:>9}  {} / {}\n",
            track.number,
            track.start_frame,
            format_time(track.start_time(sample_rate)),
            length,
            track.title.as_deref().unwrap_or("-"),
            track
                .performer
                .as_deref()
                .or(sheet.performer.as_deref())
                .unwrap_or("-"),
        ));
    }

    out
}

fn format_time(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!(
        "{:02}:{:02}.{:03}",
        secs / 60,
        secs % 60,
        duration.subsec_millis()
    )
}

/// Parses every sheet on the blocking pool and returns the outcomes in input order.
pub async fn check_sheets(
    pb: MultiProgress,
    cue_paths: Vec<PathBuf>,
    sample_rate: u32,
) -> anyhow::Result<Vec<SheetOutcome>> {
    let bar = pb.add(ProgressBar::new(cue_paths.len() as u64));
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let tasks = cue_paths.into_iter().map(|cue_path| {
        let bar = bar.clone();
        task::spawn_blocking(move || {
            debug!("Checking CUE sheet: {:?}", cue_path);
            let result = CueParser::new(&cue_path).parse(sample_rate);
            bar.inc(1);
            (cue_path, result)
        })
    });

    let outcomes = futures::future::join_all(tasks)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    bar.finish_and_clear();
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_index::{CueError, Track};
    use indicatif::ProgressDrawTarget;

    fn sample_sheet() -> CueSheet {
        CueSheet {
            file: "album.flac".to_string(),
            title: Some("Test Album".to_string()),
            performer: Some("Test Artist".to_string()),
            tracks: vec![
                Track {
                    title: Some("Song One".to_string()),
                    ..Track::new(1)
                },
                Track {
                    title: Some("Song Two".to_string()),
                    performer: Some("Guest".to_string()),
                    start_frame: 9_059_400,
                    ..Track::new(2)
                },
            ],
        }
    }

    #[test]
    fn format_time_pads_minutes_and_millis() {
        assert_eq!(format_time(Duration::ZERO), "00:00.000");
        assert_eq!(format_time(Duration::from_millis(205_428)), "03:25.428");
    }

    #[test]
    fn format_sheet_lists_tracks() {
        let listing = format_sheet(&sample_sheet(), Path::new("music/album.cue"), 44100);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(
            lines[0],
            format!("Audio file: {}", Path::new("music").join("album.flac").display())
        );
        assert_eq!(lines[1], "Title:      Test Album");
        assert_eq!(lines[2], "Performer:  Test Artist");
        assert_eq!(lines[3], "Tracks:     2");
        assert_eq!(
            lines[4],
            "01             0  00:00.000  03:25.428  Song One / Test Artist"
        );
        assert_eq!(
            lines[5],
            "02       9059400  03:25.428          -  Song Two / Guest"
        );
    }

    #[tokio::test]
    async fn check_sheets_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.cue");
        let empty = dir.path().join("empty.cue");
        let missing = dir.path().join("missing.cue");
        std::fs::write(&good, "FILE \"a.wav\" WAVE\nTRACK 01 AUDIO\n").unwrap();
        std::fs::write(&empty, "REM nothing here\n").unwrap();

        let pb = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let outcomes = check_sheets(pb, vec![good.clone(), empty.clone(), missing.clone()], 44100)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].0, good);
        assert_eq!(outcomes[0].1.as_ref().map(|s| s.tracks.len()).ok(), Some(1));
        assert_eq!(outcomes[1].0, empty);
        assert!(matches!(outcomes[1].1, Err(CueError::NoTracks)));
        assert_eq!(outcomes[2].0, missing);
        assert!(matches!(outcomes[2].1, Err(CueError::Open { .. })));
    }
}

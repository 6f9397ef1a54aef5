use clap::Parser;
use std::path::PathBuf;

/// Red Book CD audio rate, used when the audio file's rate is not given.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Prints the album metadata and track list of a CUE sheet.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ShowCommand {
    /// Path of the .cue file
    #[arg(value_name = "INPUT_CUE")]
    pub input_cue: PathBuf,

    /// Sample rate of the referenced audio file in Hz
    #[arg(
        long,
        short = 'r',
        value_name = "SAMPLE_RATE",
        default_value_t = DEFAULT_SAMPLE_RATE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub sample_rate: u32,

    /// Print the catalogue as JSON instead of a table
    #[arg(long, short = 'j', default_value_t = false)]
    pub json: bool,
}

/// Parses several CUE sheets in parallel and reports which ones are usable.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(
    long_about = "Parses several CUE sheets in parallel and reports which ones are usable\n\nA sheet is usable when it references an audio file and defines at least one track. Exits with an error if any sheet is not usable."
)]
pub struct CheckCommand {
    /// Paths of the .cue files
    #[arg(value_name = "INPUT_CUE", required = true)]
    pub input_cues: Vec<PathBuf>,

    /// Sample rate of the referenced audio files in Hz
    #[arg(
        long,
        short = 'r',
        value_name = "SAMPLE_RATE",
        default_value_t = DEFAULT_SAMPLE_RATE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub sample_rate: u32,
}

#[cfg(test)]
mod tests {
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn show_defaults_to_cd_sample_rate() {
        let cli = Cli::try_parse_from(["cue-index", "show", "album.cue"]).unwrap();
        let Commands::Show(cmd) = cli.command else {
            panic!("expected show command");
        };

        assert_eq!(cmd.input_cue.to_str(), Some("album.cue"));
        assert_eq!(cmd.sample_rate, 44_100);
        assert!(!cmd.json);
    }

    #[test]
    fn show_accepts_sample_rate_and_json() {
        let cli =
            Cli::try_parse_from(["cue-index", "show", "album.cue", "-r", "48000", "--json"]).unwrap();
        let Commands::Show(cmd) = cli.command else {
            panic!("expected show command");
        };

        assert_eq!(cmd.sample_rate, 48_000);
        assert!(cmd.json);
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        assert!(Cli::try_parse_from(["cue-index", "show", "album.cue", "-r", "0"]).is_err());
    }

    #[test]
    fn check_takes_many_sheets() {
        let cli = Cli::try_parse_from(["cue-index", "check", "a.cue", "b.cue"]).unwrap();
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check command");
        };

        assert_eq!(cmd.input_cues.len(), 2);
    }

    #[test]
    fn check_requires_a_sheet() {
        assert!(Cli::try_parse_from(["cue-index", "check"]).is_err());
    }
}

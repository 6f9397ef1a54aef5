use crate::commands::cue::{CheckCommand, ShowCommand};
use crate::commands::{Cli, Commands};
use crate::report::{check_sheets, format_sheet};
use anyhow::Result;
use clap::Parser;
use cue_index::CueParser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{debug, error, info};

mod commands;
mod report;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    debug!(
        "{} {} ({})",
        built_info::PKG_NAME,
        built_info::PKG_VERSION,
        built_info::TARGET
    );

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(cmd) => show(cmd)?,
        Commands::Check(cmd) => check(pb, cmd).await?,
    }

    Ok(())
}

fn show(cmd: ShowCommand) -> Result<()> {
    let sheet = CueParser::new(&cmd.input_cue).parse(cmd.sample_rate)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
    } else {
        print!("{}", format_sheet(&sheet, &cmd.input_cue, cmd.sample_rate));
    }

    Ok(())
}

async fn check(pb: MultiProgress, cmd: CheckCommand) -> Result<()> {
    let total = cmd.input_cues.len();
    let outcomes = check_sheets(pb, cmd.input_cues, cmd.sample_rate).await?;

    let mut failed = 0usize;
    for (cue_path, outcome) in &outcomes {
        match outcome {
            Ok(sheet) => info!("OK   {:?}: {} tracks", cue_path, sheet.tracks.len()),
            Err(e) => {
                failed += 1;
                error!("FAIL {:?}: {e}", cue_path);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} CUE sheets could not be parsed");
    }

    info!("All {total} CUE sheets are usable");
    Ok(())
}

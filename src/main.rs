use clap::Parser;
use itemdesc_rs_lib::{load_description, load_tables, write_json, SourceFiles};
use log::LevelFilter;
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(name = "itemdesc")]
#[command(about = "Converts client item description tables to items.json")]
#[command(version)]
struct Cli {
    /// Directory holding the client tables
    #[arg(long, default_value = "files")]
    source_dir: PathBuf,

    /// Directory items.json is written to
    #[arg(long, default_value = "dist")]
    output_dir: PathBuf,

    /// Log every skipped record
    #[arg(short, long)]
    debug: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new().filter_level(level).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), itemdesc_rs_lib::Error> {
    let files = SourceFiles::in_dir(&cli.source_dir);
    let tables = load_tables(&files)?;
    let output = load_description(&files, &tables)?;
    write_json(&output.items, &cli.output_dir)?;

    Ok(())
}

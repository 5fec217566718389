use std::fs::File;
use std::path::Path;

use clap::{crate_authors, crate_description, crate_version, Arg, Command};
use failure::Error;
use log::{error, info, warn};
use simplelog::{
    ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

use settings::Settings;

use crate::downloader::HttpDownloader;
use crate::sink::JsonFileSink;
use crate::worldpop::{generate_dataset_and_showcase, load_country_records, Generated};

mod downloader;
mod hdx;
mod settings;
mod sink;
#[cfg(test)]
mod test_utils;
mod worldpop;

fn main() {
    let matches = Command::new("WorldPop HDX")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .value_name("SETTINGS")
                .help("Specify the settings file")
                .takes_value(true),
        )
        .get_matches();

    let settings_path = matches.value_of("settings").map(Path::new);
    let settings = Settings::new(settings_path).expect("Unable to use config file.");

    initialize_logger(Path::new(&settings.general.log_file), &settings)
        .expect("Unable to initialize logger.");

    if let Err(e) = run(&settings) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Statistics of a run over the feed.
#[derive(Debug, Default, PartialEq)]
struct RunSummary {
    created: usize,
    rejected: usize,
    failed: usize,
}

fn run(settings: &Settings) -> Result<RunSummary, Error> {
    let downloader = HttpDownloader::new(&settings.downloader)?;
    let sink = JsonFileSink::new(Path::new(&settings.output.directory))?;

    let records = load_country_records(&settings.worldpop.feed_url, &downloader)?;

    let mut summary = RunSummary::default();

    for record in records
        .iter()
        .skip(settings.record_start())
        .take(settings.record_limit())
    {
        let (dataset, showcase) = match generate_dataset_and_showcase(&downloader, record) {
            Ok(Generated::Created { dataset, showcase }) => (dataset, showcase),
            Ok(Generated::Rejected { .. }) => {
                summary.rejected += 1;
                continue;
            }
            Err(e) => {
                warn!("Unable to process `{}`: {}", record.location, e);
                summary.failed += 1;
                continue;
            }
        };

        match sink.insert(&dataset, &showcase) {
            Ok(_) => summary.created += 1,
            Err(e) => {
                warn!("Unable to write dataset `{}`: {}", dataset.name, e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "Created {} datasets, rejected {}, failed {}.",
        summary.created, summary.rejected, summary.failed
    );

    Ok(summary)
}

/// Initialize the logger.
fn initialize_logger(file_path: &Path, settings: &Settings) -> Result<(), Error> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    let log_level = if settings.general.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    loggers.push(TermLogger::new(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));

    if let Ok(file) = File::create(file_path) {
        loggers.push(WriteLogger::new(
            log_level,
            simplelog::Config::default(),
            file,
        ));
    }

    CombinedLogger::init(loggers)?;

    Ok(())
}

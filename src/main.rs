use anyhow::Context;
use clap::Parser;

use mtdu::{
    cli::Args,
    config::Config,
    logging,
    output::{progress::Spinner, report::print_report},
    scan::Scan,
};

fn main() -> anyhow::Result<()> {
    let config: Config = Args::parse().into();

    logging::init_logging(config.verbose);

    let scan = Scan::start(config.paths, config.threads)?;
    let spinner = config.progress.then(|| Spinner::start(scan.stats()));
    let report = scan.finish();
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    tracing::debug!(?report.stats, "scan finished");

    print_report(&report.roots, config.size_format).context("failed to write results")
}

use std::path::PathBuf;

use clap::Parser;

use crate::{bytes::units::SizeFormat, config::Config, scheduler::WorkScheduler};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files or directories to measure
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print sizes in powers of 1024 (e.g. 1.5K, 20.0M)
    #[arg(name = "human-readable", long = "human-readable", short = 'H')]
    pub human_readable: bool,

    /// Number of worker threads [default: available parallelism]
    #[arg(
        name = "threads",
        long = "threads",
        short = 'j',
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub threads: Option<u32>,

    /// Log every skipped entry
    #[arg(name = "verbose", long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Show a spinner on stderr while scanning
    #[arg(name = "progress", long = "progress", short = 'p')]
    pub progress: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let size_format = if args.human_readable {
            SizeFormat::Human
        } else {
            SizeFormat::Raw
        };

        let threads = args
            .threads
            .map(|n| n as usize)
            .unwrap_or_else(WorkScheduler::default_threads);

        Config {
            paths: args.paths,
            size_format,
            threads,
            verbose: args.verbose,
            progress: args.progress,
        }
    }
}

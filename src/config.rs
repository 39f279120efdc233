use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::{bytes::units::SizeFormat, cli::Args};

#[derive(Debug)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub size_format: SizeFormat,
    pub threads: usize,
    pub verbose: bool,
    pub progress: bool,
}

impl Config {
    /// Parse a full argument list, program name first.
    pub fn parse<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(itr).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::WorkScheduler;
    use clap::error::ErrorKind;

    #[test]
    fn paths_are_required() {
        let err = Config::parse(["mtdu"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn defaults() {
        let config = Config::parse(["mtdu", "a", "b"]).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(config.size_format, SizeFormat::Raw);
        assert_eq!(config.threads, WorkScheduler::default_threads());
        assert!(!config.verbose);
        assert!(!config.progress);
    }

    #[test]
    fn flags() {
        let config = Config::parse(["mtdu", "-H", "-j", "64", "-v", "--progress", "dir"]).unwrap();
        assert_eq!(config.size_format, SizeFormat::Human);
        assert_eq!(config.threads, 64);
        assert!(config.verbose);
        assert!(config.progress);
    }

    #[test]
    fn zero_threads_is_rejected() {
        let err = Config::parse(["mtdu", "--threads", "0", "dir"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn non_numeric_threads_is_rejected() {
        assert!(Config::parse(["mtdu", "-j", "many", "dir"]).is_err());
    }

    #[test]
    fn duplicate_paths_are_kept() {
        let config = Config::parse(["mtdu", "x", "x"]).unwrap();
        assert_eq!(config.paths.len(), 2);
    }
}

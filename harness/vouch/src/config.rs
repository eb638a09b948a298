//! Command-line configuration.

use std::path::PathBuf;

/// File-name suffix that marks a test module.
pub const DEFAULT_SUFFIX: &str = ".test.rs";

/// Settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory (or single file) to search.
    pub root: PathBuf,
    /// Log every discovered file and scheduled test.
    pub debug: bool,
    /// Only run tests whose display name contains this text.
    pub filter: Option<String>,
    pub suffix: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            root: PathBuf::from("."),
            debug: false,
            filter: None,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    /// Arguments that were not understood and are ignored.
    pub ignored: Vec<String>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    ///
    /// The path is optional and flags may come before or after it. Only the
    /// first positional argument is used.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = RunConfig::default();
        let mut path: Option<String> = None;
        let mut ignored = Vec::new();

        for arg in args {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                return CliArgs {
                    command: Command::Help,
                    ignored,
                };
            } else if arg == "--version" || arg == "-V" {
                return CliArgs {
                    command: Command::Version,
                    ignored,
                };
            } else if arg == "--debug" {
                config.debug = true;
            } else if let Some(filter) = arg.strip_prefix("--filter=") {
                config.filter = Some(filter.to_string());
            } else if let Some(suffix) = arg.strip_prefix("--suffix=") {
                if suffix.is_empty() {
                    ignored.push(arg);
                } else {
                    config.suffix = suffix.to_string();
                }
            } else if !arg.starts_with('-') && path.is_none() {
                path = Some(arg);
            } else {
                ignored.push(arg);
            }
        }

        if let Some(path) = path {
            config.root = PathBuf::from(path);
        }

        CliArgs {
            command: Command::Run(config),
            ignored,
        }
    }
}

pub const USAGE: &str = "\
Usage: vouch [PATH] [options]

Runs every test module under PATH (default: current directory).

Options:
  --debug             Log each discovered file and scheduled test
  --filter=<text>     Only run tests whose name contains <text>
  --suffix=<suffix>   Test file suffix (default: .test.rs)
  -h, --help          Show this help message
  -V, --version       Show version information";

//! Binary entry point shared by every `vouch` test executable.

use tracing::warn;

use crate::config::{CliArgs, Command, USAGE};
use crate::driver::{run, QuietPanics};
use crate::loader::Catalog;

/// Parse `args` (program name excluded), run the catalog's tests, and return
/// the process exit code: 0 when nothing failed, 1 otherwise.
pub fn main_with_args<I, S>(args: I, catalog: &Catalog) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let CliArgs { command, ignored } = CliArgs::parse(args);

    let config = match command {
        Command::Help => {
            println!("{USAGE}");
            return 0;
        }
        Command::Version => {
            println!("vouch {}", env!("CARGO_PKG_VERSION"));
            return 0;
        }
        Command::Run(config) => config,
    };

    crate::tracing_setup::init_tracing(config.debug);
    for arg in &ignored {
        warn!(argument = %arg, "ignoring unrecognized argument");
    }

    let stats = {
        let _quiet = QuietPanics::install();
        run(&config, catalog)
    };

    match stats {
        Ok(stats) => stats.exit_code(),
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    }
}

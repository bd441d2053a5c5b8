use clap::Parser;
use anyhow::Result;
use std::io::{self, BufWriter, ErrorKind, Write};

mod cat;
mod draw;
mod household;
mod logging;
mod output;
mod select;
mod types;

use select::Selector;
use types::CatKind;

/// Household - hands the chores to a randomly chosen cat
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed the generator so the pick is reproducible
    #[arg(short, long, conflicts_with = "cat")]
    seed: Option<u64>,

    /// Skip the draw and use this cat
    #[arg(short, long, value_enum)]
    cat: Option<CatKind>,

    /// Number of draws, one line each
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,

    /// Output in JSON format
    #[arg(short = 'j', long, conflicts_with = "plain")]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Diagnostic log level (off, error, warn, info, debug, trace)
    #[arg(long, conflicts_with = "verbose")]
    log_level: Option<String>,

    /// Raise the log level: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    match run(Cli::parse()) {
        // The reader went away (e.g. `| head`); nothing left to do
        Err(err) if is_broken_pipe(&err) => Ok(()),
        result => result,
    }
}

fn run(cli: Cli) -> Result<()> {
    let level = logging::resolve_level(cli.log_level.as_deref(), cli.verbose)?;
    logging::init_logging(level)?;

    if cli.plain {
        colored::control::set_override(false);
    }

    let mut selector = Selector::new(cli.seed, cli.cat);
    let draws = draw::run_draws(&mut selector, cli.count);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // Output the results
    if cli.json {
        output::output_json(&mut out, draws)?;
    } else {
        let tally = output::output_text(&mut out, draws)?;
        if tally.total() > 1 {
            output::output_tally(&mut out, &tally)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind as ClapErrorKind;

    #[test]
    fn count_must_be_positive() {
        let err = Cli::try_parse_from(["household", "--count", "0"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ClapErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn count_takes_the_full_u64_range() {
        let cli = Cli::try_parse_from(["household", "-n", "18446744073709551615"]).unwrap();
        assert_eq!(cli.count, u64::MAX);
    }

    #[test]
    fn broken_pipe_is_recognised_through_context() {
        let err = anyhow::Error::from(io::Error::from(ErrorKind::BrokenPipe))
            .context("writing draws");
        assert!(is_broken_pipe(&err));

        let err = anyhow::Error::from(io::Error::from(ErrorKind::PermissionDenied));
        assert!(!is_broken_pipe(&err));
    }
}

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordcalc::{Calculator, repl::Session};

/// wordcalc evaluates arithmetic written in digits or in English number
/// words, such as `one hundred and seven minus 4`.
///
/// Without arguments, lines are read from standard input until a blank line
/// or the end of input, and one result is printed per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the reason for a failure instead of a bare `ERROR`.
    #[arg(short, long, env = "WORDCALC_VERBOSE")]
    verbose: bool,

    /// Read lines from this file instead of standard input.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Evaluate this single expression and exit.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let calculator = Calculator::default();
    let session = Session::new(calculator, args.verbose);

    if let Some(expression) = args.expression {
        let outcome = calculator.evaluate(&expression);
        println!("{}", session.format_outcome(&outcome));
        return if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let result = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => session.run(BufReader::new(file), io::stdout().lock()),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => session.run(io::stdin().lock(), io::stdout().lock()),
    };

    match result {
        Ok(summary) => {
            tracing::debug!(evaluated = summary.evaluated,
                            failed = summary.failed,
                            "session finished");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}

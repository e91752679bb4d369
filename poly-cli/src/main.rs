//! Invocation shell: argument handling, file-vs-stdin selection, and exit
//! codes. Everything that actually understands the calculator lives in
//! `poly_calc`/`poly_cli`'s library code; this binary only wires it up.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use clap::Parser;
use poly_calc::{Driver, ResumeMode};
use poly_cli::{CliError, LineReader};

/// A stack-oriented calculator for multi-variable polynomials with integer
/// coefficients.
#[derive(Parser)]
#[command(name = "poly-calc", version, about)]
struct Args {
    /// Input path, or `-` for standard input. Defaults to standard input.
    path: Option<String>,

    /// Stop at the first diagnostic instead of resuming on the next line.
    #[arg(long)]
    no_resume: bool,

    /// Increase log verbosity (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // `Args::try_parse` owns the "invalid invocation" exit path (1): too many
    // arguments, or any other malformed command line, is rejected here,
    // before `run()` — and therefore `CliError` — ever come into play.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(1);
        }
    };
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::from(0),
        Ok(false) => ExitCode::from(3),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

/// Runs the calculator to completion. Returns `Ok(true)` if no diagnostic was
/// ever emitted, `Ok(false)` if at least one was (still exit code 3, not a
/// hard failure).
fn run(args: &Args) -> Result<bool, CliError> {
    let resume_mode = if args.no_resume {
        ResumeMode::Fatal
    } else {
        ResumeMode::ResumeNext
    };

    let stdin = io::stdin();
    let reader: Box<dyn BufRead> = match args.path.as_deref() {
        None | Some("-") => Box::new(stdin.lock()),
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::OpenFailed {
                path: path.to_string(),
                source,
            })?;
            Box::new(BufReader::new(file))
        }
    };

    let mut source = LineReader::new(reader);
    let mut driver = Driver::new(resume_mode);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut result_out = stdout.lock();
    let mut diag_out = stderr.lock();

    driver
        .run(&mut source, &mut result_out, &mut diag_out)
        .expect("writes to stdout/stderr do not fail in normal operation");
    result_out.flush().ok();
    diag_out.flush().ok();

    Ok(!driver.saw_diagnostic())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

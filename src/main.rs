use std::{fs, process::ExitCode};

use calq::{Context, evaluate};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// calq evaluates mathematical expressions over scalars, arrays and matrices
/// and prints the value of the last statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calq to read the script from the file named by CONTENTS.
    #[arg(short, long)]
    file: bool,

    /// Evaluates the script without printing its value. Errors are still
    /// reported.
    #[arg(short, long)]
    quiet: bool,

    /// The script itself, e.g. "x = 3; x^2", or a file path with --file.
    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match evaluate(&script, &mut Context::new()) {
        Ok(value) => {
            if !args.quiet {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

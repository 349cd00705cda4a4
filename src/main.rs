use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use palio::{lexer::lexer::Scanner, render_error, tracing_config::init_tracing};
use tracing::info;

/// Tokenize a PALIO source file and print its tokens.
#[derive(Parser, Debug)]
#[command(name = "palio", version, about)]
struct Args {
    /// Path to the `.palio` source file
    file: PathBuf,

    /// Exit with status 1 when any lexical error is reported
    #[arg(long)]
    deny_errors: bool,

    /// Only print diagnostics, not the token listing
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let args = Args::parse();
    let file_contents = read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args.file.to_string_lossy();

    let start = Instant::now();
    let mut scanner = Scanner::new(&file_contents);
    let mut count = 0usize;
    let mut literals = 0usize;

    for token in scanner.by_ref() {
        count += 1;
        if token.is_literal() {
            literals += 1;
        }
        if !args.quiet {
            println!("{}", token);
        }
    }

    let diagnostics = scanner.take_diagnostics();
    info!(tokens = count, literals, errors = diagnostics.len(), elapsed = ?start.elapsed(), "tokenized {}", file_name);

    for error in &diagnostics {
        eprint!("{}", render_error(error, &file_name, &file_contents));
    }

    if args.deny_errors && !diagnostics.is_empty() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

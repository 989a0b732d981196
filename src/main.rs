//! CLI entry point for the pixel art to SVG converter

use pixsvg::io::cli::{FileProcessor, parse_args};
use std::process::ExitCode;

// Allow print for reporting the final error to the user
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let result = parse_args(std::env::args_os())
        .and_then(|cli| cli.map(|cli| FileProcessor::new(cli).process()).transpose());

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

//! gen_vectors writes the BLAKE2s salt and personalization test vectors to a file.
//!
//! Exit status is 0 on success, 1 when no output path is given and 2 when the file
//! cannot be written. Set `RUST_LOG=debug` to see every generated case on stderr.
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use blake2s_vectors::{generate, hasher::Blake2s};
use log::{error, LevelFilter};

const USAGE: &str = "Usage: gen_vectors.py <path to output file>";

const EXIT_USAGE: u8 = 1;
const EXIT_IO: u8 = 2;

fn run(path: &Path) -> Result<()> {
    generate::write_vector_file(path, &Blake2s)
        .with_context(|| format!("failed to write test vectors to {}", path.display()))
}

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Anything after the output path is ignored.
    let path = match env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            println!("{}", USAGE);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_IO)
        }
    }
}

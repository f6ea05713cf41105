//! b2s prints the BLAKE2s digest of a file, keyed with the single byte `0x00`.
//!
//! The digest is written as lowercase hex with no trailing newline. Any failure,
//! including a wrong number of arguments, exits with status 1 and prints nothing on
//! stdout.
use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use blake2s_vectors::hasher::Blake2sState;
use log::error;

const KEY: [u8; 1] = [0x00];

fn run() -> Result<()> {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    if args.len() != 1 {
        bail!("expected exactly one file argument, got {}", args.len());
    }
    let path = Path::new(&args[0]);

    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut state = Blake2sState::new(&KEY, &[], &[])?;
    io::copy(&mut file, &mut state)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let digest = state.finalize();

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", hex::encode(digest)).context("failed to write digest")?;
    stdout.flush().context("failed to write digest")?;
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

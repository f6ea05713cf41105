#![warn(missing_docs)]
//! Test vector generator for BLAKE2s salt and personalization.
//!
//! The vectors hash the empty message under a fixed 32-byte key while sweeping the
//! salt length from 1 to 8 bytes, then the personalization length from 1 to 8 bytes.
//! Each case is written as a JSON object next to the hex-encoded digest, producing a
//! fixture file other BLAKE2s implementations can check themselves against.
//!
//! Hashing itself is delegated to the RustCrypto [`blake2`] crate, through the
//! [`hasher::Blake2sHasher`] seam.
//!
//! # Example
//! ```
//! use blake2s_vectors::{generate, hasher::Blake2s};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let cases = generate::generate_cases(&Blake2s)?;
//!   assert_eq!(cases.len(), 16);
//!
//!   let mut out = Vec::new();
//!   generate::write_cases(&mut out, &cases)?;
//!   println!("{}", String::from_utf8(out)?);
//!
//!   Ok(())
//! }
//! ```
//!
//! [`blake2`]: https://docs.rs/blake2
/// `error` holds the error type shared by the library.
pub mod error;
/// `generate` runs both parameter sweeps and writes the vector file.
pub mod generate;
/// `hasher` is the seam to the BLAKE2s implementation.
pub mod hasher;
/// `params` holds the fixed key, parameter limits and the sweep patterns.
pub mod params;
/// `vector` is the serialized shape of a single test case.
pub mod vector;

pub use error::{Error, Result};

use std::io;

use blake2::Blake2sVarCore;
use digest::{
    core_api::{Buffer, UpdateCore, VariableOutputCore},
    crypto_common::Block,
    Output,
};

use crate::error::{Error, Result};
use crate::params::{KEY_LENGTH, OUTPUT_LENGTH, PERSONA_LENGTH, SALT_LENGTH};

/// Blake2sHasher computes a full-length BLAKE2s digest with optional key, salt and
/// personalization. Empty slices mean the parameter is absent.
pub trait Blake2sHasher {
    /// keyed_digest hashes `message` under the given parameters. Salt and persona
    /// shorter than 8 bytes are right-padded with zeros.
    fn keyed_digest(
        &self,
        message: &[u8],
        key: &[u8],
        salt: &[u8],
        persona: &[u8],
    ) -> Result<[u8; OUTPUT_LENGTH]>;
}

/// Blake2s is the RustCrypto `blake2` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake2s;

impl Blake2sHasher for Blake2s {
    fn keyed_digest(
        &self,
        message: &[u8],
        key: &[u8],
        salt: &[u8],
        persona: &[u8],
    ) -> Result<[u8; OUTPUT_LENGTH]> {
        let mut state = Blake2sState::new(key, salt, persona)?;
        state.update(message);
        Ok(state.finalize())
    }
}

/// Blake2sState is an incremental keyed BLAKE2s computation over `blake2::Blake2sVarCore`.
/// It implements [`io::Write`], so input can be streamed in with [`io::copy`].
pub struct Blake2sState {
    core: Blake2sVarCore,
    buffer: Buffer<Blake2sVarCore>,
}

impl Blake2sState {
    /// new checks the parameter lengths and absorbs the padded key block, if any.
    pub fn new(key: &[u8], salt: &[u8], persona: &[u8]) -> Result<Self> {
        check_len("key", key, KEY_LENGTH)?;
        check_len("salt", salt, SALT_LENGTH)?;
        check_len("persona", persona, PERSONA_LENGTH)?;

        let mut state = Self {
            core: Blake2sVarCore::new_with_params(salt, persona, key.len(), OUTPUT_LENGTH),
            buffer: Buffer::<Blake2sVarCore>::default(),
        };

        // An unkeyed hash has no key block at all, not a block of zeros.
        if !key.is_empty() {
            let mut padded_key = Block::<Blake2sVarCore>::default();
            padded_key[..key.len()].copy_from_slice(key);
            state.update(padded_key.as_slice());
        }
        Ok(state)
    }

    /// update absorbs more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        let core = &mut self.core;
        self.buffer.digest_blocks(data, |blocks| core.update_blocks(blocks));
    }

    /// finalize pads the pending block and returns the digest.
    pub fn finalize(mut self) -> [u8; OUTPUT_LENGTH] {
        let mut out = Output::<Blake2sVarCore>::default();
        self.core.finalize_variable_core(&mut self.buffer, &mut out);

        let mut digest = [0u8; OUTPUT_LENGTH];
        digest.copy_from_slice(&out[..OUTPUT_LENGTH]);
        digest
    }
}

impl io::Write for Blake2sState {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn check_len(what: &'static str, value: &[u8], max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::InvalidParameter {
            what,
            len: value.len(),
            max,
        });
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

use crate::params::HASH_NAME;

/// TestCase is one entry of the vector file. All fields are strings, byte values are
/// lowercase hex and absent parameters are empty strings. Fields serialize in
/// declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Hash function name, always `blake2s`.
    pub hash: String,
    /// Hashed message. Always empty for these vectors.
    #[serde(rename = "in")]
    pub input: String,
    /// Key.
    pub key: String,
    /// Personalization string.
    pub persona: String,
    /// Salt.
    pub salt: String,
    /// Expected digest.
    pub out: String,
}

impl TestCase {
    /// new hex-encodes the parameters and the digest of one case.
    pub fn new(input: &[u8], key: &[u8], salt: &[u8], persona: &[u8], out: &[u8]) -> Self {
        Self {
            hash: HASH_NAME.to_string(),
            input: hex::encode(input),
            key: hex::encode(key),
            persona: hex::encode(persona),
            salt: hex::encode(salt),
            out: hex::encode(out),
        }
    }
}

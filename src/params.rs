/// Value of the `hash` field in every test case.
pub const HASH_NAME: &str = "blake2s";

/// Maximum key size, in bytes, of BLAKE2s.
pub const KEY_LENGTH: usize = 32;

/// Maximum salt size, in bytes, of BLAKE2s.
pub const SALT_LENGTH: usize = 8;

/// Maximum personalization size, in bytes, of BLAKE2s.
pub const PERSONA_LENGTH: usize = 8;

/// Digest size in bytes. The vectors always use the full BLAKE2s output.
pub const OUTPUT_LENGTH: usize = 32;

/// Number of cases in each sweep, one per parameter length from 1 to 8.
pub const SWEEP_LEN: usize = 8;

/// KEY is the key shared by every test case: 0x00, 0x01, ..., 0x1f.
pub const KEY: [u8; KEY_LENGTH] = ramp_array();

const fn ramp_array<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = i as u8;
        i += 1;
    }
    out
}

/// ramp returns `len` bytes counting up from zero. Salts and personas use this pattern.
pub fn ramp(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// Sweep is the parameter varied by one half of the vector file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sweep {
    /// Salt grows, persona stays empty.
    Salt,
    /// Persona grows, salt stays empty.
    Persona,
}

impl Sweep {
    /// Both sweeps in output order.
    pub const ALL: [Sweep; 2] = [Sweep::Salt, Sweep::Persona];

    /// case_params returns the `(salt, persona)` pair of the `i`-th case of the sweep.
    /// The varied parameter is `i + 1` bytes long, the other one is empty.
    pub fn case_params(self, i: usize) -> (Vec<u8>, Vec<u8>) {
        match self {
            Sweep::Salt => (ramp(i + 1), Vec::new()),
            Sweep::Persona => (Vec::new(), ramp(i + 1)),
        }
    }

    /// Maximum length of the varied parameter.
    pub fn max_len(self) -> usize {
        match self {
            Sweep::Salt => SALT_LENGTH,
            Sweep::Persona => PERSONA_LENGTH,
        }
    }
}

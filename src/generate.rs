use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::hasher::Blake2sHasher;
use crate::params::{Sweep, KEY, SWEEP_LEN};
use crate::vector::TestCase;

/// generate_cases hashes the empty message under the fixed key for every case of the
/// salt sweep, then every case of the persona sweep. The order of the returned cases
/// is the order of the vector file.
pub fn generate_cases<H: Blake2sHasher>(hasher: &H) -> Result<Vec<TestCase>> {
    let mut cases = Vec::with_capacity(Sweep::ALL.len() * SWEEP_LEN);
    for sweep in Sweep::ALL {
        debug_assert!(SWEEP_LEN <= sweep.max_len());
        for i in 0..SWEEP_LEN {
            let (salt, persona) = sweep.case_params(i);
            let out = hasher.keyed_digest(&[], &KEY, &salt, &persona)?;
            debug!(
                "{:?} sweep case {}: salt={} persona={} out={}",
                sweep,
                i,
                hex::encode(&salt),
                hex::encode(&persona),
                hex::encode(out)
            );
            cases.push(TestCase::new(&[], &KEY, &salt, &persona, &out));
        }
    }
    Ok(cases)
}

/// write_cases serializes `cases` as a JSON array. Each object is pretty printed with a
/// one space indent and objects are not indented inside the array, which keeps the
/// output identical to existing fixture files. There is no trailing newline.
pub fn write_cases<W: Write>(mut w: W, cases: &[TestCase]) -> Result<()> {
    w.write_all(b"[\n")?;
    for (i, case) in cases.iter().enumerate() {
        if i > 0 {
            w.write_all(b",\n")?;
        }
        let mut ser =
            serde_json::Serializer::with_formatter(&mut w, PrettyFormatter::with_indent(b" "));
        case.serialize(&mut ser)?;
    }
    if !cases.is_empty() {
        w.write_all(b"\n")?;
    }
    w.write_all(b"]")?;
    Ok(())
}

/// write_vector_file creates (or truncates) `path` and writes the full vector file to it.
pub fn write_vector_file<P: AsRef<Path>, H: Blake2sHasher>(path: P, hasher: &H) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = BufWriter::new(file);

    let cases = generate_cases(hasher)?;
    write_cases(&mut w, &cases)?;
    // BufWriter swallows errors on drop.
    w.flush()?;

    info!("wrote {} test vectors to {}", cases.len(), path.display());
    Ok(())
}

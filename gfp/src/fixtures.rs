//! Loader for paired gfp fixtures.
//!
//! A fixture set is two files: a raw concatenation of 16-byte MP-SPDZ words
//! and a text file with one decimal integer per line. Entry `i` of one
//! belongs to entry `i` of the other. Decimal values may be negative or
//! exceed the prime; they are reduced into `[0, prime)` on load.

use std::fs;
use std::path::{Path, PathBuf};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use thiserror::Error;

use crate::layout::WORD_WIDTH;

/// One known (word, value) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfpFixture {
    pub gfp: [u8; WORD_WIDTH],
    /// Decimal value reduced modulo the prime.
    pub value: BigUint,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixture file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("gfp fixture stream of {len} bytes does not split into 16-byte words")]
    TruncatedWord { len: usize },
    #[error("line {line}: `{text}` is not a decimal integer")]
    InvalidValue { line: usize, text: String },
    #[error("number of gfp words ({words}) does not match number of values ({values})")]
    CountMismatch { words: usize, values: usize },
}

/// Load and zip a fixture pair.
pub fn load_fixtures(
    gfp_path: impl AsRef<Path>,
    values_path: impl AsRef<Path>,
    prime: &BigUint,
) -> Result<Vec<GfpFixture>, FixtureError> {
    let words = read_words(gfp_path.as_ref())?;
    let values = read_values(values_path.as_ref(), prime)?;
    if words.len() != values.len() {
        return Err(FixtureError::CountMismatch {
            words: words.len(),
            values: values.len(),
        });
    }
    Ok(words
        .into_iter()
        .zip(values)
        .map(|(gfp, value)| GfpFixture { gfp, value })
        .collect())
}

fn read_words(path: &Path) -> Result<Vec<[u8; WORD_WIDTH]>, FixtureError> {
    let bytes = fs::read(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.len() % WORD_WIDTH != 0 {
        return Err(FixtureError::TruncatedWord { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(WORD_WIDTH)
        .map(|chunk| {
            let mut word = [0u8; WORD_WIDTH];
            word.copy_from_slice(chunk);
            word
        })
        .collect())
}

fn read_values(path: &Path, prime: &BigUint) -> Result<Vec<BigUint>, FixtureError> {
    let text = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let modulus = BigInt::from_biguint(Sign::Plus, prime.clone());
    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: BigInt = trimmed.parse().map_err(|_| FixtureError::InvalidValue {
            line: i + 1,
            text: trimmed.to_string(),
        })?;
        // floor modulo keeps the sign of the (positive) modulus
        let (_, magnitude) = value.mod_floor(&modulus).into_parts();
        values.push(magnitude);
    }
    Ok(values)
}

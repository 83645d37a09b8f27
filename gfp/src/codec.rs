//! Conversion between big integers and MP-SPDZ gfp words.
//!
//! MP-SPDZ keeps every field element in Montgomery form `x · R mod N`. A
//! word is produced by scaling with R, serializing to 16 big-endian bytes and
//! rewriting those bytes into the runtime's limb layout; decoding runs the
//! same steps backwards and scales with R⁻¹.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::error::{GfpError, Result};
use crate::layout::{
    from_spdz_layout, from_word_be, to_spdz_layout, to_word_be, SHARE_WIDTH, WORD_WIDTH,
};
use crate::params::GfpParams;

/// A secret share as stored by MP-SPDZ: the share value and its MAC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GfpShare {
    pub value: BigUint,
    pub mac: BigUint,
}

/// Immutable codec for one MP-SPDZ prime field.
///
/// Holds the modulus N, the auxiliary modulus R and R⁻¹ mod N. The three
/// values are fixed at construction and the codec is freely shareable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfpCodec {
    prime: BigUint,
    r: BigUint,
    r_inv: BigUint,
}

impl GfpCodec {
    /// Build a codec from its three parameters.
    ///
    /// Only a zero modulus is rejected; `r_inv` is trusted to be the inverse
    /// of `r` modulo `prime`.
    pub fn new(prime: BigUint, r: BigUint, r_inv: BigUint) -> Result<Self> {
        if prime.is_zero() {
            return Err(GfpError::InvalidParameter {
                name: "prime",
                reason: "modulus must be positive".into(),
            });
        }
        Ok(Self { prime, r, r_inv })
    }

    /// Build a codec from configuration; every parameter must be present.
    pub fn from_params(params: &GfpParams) -> Result<Self> {
        let (prime, r, r_inv) = params.resolve()?;
        Self::new(prime, r, r_inv)
    }

    /// Modulus N.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Auxiliary modulus R.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Inverse of R modulo N.
    pub fn r_inv(&self) -> &BigUint {
        &self.r_inv
    }

    /// Encode `value` into its MP-SPDZ word.
    ///
    /// `value` must lie in `[0, prime]`; `prime` itself encodes like zero.
    ///
    /// ```
    /// use gfp::GfpCodec;
    /// use num_bigint::{BigInt, BigUint};
    ///
    /// let codec = GfpCodec::new(
    ///     "198766463529478683931867765928436695041".parse().unwrap(),
    ///     "141515903391459779531506841503331516415".parse().unwrap(),
    ///     "133854242216446749056083838363708373830".parse().unwrap(),
    /// ).unwrap();
    /// let gfp = codec.to_gfp(&BigInt::from(42)).unwrap();
    /// assert_eq!(codec.from_gfp(&gfp).unwrap(), BigUint::from(42u32));
    /// ```
    pub fn to_gfp(&self, value: &BigInt) -> Result<[u8; WORD_WIDTH]> {
        let prime = BigInt::from_biguint(Sign::Plus, self.prime.clone());
        if *value > prime {
            return Err(GfpError::ValueTooLarge {
                prime: self.prime.clone(),
                value: value.clone(),
            });
        }
        match value.to_biguint() {
            Some(unsigned) => Ok(self.encode_unchecked(&unsigned)),
            None => Err(GfpError::NegativeValue {
                value: value.clone(),
            }),
        }
    }

    /// Encode an unsigned `value`; only the upper bound can fail.
    pub fn to_gfp_unsigned(&self, value: &BigUint) -> Result<[u8; WORD_WIDTH]> {
        if *value > self.prime {
            return Err(GfpError::ValueTooLarge {
                prime: self.prime.clone(),
                value: BigInt::from_biguint(Sign::Plus, value.clone()),
            });
        }
        Ok(self.encode_unchecked(value))
    }

    /// Decode an MP-SPDZ word. Total for any 16-byte input; the result is
    /// always reduced into `[0, prime)`.
    pub fn from_gfp(&self, gfp: &[u8]) -> Result<BigUint> {
        let word: &[u8; WORD_WIDTH] =
            gfp.try_into().map_err(|_| GfpError::InvalidLength {
                expected: WORD_WIDTH,
                actual: gfp.len(),
            })?;
        Ok(self.decode_word(word))
    }

    /// Encode every value and concatenate the words.
    pub fn to_gfp_words(&self, values: &[BigInt]) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(values.len() * WORD_WIDTH);
        for value in values {
            buf.extend_from_slice(&self.to_gfp(value)?);
        }
        Ok(buf)
    }

    /// Decode a concatenated stream of words.
    pub fn from_gfp_words(&self, bytes: &[u8]) -> Result<Vec<BigUint>> {
        if bytes.len() % WORD_WIDTH != 0 {
            return Err(GfpError::InvalidStreamLength {
                width: WORD_WIDTH,
                actual: bytes.len(),
            });
        }
        Ok(bytes
            .chunks_exact(WORD_WIDTH)
            .map(|chunk| {
                let mut word = [0u8; WORD_WIDTH];
                word.copy_from_slice(chunk);
                self.decode_word(&word)
            })
            .collect())
    }

    /// Encode a share as value word followed by MAC word.
    pub fn to_gfp_share(&self, share: &GfpShare) -> Result<[u8; SHARE_WIDTH]> {
        let mut buf = [0u8; SHARE_WIDTH];
        buf[..WORD_WIDTH].copy_from_slice(&self.to_gfp_unsigned(&share.value)?);
        buf[WORD_WIDTH..].copy_from_slice(&self.to_gfp_unsigned(&share.mac)?);
        Ok(buf)
    }

    /// Decode a 32-byte share (value word, then MAC word).
    pub fn from_gfp_share(&self, bytes: &[u8]) -> Result<GfpShare> {
        if bytes.len() != SHARE_WIDTH {
            return Err(GfpError::InvalidLength {
                expected: SHARE_WIDTH,
                actual: bytes.len(),
            });
        }
        Ok(GfpShare {
            value: self.from_gfp(&bytes[..WORD_WIDTH])?,
            mac: self.from_gfp(&bytes[WORD_WIDTH..])?,
        })
    }

    // ========================================================================
    // Montgomery transform
    // ========================================================================

    /// x · R mod N
    fn montgomery_encode(&self, value: &BigUint) -> BigUint {
        (value * &self.r) % &self.prime
    }

    /// x · R⁻¹ mod N
    fn montgomery_decode(&self, mont: &BigUint) -> BigUint {
        (mont * &self.r_inv) % &self.prime
    }

    fn encode_unchecked(&self, value: &BigUint) -> [u8; WORD_WIDTH] {
        to_spdz_layout(&to_word_be(&self.montgomery_encode(value)))
    }

    fn decode_word(&self, gfp: &[u8; WORD_WIDTH]) -> BigUint {
        self.montgomery_decode(&from_word_be(&from_spdz_layout(gfp)))
    }
}

impl TryFrom<&GfpParams> for GfpCodec {
    type Error = GfpError;

    fn try_from(params: &GfpParams) -> Result<Self> {
        Self::from_params(params)
    }
}

impl TryFrom<GfpParams> for GfpCodec {
    type Error = GfpError;

    fn try_from(params: GfpParams) -> Result<Self> {
        Self::from_params(&params)
    }
}

// ============================================================================
// Tests
// ============================================================================

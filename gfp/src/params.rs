//! Codec parameters as supplied by an external configuration source.
//!
//! Values are decimal strings so they survive TOML/JSON without precision
//! loss. Nothing here checks that `r_inv` is really the inverse of `r`.

use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::{GfpError, Result};

/// Raw codec parameters. Every field is optional so that an absent value is
/// reported by name when a codec is built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GfpParams {
    /// Modulus N.
    pub prime: Option<String>,
    /// Auxiliary modulus R.
    pub r: Option<String>,
    /// Multiplicative inverse of R modulo N.
    pub r_inv: Option<String>,
}

impl GfpParams {
    pub fn new(prime: &BigUint, r: &BigUint, r_inv: &BigUint) -> Self {
        Self {
            prime: Some(prime.to_string()),
            r: Some(r.to_string()),
            r_inv: Some(r_inv.to_string()),
        }
    }

    /// Parse parameters from a TOML document.
    ///
    /// ```
    /// use gfp::GfpParams;
    ///
    /// let params = GfpParams::from_toml_str(r#"
    ///     prime = "198766463529478683931867765928436695041"
    ///     r = "141515903391459779531506841503331516415"
    ///     r_inv = "133854242216446749056083838363708373830"
    /// "#).unwrap();
    /// assert!(params.prime.is_some());
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GfpError::Config(e.to_string()))
    }

    /// Resolve the three values, in `(prime, r, r_inv)` order.
    pub(crate) fn resolve(&self) -> Result<(BigUint, BigUint, BigUint)> {
        Ok((
            parse_param("prime", self.prime.as_deref())?,
            parse_param("r", self.r.as_deref())?,
            parse_param("r_inv", self.r_inv.as_deref())?,
        ))
    }
}

fn parse_param(name: &'static str, raw: Option<&str>) -> Result<BigUint> {
    let raw = raw.ok_or(GfpError::MissingParameter(name))?;
    BigUint::from_str(raw.trim()).map_err(|e| GfpError::InvalidParameter {
        name,
        reason: format!("{raw:?} is not a non-negative decimal integer ({e})"),
    })
}

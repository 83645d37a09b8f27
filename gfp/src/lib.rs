//! Codec between big integers and the MP-SPDZ gfp word representation.
//!
//! A [`GfpCodec`] is configured with the runtime's prime N, auxiliary modulus
//! R and R⁻¹ mod N. [`GfpCodec::to_gfp`] turns a value in `[0, N]` into the
//! 16 bytes MP-SPDZ reads and writes; [`GfpCodec::from_gfp`] goes back.

pub mod codec;
pub mod error;
pub mod layout;
pub mod params;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use codec::{GfpCodec, GfpShare};
pub use error::{GfpError, Result};
pub use layout::{LIMB_WIDTH, SHARE_WIDTH, WORD_WIDTH};
pub use params::GfpParams;

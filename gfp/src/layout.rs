//! Byte layout of an MP-SPDZ gfp word.
//!
//! MP-SPDZ stores a 128-bit field element as two 8-byte limbs, each limb
//! little-endian, with the least significant limb first. The helpers below
//! move between that layout and a plain 16-byte big-endian integer. Both
//! reorderings are involutions, so the same functions serve encode and decode.

use num_bigint::BigUint;

/// Size of a limb in the MP-SPDZ runtime.
pub const LIMB_WIDTH: usize = 8;

/// Size of a word (one field element) in the MP-SPDZ runtime.
pub const WORD_WIDTH: usize = 2 * LIMB_WIDTH;

/// Size of a share (value, MAC) in the MP-SPDZ runtime.
pub const SHARE_WIDTH: usize = 2 * WORD_WIDTH;

const LIMBS_PER_WORD: usize = WORD_WIDTH / LIMB_WIDTH;

/// Returns a new vector holding `input` in reverse byte order.
pub fn reverse_bytes(input: &[u8]) -> Vec<u8> {
    input.iter().rev().copied().collect()
}

/// Reverses the byte order inside each 8-byte limb, leaving limb order as is.
///
/// Converts big-endian limbs to little-endian limbs and back.
pub fn invert_limb_endianness(input: &[u8; WORD_WIDTH]) -> [u8; WORD_WIDTH] {
    let mut fixed = [0u8; WORD_WIDTH];
    for i in 0..LIMBS_PER_WORD {
        let range = i * LIMB_WIDTH..(i + 1) * LIMB_WIDTH;
        fixed[range.clone()].copy_from_slice(&reverse_bytes(&input[range]));
    }
    fixed
}

/// Swaps the two limbs: `limb[0], limb[1]` becomes `limb[1], limb[0]`.
pub fn swap_limbs(input: &[u8; WORD_WIDTH]) -> [u8; WORD_WIDTH] {
    let mut swapped = [0u8; WORD_WIDTH];
    swapped[LIMB_WIDTH..].copy_from_slice(&input[..LIMB_WIDTH]);
    swapped[..LIMB_WIDTH].copy_from_slice(&input[LIMB_WIDTH..]);
    swapped
}

/// Serializes `value` as exactly [`WORD_WIDTH`] big-endian bytes.
///
/// Shorter encodings are left-padded with zeros; longer ones keep only the
/// low-order [`WORD_WIDTH`] bytes.
pub fn to_word_be(value: &BigUint) -> [u8; WORD_WIDTH] {
    let bytes = value.to_bytes_be();
    let mut word = [0u8; WORD_WIDTH];
    if bytes.len() >= WORD_WIDTH {
        word.copy_from_slice(&bytes[bytes.len() - WORD_WIDTH..]);
    } else {
        word[WORD_WIDTH - bytes.len()..].copy_from_slice(&bytes);
    }
    word
}

/// Reads a word as an unsigned big-endian integer.
pub fn from_word_be(word: &[u8; WORD_WIDTH]) -> BigUint {
    BigUint::from_bytes_be(word)
}

/// Converts a big-endian word into the MP-SPDZ limb layout.
pub fn to_spdz_layout(word: &[u8; WORD_WIDTH]) -> [u8; WORD_WIDTH] {
    swap_limbs(&invert_limb_endianness(word))
}

/// Converts an MP-SPDZ limb-layout word back into a big-endian word.
pub fn from_spdz_layout(gfp: &[u8; WORD_WIDTH]) -> [u8; WORD_WIDTH] {
    invert_limb_endianness(&swap_limbs(gfp))
}

// ============================================================================
// Tests
// ============================================================================

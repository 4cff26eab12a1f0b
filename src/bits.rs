//! Bitstring packing for byte-aligned storage
//!
//! A bitstring (`Vec<bool>`) is padded with zero bits on its
//! most-significant side until the length is a multiple of 8, then grouped
//! into bytes MSB-first. The padding length (0..=7) travels with the bytes
//! so the exact original bitstring can be recovered.

use crate::error::{HuffError, Result};

/// Pack a bitstring into bytes, returning the bytes and the padding length.
///
/// The padding length is `(8 - len mod 8) mod 8`; an empty bitstring packs
/// to no bytes with zero padding.
pub fn pack(bits: &[bool]) -> (Vec<u8>, u8) {
    let padding = ((8 - bits.len() % 8) % 8) as u8;
    let mut bytes = Vec::with_capacity((bits.len() + padding as usize) / 8);

    let mut current_byte = 0u8;
    let mut bit_pos = padding as usize;
    for &bit in bits {
        if bit {
            current_byte |= 1 << (7 - (bit_pos % 8));
        }
        bit_pos += 1;
        if bit_pos % 8 == 0 {
            bytes.push(current_byte);
            current_byte = 0;
        }
    }

    (bytes, padding)
}

/// Recover the exact bitstring packed into `bytes`.
///
/// Rejects padding values that cannot have come from [`pack`]: padding > 7,
/// padding with no bytes to strip it from, and nonzero bits inside the
/// padding region.
pub fn unpack(bytes: &[u8], padding: u8) -> Result<Vec<bool>> {
    if padding > 7 {
        return Err(HuffError::invalid_data(format!(
            "padding length {padding} out of range 0..=7"
        )));
    }
    if bytes.is_empty() {
        if padding != 0 {
            return Err(HuffError::invalid_data(
                "nonzero padding with no packed bytes",
            ));
        }
        return Ok(Vec::new());
    }

    let padding = padding as usize;
    // pack() always emits zero bits in the padding region; anything else
    // means the metadata and the payload disagree.
    if padding > 0 && bytes[0] >> (8 - padding) != 0 {
        return Err(HuffError::invalid_data(
            "nonzero bits inside the padding region",
        ));
    }

    let total_bits = bytes.len() * 8 - padding;
    let mut bits = Vec::with_capacity(total_bits);
    for i in 0..total_bits {
        let bit_index = i + padding;
        let byte = bytes[bit_index / 8];
        bits.push((byte >> (7 - (bit_index % 8))) & 1 == 1);
    }
    Ok(bits)
}

//! Encoding and decoding against a Huffman tree
//!
//! The encoder concatenates table codes; the decoder replays bits down the
//! tree, descending left on '0' and right on '1'. The two paths share the
//! tree's bit convention, so `decode(root, encode(text, codes))` returns
//! `text` whenever every symbol of `text` has a code.

use crate::error::{HuffError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};
use std::collections::HashMap;

/// Encode `data` by concatenating the code of each symbol.
///
/// Fails with [`HuffError::UnknownSymbol`] on the first byte that has no
/// entry in the table; nothing is silently skipped or defaulted.
pub fn encode(data: &[u8], codes: &HashMap<u8, Vec<bool>>) -> Result<Vec<bool>> {
    let mut bits = Vec::new();
    for &symbol in data {
        match codes.get(&symbol) {
            Some(code) => bits.extend_from_slice(code),
            None => return Err(HuffError::unknown_symbol(symbol)),
        }
    }
    Ok(bits)
}

/// Decode a bitstream by walking the tree from `root`.
///
/// Every emitted symbol resets the walk to the root; the stream must end
/// exactly at the root boundary or decoding fails with
/// [`HuffError::MalformedStream`]. A lone-leaf root (single-symbol alphabet)
/// emits its symbol once per '0' bit.
pub fn decode(root: &HuffmanNode, bits: &[bool]) -> Result<Vec<u8>> {
    // Single-symbol tree: codewords are the one-bit code '0'.
    if let HuffmanNode::Leaf { symbol, .. } = root {
        let mut output = Vec::with_capacity(bits.len());
        for &bit in bits {
            if bit {
                return Err(HuffError::malformed_stream(
                    "unexpected '1' bit in a single-symbol stream",
                ));
            }
            output.push(*symbol);
        }
        return Ok(output);
    }

    let mut output = Vec::new();
    let mut current = root;
    for &bit in bits {
        current = match current {
            HuffmanNode::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            HuffmanNode::Leaf { .. } => {
                return Err(HuffError::malformed_stream(
                    "descent continued past a leaf node",
                ))
            }
        };
        if let HuffmanNode::Leaf { symbol, .. } = current {
            output.push(*symbol);
            current = root;
        }
    }

    if !std::ptr::eq(current, root) {
        return Err(HuffError::malformed_stream(
            "stream ends mid-codeword, not on a symbol boundary",
        ));
    }
    Ok(output)
}

/// Huffman encoder owning its tree
#[derive(Debug)]
pub struct HuffmanEncoder {
    tree: HuffmanTree,
}

impl HuffmanEncoder {
    /// Build an encoder from sample data (counts frequencies, builds the tree).
    pub fn new(data: &[u8]) -> Result<Self> {
        Ok(Self {
            tree: HuffmanTree::from_data(data)?,
        })
    }

    /// Build an encoder around an existing tree.
    pub fn from_tree(tree: HuffmanTree) -> Self {
        Self { tree }
    }

    /// Encode `data` into a bitstream.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<bool>> {
        encode(data, self.tree.codes())
    }

    /// The underlying tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Estimated compressed/original size ratio for `data`.
    ///
    /// Symbols without a code are ignored here; `encode` is where missing
    /// symbols are an error.
    pub fn estimate_compression_ratio(&self, data: &[u8]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        let total_bits: usize = data
            .iter()
            .filter_map(|&symbol| self.tree.code(symbol))
            .map(|code| code.len())
            .sum();
        total_bits.div_ceil(8) as f64 / data.len() as f64
    }
}

/// Huffman decoder owning its tree
#[derive(Debug)]
pub struct HuffmanDecoder {
    tree: HuffmanTree,
}

impl HuffmanDecoder {
    /// Build a decoder around a tree.
    pub fn new(tree: HuffmanTree) -> Self {
        Self { tree }
    }

    /// Decode a bitstream back into bytes.
    pub fn decode(&self, bits: &[bool]) -> Result<Vec<u8>> {
        decode(self.tree.root(), bits)
    }

    /// The underlying tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_aaabbc() {
        let encoder = HuffmanEncoder::new(b"aaabbc").unwrap();
        let bits = encoder.encode(b"aaabbc").unwrap();
        // a="0" three times, b="11" twice, c="10"
        assert_eq!(bits.len(), 3 + 4 + 2);

        let decoder = HuffmanDecoder::new(encoder.tree().clone());
        assert_eq!(decoder.decode(&bits).unwrap(), b"aaabbc");
    }

    #[test]
    fn test_roundtrip_longer_text() {
        let data = b"it was the best of times, it was the worst of times";
        let encoder = HuffmanEncoder::new(data).unwrap();
        let bits = encoder.encode(data).unwrap();
        let decoder = HuffmanDecoder::new(encoder.tree().clone());
        assert_eq!(decoder.decode(&bits).unwrap(), data.to_vec());
    }

    #[test]
    fn test_encode_empty_text() {
        let encoder = HuffmanEncoder::new(b"abc").unwrap();
        assert!(encoder.encode(b"").unwrap().is_empty());
    }

    #[test]
    fn test_decode_empty_stream() {
        let encoder = HuffmanEncoder::new(b"abc").unwrap();
        let decoder = HuffmanDecoder::new(encoder.tree().clone());
        assert!(decoder.decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_symbol() {
        let encoder = HuffmanEncoder::new(b"a").unwrap();
        match encoder.encode(b"ab") {
            Err(HuffError::UnknownSymbol { symbol }) => assert_eq!(symbol, b'b'),
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_stream_is_malformed() {
        let encoder = HuffmanEncoder::new(b"aaabbc").unwrap();
        let bits = encoder.encode(b"b").unwrap();
        assert_eq!(bits.len(), 2);

        let decoder = HuffmanDecoder::new(encoder.tree().clone());
        // Dropping the final bit strands the walk mid-codeword
        assert!(matches!(
            decoder.decode(&bits[..1]),
            Err(HuffError::MalformedStream { .. })
        ));
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let encoder = HuffmanEncoder::new(b"zzzz").unwrap();
        let bits = encoder.encode(b"zzzz").unwrap();
        assert_eq!(bits, vec![false; 4]);

        let decoder = HuffmanDecoder::new(encoder.tree().clone());
        assert_eq!(decoder.decode(&bits).unwrap(), b"zzzz");
    }

    #[test]
    fn test_single_symbol_rejects_one_bits() {
        let encoder = HuffmanEncoder::new(b"z").unwrap();
        let decoder = HuffmanDecoder::new(encoder.tree().clone());
        assert!(matches!(
            decoder.decode(&[false, true]),
            Err(HuffError::MalformedStream { .. })
        ));
    }

    #[test]
    fn test_decode_arbitrary_bits_returns_result() {
        // Any bit pattern must come back as Ok or Err, never a panic
        let tree = crate::tree::HuffmanTree::from_data(b"abcde").unwrap();
        for pattern in 0u32..256 {
            for len in 0..=8 {
                let bits: Vec<bool> = (0..len).map(|i| (pattern >> i) & 1 == 1).collect();
                let _ = decode(tree.root(), &bits);
            }
        }
    }

    #[test]
    fn test_compression_ratio_on_skewed_data() {
        let data = b"aaaaaaaaaaaaaaaabbbbcccc";
        let encoder = HuffmanEncoder::new(data).unwrap();
        assert!(encoder.estimate_compression_ratio(data) < 1.0);
    }
}

//! Huffman tree construction and prefix-code generation
//!
//! This module provides the tree builder and code table generator:
//! - greedy bottom-up construction over a deterministic min-heap
//! - pre-order code assignment ('0' on left descent, '1' on right)
//! - a compact code-table serialization for the container format
//!
//! Construction is reproducible: leaves enter the heap in ascending symbol
//! order and frequency ties resolve by insertion order, so the same
//! frequency map always yields the same tree.

use crate::error::{HuffError, Result};
use crate::heap::NodeHeap;
use std::collections::HashMap;

/// Node in the Huffman tree
///
/// A leaf carries exactly one symbol and its frequency; an internal node
/// carries the summed frequency of its two children. The builder never
/// produces a node with exactly one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// Terminal node carrying one symbol
    Leaf {
        /// The symbol this leaf encodes
        symbol: u8,
        /// Occurrence count of the symbol
        frequency: u64,
    },
    /// Interior node owning two subtrees
    Internal {
        /// Sum of the children's frequencies
        frequency: u64,
        /// Subtree reached on a '0' bit
        left: Box<HuffmanNode>,
        /// Subtree reached on a '1' bit
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Frequency of this node (leaf count or children's sum).
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }

    /// True for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// Huffman tree with its generated code table
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: HuffmanNode,
    codes: HashMap<u8, Vec<bool>>,
    max_code_length: usize,
}

impl HuffmanTree {
    /// Build a tree from a symbol→count map.
    ///
    /// Fails with [`HuffError::EmptyInput`] when the map is empty. A
    /// single-symbol map yields a lone leaf whose code is the single bit '0'.
    pub fn from_frequencies(frequencies: &HashMap<u8, u64>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffError::EmptyInput);
        }

        // Ascending symbol order fixes the insertion sequence, which in turn
        // fixes the tie-break inside the heap.
        let mut symbols: Vec<u8> = frequencies.keys().copied().collect();
        symbols.sort_unstable();

        let mut heap = NodeHeap::with_capacity(symbols.len());
        for symbol in symbols {
            heap.insert(HuffmanNode::Leaf {
                symbol,
                frequency: frequencies[&symbol],
            });
        }

        // Degenerate alphabet: the tree is the leaf itself and the code is
        // a single '0' bit. A zero-length code cannot be decoded.
        if heap.len() == 1 {
            let root = heap.extract_min()?;
            let mut codes = HashMap::new();
            if let HuffmanNode::Leaf { symbol, .. } = &root {
                codes.insert(*symbol, vec![false]);
            }
            return Ok(Self {
                root,
                codes,
                max_code_length: 1,
            });
        }

        while heap.len() > 1 {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            heap.insert(HuffmanNode::Internal {
                frequency: left.frequency() + right.frequency(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        let root = heap.extract_min()?;

        let mut codes = HashMap::new();
        let mut max_code_length = 0;
        Self::assign_codes(&root, Vec::new(), &mut codes, &mut max_code_length);

        log::debug!(
            "built huffman tree: {} symbols, max code length {}",
            codes.len(),
            max_code_length
        );

        Ok(Self {
            root,
            codes,
            max_code_length,
        })
    }

    /// Count frequencies in `data` and build the tree from them.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        Self::from_frequencies(&crate::freq::count_frequencies(data))
    }

    /// Pre-order walk assigning '0' to left descents and '1' to right.
    fn assign_codes(
        node: &HuffmanNode,
        prefix: Vec<bool>,
        codes: &mut HashMap<u8, Vec<bool>>,
        max_length: &mut usize,
    ) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                *max_length = (*max_length).max(prefix.len());
                codes.insert(*symbol, prefix);
            }
            HuffmanNode::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(false);
                Self::assign_codes(left, left_prefix, codes, max_length);

                let mut right_prefix = prefix;
                right_prefix.push(true);
                Self::assign_codes(right, right_prefix, codes, max_length);
            }
        }
    }

    /// The code for `symbol`, if present.
    pub fn code(&self, symbol: u8) -> Option<&Vec<bool>> {
        self.codes.get(&symbol)
    }

    /// The full symbol→code table.
    pub fn codes(&self) -> &HashMap<u8, Vec<bool>> {
        &self.codes
    }

    /// Root node, for decoding.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Length of the longest code in the table.
    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    /// Serialize the code table for storage.
    ///
    /// Layout: u16 LE entry count, then per entry a symbol byte, a code
    /// length byte, and the code bits packed MSB-first into ⌈len/8⌉ bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut result = Vec::new();
        result.extend_from_slice(&(self.codes.len() as u16).to_le_bytes());

        // Fixed iteration order keeps the serialized form reproducible.
        let mut symbols: Vec<u8> = self.codes.keys().copied().collect();
        symbols.sort_unstable();

        for symbol in symbols {
            let code = &self.codes[&symbol];
            result.push(symbol);
            result.push(code.len() as u8);

            let mut current_byte = 0u8;
            for (i, &bit) in code.iter().enumerate() {
                if bit {
                    current_byte |= 1 << (7 - (i % 8));
                }
                if i % 8 == 7 {
                    result.push(current_byte);
                    current_byte = 0;
                }
            }
            if code.len() % 8 != 0 {
                result.push(current_byte);
            }
        }

        result
    }

    /// Rebuild a tree from a serialized code table.
    ///
    /// The reconstructed leaves carry zero frequencies; decoding only needs
    /// the tree shape. Truncated input, duplicate symbols, and code tables
    /// that do not describe a full binary tree are rejected.
    pub fn deserialize(data: &[u8]) -> Result<Self> {
        if data.len() < 2 {
            return Err(HuffError::invalid_data("code table data too short"));
        }

        let entry_count = u16::from_le_bytes([data[0], data[1]]) as usize;
        if entry_count == 0 {
            return Err(HuffError::invalid_data("code table has no entries"));
        }

        let mut codes = HashMap::new();
        let mut max_code_length = 0;
        let mut offset = 2;

        for _ in 0..entry_count {
            if offset + 2 > data.len() {
                return Err(HuffError::invalid_data("truncated code table entry"));
            }
            let symbol = data[offset];
            let code_length = data[offset + 1] as usize;
            offset += 2;

            if code_length == 0 {
                return Err(HuffError::invalid_data(format!(
                    "zero-length code for symbol 0x{symbol:02x}"
                )));
            }

            let byte_count = code_length.div_ceil(8);
            if offset + byte_count > data.len() {
                return Err(HuffError::invalid_data("truncated code bits"));
            }

            let mut code = Vec::with_capacity(code_length);
            for i in 0..code_length {
                let byte = data[offset + i / 8];
                code.push((byte >> (7 - (i % 8))) & 1 == 1);
            }
            offset += byte_count;

            max_code_length = max_code_length.max(code_length);
            if codes.insert(symbol, code).is_some() {
                return Err(HuffError::invalid_data(format!(
                    "duplicate symbol 0x{symbol:02x} in code table"
                )));
            }
        }

        let root = Self::tree_from_codes(&codes)?;
        Ok(Self {
            root,
            codes,
            max_code_length,
        })
    }

    /// Build the decoding tree directly from a symbol→code table.
    fn tree_from_codes(codes: &HashMap<u8, Vec<bool>>) -> Result<HuffmanNode> {
        // Single-symbol table: the tree is the leaf itself.
        if codes.len() == 1 {
            let (&symbol, code) = codes.iter().next().unwrap();
            if code != &vec![false] {
                return Err(HuffError::invalid_data(
                    "single-symbol table must use the one-bit code '0'",
                ));
            }
            return Ok(HuffmanNode::Leaf {
                symbol,
                frequency: 0,
            });
        }

        let mut root = Slot::Empty;
        let mut symbols: Vec<u8> = codes.keys().copied().collect();
        symbols.sort_unstable();
        for symbol in symbols {
            root.insert(symbol, &codes[&symbol])?;
        }
        root.into_node()
    }
}

/// Partially built decoding tree used while replaying code paths.
enum Slot {
    Empty,
    Leaf(u8),
    Internal(Box<Slot>, Box<Slot>),
}

impl Slot {
    fn insert(&mut self, symbol: u8, code: &[bool]) -> Result<()> {
        match code.split_first() {
            None => match self {
                Slot::Empty => {
                    *self = Slot::Leaf(symbol);
                    Ok(())
                }
                _ => Err(HuffError::invalid_data(format!(
                    "code collision at symbol 0x{symbol:02x}"
                ))),
            },
            Some((&bit, rest)) => {
                if let Slot::Empty = self {
                    *self = Slot::Internal(Box::new(Slot::Empty), Box::new(Slot::Empty));
                }
                match self {
                    Slot::Internal(left, right) => {
                        let child = if bit { right } else { left };
                        child.insert(symbol, rest)
                    }
                    _ => Err(HuffError::invalid_data(format!(
                        "code for symbol 0x{symbol:02x} passes through a leaf"
                    ))),
                }
            }
        }
    }

    fn into_node(self) -> Result<HuffmanNode> {
        match self {
            Slot::Empty => Err(HuffError::invalid_data(
                "code table does not describe a full binary tree",
            )),
            Slot::Leaf(symbol) => Ok(HuffmanNode::Leaf {
                symbol,
                frequency: 0,
            }),
            Slot::Internal(left, right) => {
                let left = left.into_node()?;
                let right = right.into_node()?;
                Ok(HuffmanNode::Internal {
                    frequency: left.frequency() + right.frequency(),
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
        }
    }
}

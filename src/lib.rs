//! # Huffpack: Deterministic Huffman Coding
//!
//! This crate provides a byte-oriented Huffman codec built from small,
//! separately testable pieces:
//!
//! - **Frequency counting**: exact symbol→count maps over byte input
//! - **Priority structure**: a min-heap with a reproducible tie-break
//! - **Tree construction**: greedy bottom-up merging, deterministic across runs
//! - **Prefix codes**: '0' on left descent, '1' on right, leaves only
//! - **Bit packing**: byte alignment with recoverable padding metadata
//! - **Container format**: a self-describing file layout carrying the code
//!   table and padding alongside the payload
//!
//! ## Quick Start
//!
//! ```rust
//! use huffpack::{HuffmanDecoder, HuffmanEncoder};
//!
//! let data = b"this is an example";
//! let encoder = HuffmanEncoder::new(data).unwrap();
//! let bits = encoder.encode(data).unwrap();
//!
//! let decoder = HuffmanDecoder::new(encoder.tree().clone());
//! assert_eq!(decoder.decode(&bits).unwrap(), data.to_vec());
//!
//! // One-call container round trip
//! let container = huffpack::compress(data).unwrap();
//! assert_eq!(huffpack::decompress(&container).unwrap(), data.to_vec());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod bits;
pub mod codec;
pub mod error;
pub mod freq;
pub mod heap;
pub mod stream;
pub mod tree;

pub use bits::{pack, unpack};
pub use codec::{decode, encode, HuffmanDecoder, HuffmanEncoder};
pub use error::{HuffError, Result};
pub use freq::count_frequencies;
pub use heap::NodeHeap;
pub use stream::{compress, compress_file, decompress, decompress_file};
pub use tree::{HuffmanNode, HuffmanTree};

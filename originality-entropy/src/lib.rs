// originality-entropy/src/lib.rs
//! Numeric kernels shared by the originality scoring pipeline.
//!
//! Everything here operates on plain counts, slices and sparse vectors so the
//! crate stays `no_std` (with `alloc`). Tokenization and vocabulary building
//! live in `originality-core`.
#![no_std]

extern crate alloc; 

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod statistics;
pub mod similarity;

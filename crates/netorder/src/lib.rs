//! Portable big-endian encoding of fixed-width scalars.
//!
//! netorder writes 8/16/32-bit integers to byte channels in network byte
//! order so that files and messages built from them read back identically on
//! any host.
//!
//! # Crate Structure
//!
//! - [`marshal`] — Scalar marshalling, unaligned access and byte channels
//!
//! The `netorder` command-line tool is built with the `cli` feature.

/// Re-export marshalling types.
pub mod marshal {
    pub use netorder_marshal::*;
}

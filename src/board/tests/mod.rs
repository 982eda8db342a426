//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation node counts
//! - `draw.rs` - Insufficient material and stalemate
//! - `apply.rs` - Move application and its bookkeeping
//! - `edge_cases.rs` - Pins, castling restrictions and other special positions
//! - `proptest.rs` - Property-based tests over random playouts

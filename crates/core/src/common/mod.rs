//! Common types shared across the simulator.
//!
//! This module collects the byte-address newtype and the error types used by
//! every other component.

/// Byte address type and line arithmetic.
pub mod addr;
/// Simulator error and result types.
pub mod error;

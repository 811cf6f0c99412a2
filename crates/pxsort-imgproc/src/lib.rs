#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// luminance computation module.
pub mod color;

/// module containing parallization utilities.
pub mod parallel;

/// scanline pixel sorting module.
pub mod sort;

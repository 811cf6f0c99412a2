#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures,
/// and format-specific errors.
pub mod error;

/// Supported file formats and extension validation.
pub mod format;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any`] for automatic format detection.
pub mod functional;

/// Internal utility functions for image bit depth conversion.
mod conv_utils;

pub use crate::error::IoError;
pub use crate::format::ImageFormat;
pub use crate::functional::GenericImage;

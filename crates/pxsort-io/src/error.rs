/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("Unsupported image format: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pxsort_image::ImageError),

    /// Error to decode or encode the image.
    #[error("Failed to encode or decode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// The content is not one of the supported formats.
    #[error("Unsupported image content, expected jpeg or png")]
    UnsupportedImageFormat,

    /// The decoded color layout cannot be represented.
    #[error("Unsupported color type: {0}")]
    UnsupportedColorType(String),

    /// The pixel buffer does not match the image dimensions.
    #[error("Pixel buffer does not match a {0}x{1} image")]
    InvalidBufferSize(usize, usize),
}

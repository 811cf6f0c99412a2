/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination images differ in size.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel ({0}, {1}) is out of bounds for an image of {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the pixel slice has the wrong number of channels.
    #[error("Pixel has {0} channels, expected {1}")]
    InvalidPixelChannels(usize, usize),

    /// Error when an operation needs more channels than the image has.
    #[error("Operation needs at least {1} channels, image has {0}")]
    UnsupportedChannelCount(usize, usize),

    /// Error raised while scheduling work across rows.
    #[error("Failed to execute in parallel: {0}")]
    ParallelError(String),
}

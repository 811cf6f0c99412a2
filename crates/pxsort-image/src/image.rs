use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pxsort_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for image channel types.
///
/// Channels wider than 8 bits are compared through their 8-bit-equivalent
/// magnitude, i.e. the value shifted right by `BITS - 8`.
pub trait ImageDtype:
    Copy + Default + Send + Sync + num_traits::Unsigned + num_traits::AsPrimitive<u32>
{
    /// Number of bits of a single channel value.
    const BITS: u32;

    /// Reduce the channel value to its 8-bit-equivalent magnitude.
    fn to_8bit(self) -> u8 {
        (<Self as num_traits::AsPrimitive<u32>>::as_(self) >> (Self::BITS - 8)) as u8
    }

    /// Widen the channel value to the full 16-bit range, e.g. `0xab` becomes `0xabab`.
    fn to_16bit(self) -> u32;

    /// Scale the channel by `alpha` and reduce it to 8 bits.
    ///
    /// The product is taken in the 16-bit range and truncated, so an opaque
    /// channel keeps its [`ImageDtype::to_8bit`] value while a transparent
    /// one becomes zero.
    fn premultiplied_8bit(self, alpha: Self) -> u8 {
        ((self.to_16bit() * alpha.to_16bit() / 0xffff) >> 8) as u8
    }
}

impl ImageDtype for u8 {
    const BITS: u32 = 8;

    fn to_8bit(self) -> u8 {
        self
    }

    fn to_16bit(self) -> u32 {
        self as u32 * 0x101
    }
}

impl ImageDtype for u16 {
    const BITS: u32 = 16;

    fn to_16bit(self) -> u32 {
        self as u32
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored row-major in a single buffer of
/// `height * width * CHANNELS` values, so row `y` spans
/// `[y * width * CHANNELS, (y + 1) * width * CHANNELS)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxsort_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = size.width * size.height * CHANNELS;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value every channel of every pixel is set to.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Number of values in a single row (`width * CHANNELS`).
    pub fn row_stride(&self) -> usize {
        self.size.width * CHANNELS
    }

    /// Get the raw pixel data as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the raw pixel data as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the channel values of row `y`, or `None` if out of bounds.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height() {
            return None;
        }
        let stride = self.row_stride();
        Some(&self.data[y * stride..(y + 1) * stride])
    }

    /// Get the channel values of the pixel at `(x, y)`.
    ///
    /// # Returns
    ///
    /// A slice of `CHANNELS` values, or `None` if the coordinates are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use pxsort_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 3, 4, 5, 6],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 0), Some(&[4u8, 5, 6][..]));
    /// assert_eq!(image.get_pixel(2, 0), None);
    /// ```
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = (y * self.width() + x) * CHANNELS;
        Some(&self.data[offset..offset + CHANNELS])
    }

    /// Overwrite the pixel at `(x, y)` with the given channel values.
    ///
    /// # Errors
    ///
    /// Fails if the coordinates are out of bounds or `pixel` does not hold
    /// exactly `CHANNELS` values.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: &[T]) -> Result<(), ImageError>
    where
        T: Copy,
    {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        if pixel.len() != CHANNELS {
            return Err(ImageError::InvalidPixelChannels(pixel.len(), CHANNELS));
        }

        let offset = (y * self.width() + x) * CHANNELS;
        self.data[offset..offset + CHANNELS].copy_from_slice(pixel);

        Ok(())
    }
}

use pxsort_image::{Image, ImageDtype, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Define the RGB weights for the luminance computation (BT.709).
const RW: f64 = 0.2126;
const GW: f64 = 0.7152;
const BW: f64 = 0.0722;

/// Compute the luminance of a single pixel using the formula:
///
/// Y = 0.2126 * R + 0.7152 * G + 0.0722 * B
///
/// Every channel is reduced to its 8-bit-equivalent value first, so a 16-bit
/// channel `v` contributes `v >> 8`. When a fourth (alpha) channel is present
/// the color channels are premultiplied by it, so translucent pixels are
/// weighed as if composited over black.
///
/// Precondition: the pixel must have at least 3 channels.
///
/// # Example
///
/// ```
/// use pxsort_imgproc::color::luminance;
///
/// assert_eq!(luminance(&[0u8, 0, 0]), 0.0);
/// assert!((luminance(&[0u16, 0xff00, 0]) - 0.7152 * 255.0).abs() < 1e-9);
/// assert_eq!(luminance(&[255u8, 255, 255, 0]), 0.0);
/// ```
#[inline]
pub fn luminance<T: ImageDtype>(pixel: &[T]) -> f64 {
    let [r, g, b] = match pixel.get(3) {
        Some(&alpha) => [0, 1, 2].map(|i| pixel[i].premultiplied_8bit(alpha)),
        None => [0, 1, 2].map(|i| pixel[i].to_8bit()),
    };
    RW * r as f64 + GW * g as f64 + BW * b as f64
}

/// Compute the luminance map of an RGB(A) image.
///
/// # Arguments
///
/// * `src` - The input image with at least 3 channels.
/// * `dst` - The output single channel luminance map.
/// * `strategy` - How rows are scheduled.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use pxsort_image::{Image, ImageSize};
/// use pxsort_imgproc::color::luminance_image;
/// use pxsort_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0, 0, 0, 0, 255, 0],
/// )
/// .unwrap();
///
/// let mut luma = Image::<f64, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// luminance_image(&image, &mut luma, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(luma.as_slice()[0], 0.0);
/// ```
pub fn luminance_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<f64, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if C < 3 {
        return Err(ImageError::UnsupportedChannelCount(C, 3));
    }

    parallel::par_iter_rows(src, dst, strategy, |src_row, dst_row| {
        src_row
            .chunks_exact(C)
            .zip(dst_row.iter_mut())
            .for_each(|(pixel, luma)| *luma = luminance(pixel));
    })
}

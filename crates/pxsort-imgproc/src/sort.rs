use pxsort_image::{Image, ImageDtype, ImageError};

use crate::color::luminance;
use crate::parallel::{self, ExecutionStrategy};

/// Sort a single scanline of `C`-channel pixels.
///
/// Pixels whose luminance (see [`luminance`]) is at or above `threshold` are
/// sorted by ascending luminance and written first. Pixels below the threshold follow in their
/// original left-to-right order. The sort is stable, so pixels with equal
/// luminance keep their relative order.
///
/// Precondition: both rows have the same length, a multiple of `C`, and `C >= 3`.
/// Pure white has a luminance just below 255, so at threshold 255 no pixel
/// is sorted.
///
/// # Example
///
/// ```
/// use pxsort_imgproc::sort::sort_row;
///
/// // gray pixels with luminance 200, 50, 220 and 10
/// let src = [200u8, 200, 200, 50, 50, 50, 220, 220, 220, 10, 10, 10];
/// let mut dst = [0u8; 12];
///
/// sort_row::<u8, 3>(&src, &mut dst, 100);
/// assert_eq!(dst, [200, 200, 200, 220, 220, 220, 50, 50, 50, 10, 10, 10]);
/// ```
pub fn sort_row<T, const C: usize>(src_row: &[T], dst_row: &mut [T], threshold: u8)
where
    T: ImageDtype,
{
    debug_assert!(C >= 3, "pixels need at least 3 channels, got {}", C);
    debug_assert_eq!(src_row.len(), dst_row.len(), "row length mismatch");
    debug_assert_eq!(src_row.len() % C, 0, "row length is not a multiple of {}", C);

    let threshold = threshold as f64;

    let mut sorted: Vec<(f64, &[T])> = Vec::with_capacity(src_row.len() / C);
    let mut unsorted: Vec<&[T]> = Vec::new();

    for pixel in src_row.chunks_exact(C) {
        let luma = luminance(pixel);
        if luma >= threshold {
            sorted.push((luma, pixel));
        } else {
            unsorted.push(pixel);
        }
    }

    // stable: equal luminance keeps input order
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let ordered = sorted.into_iter().map(|(_, pixel)| pixel).chain(unsorted);
    for (dst_pixel, src_pixel) in dst_row.chunks_exact_mut(C).zip(ordered) {
        dst_pixel.copy_from_slice(src_pixel);
    }
}

/// Pixel sort every row of an image against a luminance threshold.
///
/// Each output row is a permutation of the matching input row, see
/// [`sort_row`]. Rows are independent and are scheduled according to
/// `strategy`.
///
/// # Arguments
///
/// * `src` - The input RGB(A) image.
/// * `dst` - The output image, same size and layout as `src`.
/// * `threshold` - The luminance cutoff in `[0, 255]`.
/// * `strategy` - How rows are scheduled.
///
/// # Errors
///
/// Fails if the images differ in size, if the image has fewer than 3
/// channels, or if the execution strategy cannot be honored.
///
/// # Example
///
/// ```
/// use pxsort_image::{Image, ImageSize};
/// use pxsort_imgproc::parallel::ExecutionStrategy;
/// use pxsort_imgproc::sort::pixel_sort;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![30, 30, 30, 40, 40, 40, 20, 20, 20],
/// )
/// .unwrap();
///
/// let mut sorted = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// pixel_sort(&image, &mut sorted, 0, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(sorted.as_slice(), &[20, 20, 20, 30, 30, 30, 40, 40, 40]);
/// ```
pub fn pixel_sort<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: u8,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if C < 3 {
        return Err(ImageError::UnsupportedChannelCount(C, 3));
    }

    parallel::par_iter_rows(src, dst, strategy, |src_row, dst_row| {
        sort_row::<T, C>(src_row, dst_row, threshold)
    })
}

/// Pixel sort an image into a newly allocated image.
///
/// The input is left untouched. Rows run on the global thread pool.
///
/// # Errors
///
/// Fails if the image has fewer than 3 channels.
pub fn pixel_sorted<T, const C: usize>(
    src: &Image<T, C>,
    threshold: u8,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    let mut dst = Image::from_size_val(src.size(), T::default())?;
    pixel_sort(src, &mut dst, threshold, ExecutionStrategy::default())?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxsort_image::ImageSize;

    fn gray_row(values: &[u8]) -> Image<u8, 3> {
        let data = values.iter().flat_map(|&v| [v, v, v]).collect();
        Image::new(
            ImageSize {
                width: values.len(),
                height: 1,
            },
            data,
        )
        .unwrap()
    }

    fn gray_values(image: &Image<u8, 3>) -> Vec<u8> {
        image.as_slice().chunks_exact(3).map(|p| p[0]).collect()
    }

    #[test]
    fn sorts_bright_first_then_dark_unsorted() -> Result<(), ImageError> {
        let image = gray_row(&[200, 50, 220, 10]);
        let sorted = pixel_sorted(&image, 100)?;
        assert_eq!(gray_values(&sorted), vec![200, 220, 50, 10]);
        Ok(())
    }

    #[test]
    fn threshold_zero_sorts_whole_row() -> Result<(), ImageError> {
        let image = gray_row(&[30, 40, 20]);
        let sorted = pixel_sorted(&image, 0)?;
        assert_eq!(gray_values(&sorted), vec![20, 30, 40]);
        Ok(())
    }

    #[test]
    fn single_pixel_is_unchanged() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([1, 1].into(), vec![12, 250, 7])?;
        for threshold in [0, 100, 255] {
            assert_eq!(pixel_sorted(&image, threshold)?, image);
        }
        Ok(())
    }

    #[test]
    fn all_below_threshold_is_identity() -> Result<(), ImageError> {
        let image = gray_row(&[90, 10, 50, 99]);
        assert_eq!(pixel_sorted(&image, 100)?, image);
        Ok(())
    }

    #[test]
    fn equal_luminance_keeps_input_order() -> Result<(), ImageError> {
        // all pixels sit exactly on the threshold, alpha tells them apart
        let image = Image::<u8, 4>::new(
            [4, 1].into(),
            vec![0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 2],
        )?;
        assert_eq!(pixel_sorted(&image, 0)?, image);
        Ok(())
    }

    #[test]
    fn ties_above_threshold_are_stable() -> Result<(), ImageError> {
        // 201 at alpha 254 and 200 at alpha 255 both weigh as 200
        let image = Image::<u8, 4>::new(
            [3, 1].into(),
            vec![201, 201, 201, 254, 150, 150, 150, 255, 200, 200, 200, 255],
        )?;
        let sorted = pixel_sorted(&image, 100)?;
        assert_eq!(
            sorted.as_slice(),
            &[150, 150, 150, 255, 201, 201, 201, 254, 200, 200, 200, 255]
        );
        Ok(())
    }

    #[test]
    fn alpha_travels_with_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            [3, 1].into(),
            vec![250, 250, 250, 255, 20, 20, 20, 20, 120, 120, 120, 250],
        )?;
        let sorted = pixel_sorted(&image, 100)?;
        assert_eq!(
            sorted.as_slice(),
            &[120, 120, 120, 250, 250, 250, 250, 255, 20, 20, 20, 20]
        );
        Ok(())
    }

    #[test]
    fn translucent_pixels_sort_by_premultiplied_luminance() -> Result<(), ImageError> {
        // weighed over black: about 50 and 10, both below the threshold
        let image = Image::<u8, 4>::new(
            [2, 1].into(),
            vec![50, 50, 50, 255, 255, 255, 255, 10],
        )?;
        assert_eq!(pixel_sorted(&image, 100)?, image);

        // at threshold 0 the faint white pixel goes first
        let sorted = pixel_sorted(&image, 0)?;
        assert_eq!(sorted.as_slice(), &[255, 255, 255, 10, 50, 50, 50, 255]);
        Ok(())
    }

    #[test]
    fn white_is_not_sorted_at_threshold_255() -> Result<(), ImageError> {
        let image = gray_row(&[0, 255, 10]);
        assert_eq!(pixel_sorted(&image, 255)?, image);

        let image = Image::<u8, 3>::new([2, 1].into(), vec![255, 255, 255, 0, 0, 0])?;
        assert_eq!(pixel_sorted(&image, 255)?, image);
        Ok(())
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "row length mismatch")]
    fn sort_row_rejects_mismatched_rows() {
        let src = [1u8, 2, 3, 4, 5, 6];
        let mut dst = [0u8; 3];
        sort_row::<u8, 3>(&src, &mut dst, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not a multiple")]
    fn sort_row_rejects_partial_pixels() {
        let src = [1u8, 2, 3, 4];
        let mut dst = [0u8; 4];
        sort_row::<u8, 3>(&src, &mut dst, 0);
    }

    #[test]
    fn sorts_u16_by_high_byte() -> Result<(), ImageError> {
        // 0x64ff and 0x6400 both reduce to 100, so they tie and keep their order
        let image = Image::<u16, 3>::new(
            [4, 1].into(),
            vec![
                0xc8ff, 0xc8ff, 0xc8ff, 0x1000, 0x1000, 0x1000, //
                0x64ff, 0x64ff, 0x64ff, 0x6400, 0x6400, 0x6400,
            ],
        )?;
        let sorted = pixel_sorted(&image, 50)?;
        assert_eq!(
            sorted.as_slice(),
            &[
                0x64ff, 0x64ff, 0x64ff, 0x6400, 0x6400, 0x6400, //
                0xc8ff, 0xc8ff, 0xc8ff, 0x1000, 0x1000, 0x1000,
            ]
        );
        Ok(())
    }

    #[test]
    fn rows_are_sorted_independently() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            [2, 2].into(),
            vec![200, 200, 200, 100, 100, 100, 10, 10, 10, 5, 5, 5],
        )?;
        let sorted = pixel_sorted(&image, 0)?;
        assert_eq!(
            sorted.as_slice(),
            &[100, 100, 100, 200, 200, 200, 5, 5, 5, 10, 10, 10]
        );
        Ok(())
    }

    #[test]
    fn empty_image_is_noop() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([0, 3].into(), vec![])?;
        let sorted = pixel_sorted(&image, 42)?;
        assert_eq!(sorted.size(), image.size());
        Ok(())
    }

    #[test]
    fn rejects_size_mismatch() -> Result<(), ImageError> {
        let image = gray_row(&[1, 2, 3]);
        let mut dst = Image::<u8, 3>::from_size_val([2, 1].into(), 0)?;
        let res = pixel_sort(&image, &mut dst, 0, ExecutionStrategy::Serial);
        assert_eq!(res, Err(ImageError::InvalidImageSize(3, 1, 2, 1)));
        Ok(())
    }

    #[test]
    fn rejects_gray_images() -> Result<(), ImageError> {
        let image = Image::<u8, 2>::from_size_val([2, 2].into(), 0)?;
        assert_eq!(
            pixel_sorted(&image, 0),
            Err(ImageError::UnsupportedChannelCount(2, 3))
        );
        Ok(())
    }
}

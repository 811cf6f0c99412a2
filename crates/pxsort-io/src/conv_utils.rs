use pxsort_image::{Image, ImageDtype, ImageError};

/// Reduce any RGB(A) image to 8-bit RGB.
///
/// Wider channels keep their high byte. An alpha channel is composited over
/// black, i.e. the color channels are premultiplied by it and then dropped.
pub fn rgb8_from_image<T, const C: usize>(image: &Image<T, C>) -> Result<Image<u8, 3>, ImageError>
where
    T: ImageDtype,
{
    if C < 3 {
        return Err(ImageError::UnsupportedChannelCount(C, 3));
    }

    let mut data = Vec::with_capacity(image.width() * image.height() * 3);
    for pixel in image.as_slice().chunks_exact(C) {
        let rgb = match pixel.get(3) {
            Some(&alpha) => [0, 1, 2].map(|i| pixel[i].premultiplied_8bit(alpha)),
            None => [0, 1, 2].map(|i| pixel[i].to_8bit()),
        };
        data.extend_from_slice(&rgb);
    }

    Image::new(image.size(), data)
}

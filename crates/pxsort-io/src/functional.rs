use std::path::Path;

use pxsort_image::{Image, ImageSize};

use crate::conv_utils::rgb8_from_image;
use crate::error::IoError;
use crate::format::ImageFormat;

/// A decoded image in one of the layouts the pixel sorter works on.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
    /// 16-bit RGB image
    Rgb16(Image<u16, 3>),
    /// 16-bit RGB image with alpha channel
    Rgba16(Image<u16, 4>),
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::Rgb8(img) => img.size(),
            GenericImage::Rgba8(img) => img.size(),
            GenericImage::Rgb16(img) => img.size(),
            GenericImage::Rgba16(img) => img.size(),
        }
    }

    /// Short name of the pixel layout, e.g. `rgba16`.
    pub fn layout(&self) -> &'static str {
        match self {
            GenericImage::Rgb8(_) => "rgb8",
            GenericImage::Rgba8(_) => "rgba8",
            GenericImage::Rgb16(_) => "rgb16",
            GenericImage::Rgba16(_) => "rgba16",
        }
    }

    /// Convert to 8-bit RGB, keeping the high byte of 16-bit channels and
    /// compositing alpha over black.
    pub fn to_rgb8(&self) -> Result<Image<u8, 3>, IoError> {
        let rgb = match self {
            GenericImage::Rgb8(img) => img.clone(),
            GenericImage::Rgba8(img) => rgb8_from_image(img)?,
            GenericImage::Rgb16(img) => rgb8_from_image(img)?,
            GenericImage::Rgba16(img) => rgb8_from_image(img)?,
        };
        Ok(rgb)
    }
}

/// Reads an image from the given file path.
///
/// The format is guessed from the file content. Grayscale images are
/// expanded to RGB(A), 16-bit images keep their depth.
///
/// # Arguments
///
/// * `file_path` - The path to a valid jpeg or png file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let bytes = std::fs::read(&file_path)?;
    decode_image_any(&bytes)
}

/// Decodes a jpeg or png image from raw bytes.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the encoded file.
pub fn decode_image_any(bytes: &[u8]) -> Result<GenericImage, IoError> {
    let reader = image::ImageReader::new(std::io::Cursor::new(bytes)).with_guessed_format()?;

    match reader.format() {
        Some(image::ImageFormat::Jpeg) | Some(image::ImageFormat::Png) => {}
        _ => return Err(IoError::UnsupportedImageFormat),
    }

    let img = reader.decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        image::ColorType::L8 | image::ColorType::Rgb8 => {
            GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?)
        }
        image::ColorType::La8 | image::ColorType::Rgba8 => {
            GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?)
        }
        image::ColorType::L16 | image::ColorType::Rgb16 => {
            GenericImage::Rgb16(Image::new(size, img.into_rgb16().into_raw())?)
        }
        image::ColorType::La16 | image::ColorType::Rgba16 => {
            GenericImage::Rgba16(Image::new(size, img.into_rgba16().into_raw())?)
        }
        other => return Err(IoError::UnsupportedColorType(format!("{other:?}"))),
    };

    Ok(image)
}

/// Writes an image to the given file path.
///
/// The encoding follows the file extension. PNG keeps the pixel layout and
/// bit depth; JPEG is written as 8-bit RGB with alpha composited over black.
///
/// # Arguments
///
/// * `file_path` - The destination, ending in `.jpg`, `.jpeg` or `.png`.
/// * `image` - The image to encode.
pub fn write_image(file_path: impl AsRef<Path>, image: &GenericImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let format = ImageFormat::from_path(file_path)?;

    match (format, image) {
        (ImageFormat::Jpeg, _) => {
            let rgb = image.to_rgb8()?;
            save_buffer::<image::Rgb<u8>>(file_path, rgb.size(), rgb.into_vec(), format)
        }
        (ImageFormat::Png, GenericImage::Rgb8(img)) => {
            save_buffer::<image::Rgb<u8>>(file_path, img.size(), img.as_slice().to_vec(), format)
        }
        (ImageFormat::Png, GenericImage::Rgba8(img)) => {
            save_buffer::<image::Rgba<u8>>(file_path, img.size(), img.as_slice().to_vec(), format)
        }
        (ImageFormat::Png, GenericImage::Rgb16(img)) => {
            save_buffer::<image::Rgb<u16>>(file_path, img.size(), img.as_slice().to_vec(), format)
        }
        (ImageFormat::Png, GenericImage::Rgba16(img)) => save_buffer::<image::Rgba<u16>>(
            file_path,
            img.size(),
            img.as_slice().to_vec(),
            format,
        ),
    }
}

fn save_buffer<P>(
    file_path: &Path,
    size: ImageSize,
    data: Vec<P::Subpixel>,
    format: ImageFormat,
) -> Result<(), IoError>
where
    P: image::Pixel + image::PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
{
    let buffer =
        image::ImageBuffer::<P, Vec<P::Subpixel>>::from_raw(size.width as u32, size.height as u32, data)
            .ok_or(IoError::InvalidBufferSize(size.width, size.height))?;

    buffer.save_with_format(file_path, format.into())?;

    Ok(())
}

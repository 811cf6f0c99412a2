use std::path::PathBuf;

use pxsort::image::{Image, ImageDtype, ImageError};
use pxsort::imgproc::parallel::ExecutionStrategy;
use pxsort::imgproc::sort::pixel_sort;
use pxsort::io::functional as F;
use pxsort::io::{GenericImage, ImageFormat, IoError};

/// Errors reported by the command line tool.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// The input or output file name is empty.
    #[error("Input and output file names are required")]
    MissingFileName,

    /// The threshold does not fit in `[0, 255]`.
    #[error("Luminance threshold must be in the range 0-255, got {0}")]
    InvalidThreshold(u32),

    /// The input extension is not a supported format.
    #[error("Unsupported input image format: {}", .0.display())]
    UnsupportedInputFormat(PathBuf),

    /// The output extension is not a supported format.
    #[error("Unsupported output image format: {}", .0.display())]
    UnsupportedOutputFormat(PathBuf),

    /// Reading or writing the image failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Sorting the image failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Validated settings for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub threshold: u8,
    pub strategy: ExecutionStrategy,
}

impl Config {
    /// Validate the raw arguments.
    ///
    /// Checks run in order: file names, threshold range, input format,
    /// output format. Nothing is read from disk.
    pub fn new(
        input: PathBuf,
        output: PathBuf,
        threshold: u32,
        threads: usize,
    ) -> Result<Self, CliError> {
        if input.as_os_str().is_empty() || output.as_os_str().is_empty() {
            return Err(CliError::MissingFileName);
        }

        let threshold =
            u8::try_from(threshold).map_err(|_| CliError::InvalidThreshold(threshold))?;

        if ImageFormat::from_path(&input).is_err() {
            return Err(CliError::UnsupportedInputFormat(input));
        }

        if ImageFormat::from_path(&output).is_err() {
            return Err(CliError::UnsupportedOutputFormat(output));
        }

        let strategy = match threads {
            0 => ExecutionStrategy::ParallelRows,
            n => ExecutionStrategy::Fixed(n),
        };

        Ok(Self {
            input,
            output,
            threshold,
            strategy,
        })
    }
}

/// Read, sort and write the image described by `config`.
pub fn run(config: &Config) -> Result<(), CliError> {
    log::info!("Opening file: {}", config.input.display());
    let image = F::read_image_any(&config.input)?;

    let size = image.size();
    log::info!(
        "Sorting {}x{} image rightwards based on threshold {}",
        size.width,
        size.height,
        config.threshold
    );
    log::debug!("layout {}, strategy {:?}", image.layout(), config.strategy);

    let sorted = sort_generic(&image, config.threshold, config.strategy)?;

    F::write_image(&config.output, &sorted)?;
    log::info!("Saved image to: {}", config.output.display());

    Ok(())
}

/// Pixel sort whichever layout the decoder produced.
fn sort_generic(
    image: &GenericImage,
    threshold: u8,
    strategy: ExecutionStrategy,
) -> Result<GenericImage, ImageError> {
    let sorted = match image {
        GenericImage::Rgb8(img) => GenericImage::Rgb8(sort_with(img, threshold, strategy)?),
        GenericImage::Rgba8(img) => GenericImage::Rgba8(sort_with(img, threshold, strategy)?),
        GenericImage::Rgb16(img) => GenericImage::Rgb16(sort_with(img, threshold, strategy)?),
        GenericImage::Rgba16(img) => GenericImage::Rgba16(sort_with(img, threshold, strategy)?),
    };
    Ok(sorted)
}

fn sort_with<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    threshold: u8,
    strategy: ExecutionStrategy,
) -> Result<Image<T, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), T::default())?;
    pixel_sort(src, &mut dst, threshold, strategy)?;
    Ok(dst)
}

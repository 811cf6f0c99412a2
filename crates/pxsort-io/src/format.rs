use std::path::Path;

use crate::error::IoError;

/// The image file formats that can be read and written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG, `.jpg` or `.jpeg`.
    Jpeg,
    /// PNG, `.png`.
    Png,
}

impl ImageFormat {
    /// Resolve the format from the extension of a file path.
    ///
    /// The extension is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidFileExtension`] if the path has no extension
    /// or the extension is not one of `jpg`, `jpeg` or `png`.
    ///
    /// # Example
    ///
    /// ```
    /// use pxsort_io::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_path("out.PNG").unwrap(), ImageFormat::Png);
    /// assert_eq!(ImageFormat::from_path("dog.jpeg").unwrap(), ImageFormat::Jpeg);
    /// assert!(ImageFormat::from_path("dog.gif").is_err());
    /// ```
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let ext = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
            Some("png") => Ok(ImageFormat::Png),
            _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ImageFormat;
    use crate::error::IoError;

    #[test]
    fn accepts_known_extensions() -> Result<(), IoError> {
        assert_eq!(ImageFormat::from_path("a.jpg")?, ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("a.JPG")?, ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("dir/a.Jpeg")?, ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("a.png")?, ImageFormat::Png);
        Ok(())
    }

    #[test]
    fn rejects_unknown_extensions() {
        for name in ["a.gif", "a", "png", "a.png.txt", ""] {
            assert!(
                matches!(
                    ImageFormat::from_path(name),
                    Err(IoError::InvalidFileExtension(_))
                ),
                "{name}"
            );
        }
    }
}

// tierpix/src/processors/loader.rs
use crate::core::{Result, TierPixError};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Clone)]
pub struct Loader {
    max_dimensions: Option<(u32, u32)>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: Some((100_000, 100_000)),
        }
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| TierPixError::ProcessingError(format!("Failed to decode image: {}", e)))?;

        let (width, height) = image.dimensions();
        if let Some((max_w, max_h)) = self.max_dimensions {
            if width > max_w || height > max_h {
                return Err(TierPixError::InvalidParameter(format!(
                    "Image dimensions {}x{} exceed maximum {}x{}",
                    width, height, max_w, max_h
                )));
            }
        }

        log::debug!(
            "Loaded {}: {}x{} pixels, color: {:?}",
            path.display(),
            width,
            height,
            image.color()
        );

        Ok(image)
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if path.metadata()?.len() == 0 {
            return Err(TierPixError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn rejects_empty_file() {
        let temp = TempDir::new().unwrap();
        let empty = temp.child("empty.png");
        empty.touch().unwrap();

        let result = Loader::new().load(empty.path());
        assert!(matches!(result, Err(TierPixError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_oversized_image() {
        let temp = TempDir::new().unwrap();
        let source = temp.child("wide.png");
        image::RgbImage::new(20, 4).save(source.path()).unwrap();

        let loader = Loader {
            max_dimensions: Some((10, 10)),
        };
        let result = loader.load(source.path());
        assert!(result.is_err());
    }

    #[test]
    fn decodes_garbage_as_error() {
        let temp = TempDir::new().unwrap();
        let bogus = temp.child("bogus.png");
        bogus.write_str("not an image").unwrap();

        let result = Loader::new().load(bogus.path());
        assert!(matches!(result, Err(TierPixError::ProcessingError(_))));
    }
}

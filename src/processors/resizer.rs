// tierpix/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Shrinks `image` to at most `max_width` pixels wide. Height follows the
    /// aspect ratio; images already narrower are returned as-is.
    pub fn fit_width(&self, image: DynamicImage, max_width: u32) -> DynamicImage {
        let (orig_width, orig_height) = image.dimensions();
        let (width, height) = Self::target_dimensions(orig_width, orig_height, max_width);

        if width == orig_width && height == orig_height {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image;
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            orig_width,
            orig_height,
            width,
            height
        );

        image.resize_exact(width, height, self.filter_type())
    }

    pub fn target_dimensions(orig_width: u32, orig_height: u32, max_width: u32) -> (u32, u32) {
        if max_width == 0 || orig_width <= max_width {
            return (orig_width, orig_height);
        }

        let ratio = max_width as f64 / orig_width as f64;
        let height = (orig_height as f64 * ratio).round() as u32;
        (max_width, height.max(1))
    }

    fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

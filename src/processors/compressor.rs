// tierpix/src/processors/compressor.rs
use crate::core::{OutputFormat, Result, TierPixError};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::io::Cursor;
use std::path::Path;

pub struct Compressor {
    format: OutputFormat,
    optimize_png: bool,
}

impl Compressor {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            optimize_png: true,
        }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn save(&self, image: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
        log::debug!(
            "Saving image to {} as {:?}, quality: {}",
            path.display(),
            self.format,
            quality
        );

        let data = self.compress_to_bytes(image, quality)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn compress_to_bytes(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        match self.format {
            OutputFormat::WebP => self.encode_webp(image, quality),
            OutputFormat::Jpeg => self.encode_jpeg(image, quality),
            OutputFormat::Png => self.encode_png(image),
        }
    }

    fn encode_webp(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        let rgba = image.to_rgba8();
        let encoded = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
            .encode_simple(false, quality.min(100) as f32)
            .map_err(|e| {
                TierPixError::ProcessingError(format!(
                    "WebP encoding of {}x{} image failed: {:?}",
                    rgba.width(),
                    rgba.height(),
                    e
                ))
            })?;

        if encoded.is_empty() {
            return Err(TierPixError::ProcessingError(
                "WebP encoder produced no data".to_string(),
            ));
        }

        Ok(encoded.to_vec())
    }

    fn encode_jpeg(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        // JPEG has no alpha channel.
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
        rgb.write_with_encoder(encoder)?;
        Ok(buffer.into_inner())
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png)?;

        if !self.optimize_png {
            return Ok(buffer.into_inner());
        }

        optimize_from_memory(&buffer.into_inner(), &Options::default())
            .map_err(|e| TierPixError::ProcessingError(format!("PNG optimization failed: {}", e)))
    }
}

// tierpix/src/core/processor.rs
use super::{BatchConfig, OutputFormat, ResizeAlgorithm, Result};
use crate::processors::{Compressor, Loader, Resizer};
use std::path::Path;

/// Resize + re-encode capability used by the batch converter.
pub trait Codec {
    /// Extension of the files this codec writes, without the dot.
    fn output_extension(&self) -> &'static str;

    /// Decodes `source`, shrinks it to at most `max_width` pixels wide and
    /// writes it to `dest` at `quality`.
    fn encode(&self, source: &Path, dest: &Path, max_width: u32, quality: u8) -> Result<()>;
}

pub struct ImageCodec {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageCodec {
    pub fn new(format: OutputFormat, algorithm: ResizeAlgorithm) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(algorithm),
            compressor: Compressor::new(format),
        }
    }

    pub fn from_config(config: &BatchConfig) -> Self {
        let mut codec = Self::new(config.format, config.algorithm);
        codec.compressor = codec.compressor.with_png_optimization(config.optimize_png);
        codec
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new(OutputFormat::default(), ResizeAlgorithm::default())
    }
}

impl Codec for ImageCodec {
    fn output_extension(&self) -> &'static str {
        self.compressor.format().extension()
    }

    fn encode(&self, source: &Path, dest: &Path, max_width: u32, quality: u8) -> Result<()> {
        let image = self.loader.load(source)?;
        let image = self.resizer.fit_width(image, max_width);
        self.compressor.save(&image, dest, quality)
    }
}

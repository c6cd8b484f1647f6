// tierpix/src/core/mod.rs
pub mod processor;
pub mod tiers;

use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Source extensions stripped when naming derivatives.
pub const KNOWN_SOURCE_EXTENSIONS: [&str; 8] =
    ["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

pub const DEFAULT_INPUT_DIR: &str = "public/images";

/// Rough size of the original, unconverted image set.
pub const DEFAULT_BASELINE_BYTES: u64 = 12 * 1024 * 1024;

const MAX_DIMENSION: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    #[default]
    Lanczos3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    WebP,
    Jpeg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// One derivative to produce: a filename suffix, a maximum width and an
/// encoder quality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSpec {
    pub suffix: String,
    pub width: u32,
    pub quality: u8,
}

impl SizeSpec {
    pub fn new(suffix: impl Into<String>, width: u32, quality: u8) -> Self {
        Self {
            suffix: suffix.into(),
            width,
            quality,
        }
    }
}

/// A named group of source files sharing the same size specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub name: String,
    pub files: Vec<String>,
    pub sizes: Vec<SizeSpec>,
}

impl Tier {
    pub fn new<S: Into<String>>(name: impl Into<String>, files: Vec<S>, sizes: Vec<SizeSpec>) -> Self {
        Self {
            name: name.into(),
            files: files.into_iter().map(Into::into).collect(),
            sizes,
        }
    }

    /// Number of derivatives this tier yields when every source exists.
    pub fn planned_outputs(&self) -> usize {
        self.files.len() * self.sizes.len()
    }
}

/// Running tally of one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionResult {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub bytes_written: u64,
}

impl ConversionResult {
    pub fn record_success(&mut self, bytes: Option<u64>) {
        self.attempted += 1;
        self.succeeded += 1;
        self.bytes_written += bytes.unwrap_or(0);
    }

    pub fn record_failure(&mut self) {
        self.attempted += 1;
        self.failed += 1;
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub tiers: Vec<Tier>,
    pub format: OutputFormat,
    pub algorithm: ResizeAlgorithm,
    /// Run PNG output through oxipng.
    pub optimize_png: bool,
    pub baseline_bytes: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            tiers: tiers::default_tiers(),
            format: OutputFormat::default(),
            algorithm: ResizeAlgorithm::default(),
            optimize_png: true,
            baseline_bytes: DEFAULT_BASELINE_BYTES,
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for tier in &self.tiers {
            if tier.name.trim().is_empty() {
                return Err(TierPixError::InvalidParameter(
                    "Tier name cannot be empty".to_string(),
                ));
            }

            if !seen.insert(tier.name.as_str()) {
                return Err(TierPixError::InvalidParameter(format!(
                    "Duplicate tier name: {}",
                    tier.name
                )));
            }

            for spec in &tier.sizes {
                if spec.suffix.trim().is_empty() {
                    return Err(TierPixError::InvalidParameter(format!(
                        "Empty size suffix in tier '{}'",
                        tier.name
                    )));
                }

                if spec.width == 0 || spec.width > MAX_DIMENSION {
                    return Err(TierPixError::InvalidParameter(format!(
                        "Width for '{}-{}' must be between 1 and 100,000 pixels",
                        tier.name, spec.suffix
                    )));
                }

                if spec.quality > 100 {
                    return Err(TierPixError::InvalidParameter(format!(
                        "Quality for '{}-{}' must be between 0 and 100",
                        tier.name, spec.suffix
                    )));
                }
            }
        }

        Ok(())
    }

    /// Keeps only the named tiers, preserving table order.
    pub fn retain_tiers(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }

        if let Some(unknown) = names
            .iter()
            .find(|name| !self.tiers.iter().any(|tier| &tier.name == *name))
        {
            return Err(TierPixError::InvalidParameter(format!(
                "Unknown tier: {}",
                unknown
            )));
        }

        self.tiers.retain(|tier| names.contains(&tier.name));
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum TierPixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, TierPixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BatchConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_width() {
        let config = BatchConfig {
            tiers: vec![Tier::new("t", vec!["a.png"], vec![SizeSpec::new("small", 0, 80)])],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TierPixError::InvalidParameter(_))
        ));
    }

    #[test]
    fn rejects_quality_above_100() {
        let config = BatchConfig {
            tiers: vec![Tier::new("t", vec!["a.png"], vec![SizeSpec::new("small", 10, 101)])],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_tiers() {
        let tier = Tier::new("t", Vec::<String>::new(), vec![]);
        let config = BatchConfig {
            tiers: vec![tier.clone(), tier],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn retain_keeps_table_order() {
        let mut config = BatchConfig::default();
        config
            .retain_tiers(&["review".to_string(), "large".to_string()])
            .unwrap();
        let names: Vec<_> = config.tiers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["large", "review"]);
    }

    #[test]
    fn retain_rejects_unknown_tier() {
        let mut config = BatchConfig::default();
        assert!(config.retain_tiers(&["hero".to_string()]).is_err());
    }

    #[test]
    fn tally_counts_attempts() {
        let mut result = ConversionResult::default();
        result.record_success(Some(10));
        result.record_failure();
        result.record_success(None);
        result.record_skip();

        assert_eq!(result.attempted, 3);
        assert_eq!(result.succeeded + result.failed, result.attempted);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.bytes_written, 10);
    }
}

// tierpix/src/cli.rs
use crate::core::{
    BatchConfig, OutputFormat, ResizeAlgorithm, Result, DEFAULT_BASELINE_BYTES, DEFAULT_INPUT_DIR,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tierpix", version, about = "Resize tiered image sets into web derivatives")]
pub struct Cli {
    /// Directory holding the source images; outputs are written next to them
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Webp)]
    pub format: Format,

    /// Resize filter
    #[arg(short, long, value_enum, default_value_t = Algorithm::Lanczos3)]
    pub algorithm: Algorithm,

    /// Only convert the named tier (repeatable)
    #[arg(short, long = "tier", value_name = "NAME")]
    pub tiers: Vec<String>,

    /// Estimated size of the original images, used for the savings report
    #[arg(long, default_value_t = DEFAULT_BASELINE_BYTES)]
    pub baseline_bytes: u64,

    /// Write PNG output without oxipng optimization
    #[arg(long)]
    pub no_png_optimize: bool,

    /// Print the tier table and exit
    #[arg(long)]
    pub list: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Webp,
    Jpeg,
    Png,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Webp => OutputFormat::WebP,
            Format::Jpeg => OutputFormat::Jpeg,
            Format::Png => OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algo: Algorithm) -> Self {
        match algo {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl Cli {
    /// Default tier table with command-line overrides applied.
    pub fn to_config(&self) -> Result<BatchConfig> {
        let mut config = BatchConfig {
            input_dir: self.input_dir.clone(),
            format: self.format.into(),
            algorithm: self.algorithm.into(),
            optimize_png: !self.no_png_optimize,
            baseline_bytes: self.baseline_bytes,
            ..Default::default()
        };
        config.retain_tiers(&self.tiers)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["tierpix"]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.input_dir, PathBuf::from("public/images"));
        assert_eq!(config.format, OutputFormat::WebP);
        assert_eq!(config.tiers.len(), 3);
        assert_eq!(config.baseline_bytes, DEFAULT_BASELINE_BYTES);
        assert!(config.optimize_png);
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "tierpix", "-i", "/tmp/img", "-f", "png", "-t", "review", "--baseline-bytes", "42",
            "--no-png-optimize",
        ]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/tmp/img"));
        assert_eq!(config.format, OutputFormat::Png);
        assert!(!config.optimize_png);
        assert_eq!(config.tiers.len(), 1);
        assert_eq!(config.tiers[0].name, "review");
        assert_eq!(config.baseline_bytes, 42);
    }

    #[test]
    fn unknown_tier_fails() {
        let cli = Cli::parse_from(["tierpix", "--tier", "hero"]);
        assert!(cli.to_config().is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

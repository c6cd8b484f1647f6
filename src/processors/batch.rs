// tierpix/src/processors/batch.rs
use crate::core::processor::{Codec, ImageCodec};
use crate::core::{BatchConfig, ConversionResult, Result, SizeSpec, Tier, TierPixError};
use crate::utils::{
    calculate_savings, directory_output_size, display_size, exists, file_size, output_file_name,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Outcome of a full run: the tally plus the directory-wide size report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub result: ConversionResult,
    /// Every output-format file in the input directory, not only this run's.
    pub directory_bytes: u64,
    pub baseline_bytes: u64,
}

impl BatchSummary {
    pub fn savings_percent(&self) -> f64 {
        calculate_savings(self.baseline_bytes, self.directory_bytes)
    }
}

pub struct BatchConverter<C: Codec = ImageCodec> {
    config: BatchConfig,
    codec: C,
    show_progress: bool,
}

impl BatchConverter<ImageCodec> {
    pub fn new(config: BatchConfig) -> Self {
        let codec = ImageCodec::from_config(&config);
        Self::with_codec(config, codec)
    }
}

impl<C: Codec> BatchConverter<C> {
    pub fn with_codec(config: BatchConfig, codec: C) -> Self {
        Self {
            config,
            codec,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Converts every configured tier and reports the resulting directory size.
    pub fn run(&self) -> Result<BatchSummary> {
        self.config.validate()?;
        self.validate_input_dir()?;

        let result = self.run_batch(&self.config.tiers);

        let input_dir = &self.config.input_dir;
        let directory_bytes = directory_output_size(input_dir, self.codec.output_extension());

        Ok(BatchSummary {
            result,
            directory_bytes,
            baseline_bytes: self.config.baseline_bytes,
        })
    }

    /// Walks tiers, files and size specs in order. Per-item failures only
    /// touch the tally.
    pub fn run_batch(&self, tiers: &[Tier]) -> ConversionResult {
        let total: usize = tiers.iter().map(Tier::planned_outputs).sum();
        let pb = self.create_progress_bar(total);
        let mut result = ConversionResult::default();

        for tier in tiers {
            pb.suspend(|| {
                log::info!(
                    "Tier '{}': {} files x {} sizes",
                    tier.name,
                    tier.files.len(),
                    tier.sizes.len()
                )
            });

            for file in &tier.files {
                self.convert_file(tier, file, &pb, &mut result);
            }
        }

        pb.finish_with_message(format!(
            "{} converted, {} failed, {} skipped",
            result.succeeded, result.failed, result.skipped
        ));

        result
    }

    fn convert_file(&self, tier: &Tier, file: &str, pb: &ProgressBar, result: &mut ConversionResult) {
        let source = self.config.input_dir.join(file);

        if !exists(&source) {
            pb.suspend(|| log::warn!("Skipping {}: source not found", source.display()));
            result.record_skip();
            pb.inc(tier.sizes.len() as u64);
            return;
        }

        let source_size = file_size(&source);
        pb.suspend(|| log::info!("Processing {} ({})", file, display_size(source_size)));

        for spec in &tier.sizes {
            self.convert_size(&source, file, spec, pb, result);
            pb.inc(1);
        }
    }

    fn convert_size(
        &self,
        source: &Path,
        file: &str,
        spec: &SizeSpec,
        pb: &ProgressBar,
        result: &mut ConversionResult,
    ) {
        let output_name = output_file_name(file, &spec.suffix, self.codec.output_extension());
        let dest = self.config.input_dir.join(&output_name);

        match self.codec.encode(source, &dest, spec.width, spec.quality) {
            Ok(()) => {
                let size = file_size(&dest);
                pb.suspend(|| {
                    log::info!(
                        "  {} ({}px, q{}): {}",
                        output_name,
                        spec.width,
                        spec.quality,
                        display_size(size)
                    )
                });
                result.record_success(size);
            }
            Err(e) => {
                pb.suspend(|| log::error!("  Failed to create {}: {}", output_name, e));
                result.record_failure();
            }
        }
    }

    fn validate_input_dir(&self) -> Result<()> {
        let input_dir = &self.config.input_dir;

        if !input_dir.exists() {
            return Err(TierPixError::InvalidParameter(format!(
                "Input directory does not exist: {}",
                input_dir.display()
            )));
        }

        if !input_dir.is_dir() {
            return Err(TierPixError::InvalidParameter(format!(
                "Input path is not a directory: {}",
                input_dir.display()
            )));
        }

        Ok(())
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records calls and writes a fixed payload instead of encoding.
    struct RecordingCodec {
        calls: RefCell<Vec<(PathBuf, u32, u8)>>,
    }

    impl Codec for RecordingCodec {
        fn output_extension(&self) -> &'static str {
            "webp"
        }

        fn encode(&self, _source: &Path, dest: &Path, max_width: u32, quality: u8) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((dest.to_path_buf(), max_width, quality));
            std::fs::write(dest, b"payload")?;
            Ok(())
        }
    }

    #[test]
    fn visits_pairs_in_table_order() {
        let temp = assert_fs::TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.png"), b"x").unwrap();
        std::fs::write(temp.path().join("b.png"), b"x").unwrap();

        let tiers = vec![Tier::new(
            "t",
            vec!["a.png", "missing.png", "b.png"],
            vec![SizeSpec::new("s", 10, 50), SizeSpec::new("m", 20, 60)],
        )];
        let config = BatchConfig {
            input_dir: temp.path().to_path_buf(),
            tiers: tiers.clone(),
            ..Default::default()
        };
        let codec = RecordingCodec {
            calls: RefCell::new(Vec::new()),
        };
        let converter = BatchConverter::with_codec(config, codec);

        let result = converter.run_batch(&tiers);

        let names: Vec<_> = converter
            .codec
            .calls
            .borrow()
            .iter()
            .map(|(p, _, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a-s.webp", "a-m.webp", "b-s.webp", "b-m.webp"]);
        assert_eq!(result.attempted, 4);
        assert_eq!(result.succeeded, 4);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.bytes_written, 4 * 7);
    }

    #[test]
    fn summary_savings_use_baseline() {
        let summary = BatchSummary {
            result: ConversionResult::default(),
            directory_bytes: 250,
            baseline_bytes: 1000,
        };
        assert_eq!(summary.savings_percent(), 75.0);
    }
}

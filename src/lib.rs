pub mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Algorithm, Cli, Format};
pub use crate::core::processor::{Codec, ImageCodec};
pub use crate::core::tiers::default_tiers;
pub use crate::core::{
    BatchConfig, ConversionResult, OutputFormat, ResizeAlgorithm, Result,
    SizeSpec, Tier, TierPixError, DEFAULT_BASELINE_BYTES, DEFAULT_INPUT_DIR,
};
pub use processors::{BatchConverter, BatchSummary, Compressor, Loader, Resizer};
pub use utils::{
    calculate_savings, directory_output_size, file_size, format_file_size, output_file_name,
};

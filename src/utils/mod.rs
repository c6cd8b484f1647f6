// tierpix/src/utils/mod.rs
use crate::core::KNOWN_SOURCE_EXTENSIONS;
use std::path::Path;
use walkdir::WalkDir;

/// Builds `{stem}-{suffix}.{extension}` from a source filename. Only known
/// image extensions are stripped from the source name.
pub fn output_file_name(source: &str, suffix: &str, extension: &str) -> String {
    let stem = match source.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && KNOWN_SOURCE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) =>
        {
            stem
        }
        _ => source,
    };

    format!("{}-{}.{}", stem, suffix, extension)
}

/// True only for regular files; a directory named like a source does not count.
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Byte size of `path`, or `None` if it cannot be read.
pub fn file_size(path: &Path) -> Option<u64> {
    match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.len()),
        Err(e) => {
            log::debug!("Cannot stat {}: {}", path.display(), e);
            None
        }
    }
}

pub fn display_size(size: Option<u64>) -> String {
    size.map(format_file_size)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Total size of every `extension` file directly inside `dir`.
pub fn directory_output_size(dir: &Path, extension: &str) -> u64 {
    WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

pub fn calculate_savings(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }

    let savings = (original_size as f64 - new_size as f64) / original_size as f64 * 100.0;
    savings.clamp(0.0, 100.0)
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

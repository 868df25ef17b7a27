use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use super::PrepError;

pub const SMOOTHING_ALPHA: f32 = 0.3;
pub const SMOOTHING_BETA: f32 = 0.7;

const INDEX_PLACEHOLDER: &str = "{}";

// "{}" becomes the index; without it, "_<index>" goes before the extension when count > 1
pub fn render_output_path(template: &str, index: usize, count: usize) -> PathBuf {
    if template.contains(INDEX_PLACEHOLDER) {
        return PathBuf::from(template.replace(INDEX_PLACEHOLDER, &index.to_string()));
    }

    let path = PathBuf::from(template);
    if count <= 1 {
        return path;
    }

    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index),
    };
    path.with_file_name(file_name)
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), PrepError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn calculate_progress_fraction(current: usize, total: usize) -> f32 {
    if total > 0 {
        current as f32 / total as f32
    } else {
        0.0
    }
}

// Remaining seconds, blended with the previous estimate to keep it from jumping
pub fn calculate_smoothed_time_estimate(
    units_processed: u64,
    total_units: u64,
    elapsed_secs: f32,
    previous_estimate: Option<f32>,
) -> Option<f32> {
    if units_processed == 0 || total_units == 0 || elapsed_secs <= 0.0 {
        return None;
    }

    let units_per_sec = units_processed as f32 / elapsed_secs;
    let remaining_units = total_units.saturating_sub(units_processed);
    let raw_estimate = remaining_units as f32 / units_per_sec;

    let smoothed = match previous_estimate {
        Some(prev) => SMOOTHING_ALPHA * raw_estimate + SMOOTHING_BETA * prev,
        None => raw_estimate,
    };

    Some(smoothed)
}

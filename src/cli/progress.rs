use std::{
    cell::RefCell,
    time::Instant,
};

use indicatif::{
    ProgressBar,
    ProgressStyle,
};

use crate::core::{
    utils::{
        calculate_progress_fraction,
        calculate_smoothed_time_estimate,
    },
    ProgressCallback,
    ProgressEvent,
};

const BAR_TEMPLATE: &str =
    "{prefix:>10} [{elapsed_precise}] {bar:40} {pos}/{len} eta {eta} {wide_msg}";

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
}

/// One bar per output file, drawn on stderr.
pub fn progress_bars() -> ProgressCallback {
    let current: RefCell<Option<ProgressBar>> = RefCell::new(None);

    Box::new(move |event: ProgressEvent| match event {
        ProgressEvent::OutputStarted { kind, index, file_count, .. } => {
            let pb = ProgressBar::new(file_count as u64);
            pb.set_style(bar_style());
            pb.set_prefix(format!("{} #{}", kind.label(), index));
            *current.borrow_mut() = Some(pb);
        }
        ProgressEvent::FileProcessed { name, .. } => {
            if let Some(pb) = current.borrow().as_ref() {
                pb.set_message(name);
                pb.inc(1);
            }
        }
        ProgressEvent::OutputFinished { path, bytes, .. } => {
            if let Some(pb) = current.borrow_mut().take() {
                pb.finish_with_message(format!("{} bytes -> {}", bytes, path.display()));
            }
        }
    })
}

struct EtaTracker {
    started: Instant,
    estimate: Option<f32>,
}

impl EtaTracker {
    fn new() -> Self {
        EtaTracker { started: Instant::now(), estimate: None }
    }

    fn update(&mut self, processed: usize, total: usize, elapsed_secs: f32) -> Option<f32> {
        self.estimate = calculate_smoothed_time_estimate(
            processed as u64,
            total as u64,
            elapsed_secs,
            self.estimate,
        );
        self.estimate
    }
}

fn format_eta(estimate: Option<f32>) -> String {
    match estimate {
        Some(secs) => format!("{:.0}s", secs),
        None => "?".to_string(),
    }
}

/// Progress as log lines, for non-interactive runs.
pub fn progress_log() -> ProgressCallback {
    let eta = RefCell::new(EtaTracker::new());

    Box::new(move |event: ProgressEvent| match event {
        ProgressEvent::OutputStarted { .. } => {
            *eta.borrow_mut() = EtaTracker::new();
        }
        ProgressEvent::FileProcessed { kind, index, position, file_count, name, bytes } => {
            let mut tracker = eta.borrow_mut();
            let elapsed = tracker.started.elapsed().as_secs_f32();
            let remaining = tracker.update(position, file_count, elapsed);
            log::info!(
                "[{} #{}] {:>5.1}% {}/{} eta {} {} ({} bytes)",
                kind.label(),
                index,
                calculate_progress_fraction(position, file_count) * 100.0,
                position,
                file_count,
                format_eta(remaining),
                name,
                bytes
            );
        }
        ProgressEvent::OutputFinished { kind, index, path, bytes } => {
            log::info!("[{} #{}] wrote {} bytes to {}", kind.label(), index, bytes, path.display());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eta_tracker_smooths_estimates() {
        let mut tracker = EtaTracker::new();

        // 1 of 4 files after 2s leaves 6s
        let first = tracker.update(1, 4, 2.0).unwrap();
        assert!((first - 6.0).abs() < 1e-4);

        // 2 of 4 after 4s is 4s raw, blended 0.3 * 4 + 0.7 * 6
        let second = tracker.update(2, 4, 4.0).unwrap();
        assert!((second - 5.4).abs() < 1e-4);
    }

    #[test]
    fn test_eta_formatting() {
        assert_eq!(format_eta(None), "?");
        assert_eq!(format_eta(Some(12.4)), "12s");
    }
}

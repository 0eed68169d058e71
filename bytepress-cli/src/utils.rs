//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Compressed size as a percentage of the original, "-" for empty input.
pub fn ratio_percent(compressed: usize, original: usize) -> String {
    if original == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", compressed as f64 / original as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(50, 100), "50.0%");
        assert_eq!(ratio_percent(150, 100), "150.0%");
        assert_eq!(ratio_percent(0, 0), "-");
    }
}

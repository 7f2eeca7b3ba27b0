// src/analysis_context.rs

use std::path::{Path, PathBuf};

/// Where a comparison run reads from and writes to.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// Input CSV path.
    pub input_path: PathBuf,

    /// Directory receiving every chart and report artifact.
    pub output_dir: PathBuf,
}

impl AnalysisContext {
    /// Uses `output_dir` when given, otherwise the input file's directory.
    pub fn new(input_path: PathBuf, output_dir: Option<PathBuf>) -> Self {
        let output_dir = output_dir.unwrap_or_else(|| {
            input_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        });
        Self {
            input_path,
            output_dir,
        }
    }

    /// Full path of an artifact inside the output directory.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outputs_default_to_input_directory() {
        let ctx = AnalysisContext::new(PathBuf::from("data/path_analysis.csv"), None);
        assert_eq!(
            ctx.output_path("path_comparison.png"),
            PathBuf::from("data/path_comparison.png")
        );
    }

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        let ctx = AnalysisContext::new(PathBuf::from("path_analysis.csv"), None);
        assert_eq!(ctx.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_explicit_output_dir() {
        let ctx = AnalysisContext::new(
            PathBuf::from("data/path_analysis.csv"),
            Some(PathBuf::from("/tmp/charts")),
        );
        assert_eq!(
            ctx.output_path("theta_comparison.png"),
            PathBuf::from("/tmp/charts/theta_comparison.png")
        );
    }
}

// src/analysis_context.rs

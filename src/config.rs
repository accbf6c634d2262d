use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "files/input";
pub const DEFAULT_OUTPUT_DIR: &str = "files/output";
pub const DEFAULT_FILE_PATTERN: &str = "*.csv.zip";
pub const DEFAULT_CONTACT_YEAR: i32 = 2022;

/// Where to read from, where to write to, and the year stamped on contact dates.
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Glob matched inside `input_dir`.
    pub file_pattern: String,
    pub contact_year: i32,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            contact_year: DEFAULT_CONTACT_YEAR,
        }
    }
}

impl EtlConfig {
    pub fn with_input_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

use crate::core::io::table::TableFormat;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_OUTPUT_SUFFIX: &str = ".Rep.txt";

/// Largest number of fractional digits that still carries information for `f64`.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub suffix: String,
    pub format: TableFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            format: TableFormat::default(),
        }
    }
}

impl OutputConfig {
    /// Appends the suffix to the full source path, keeping any existing
    /// extension (`h.dat` becomes `h.dat.Rep.txt`).
    pub fn output_path_for(&self, source: &Path) -> PathBuf {
        let mut name = OsString::from(source.as_os_str());
        name.push(&self.suffix);
        PathBuf::from(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchConfig {
    pub output: OutputConfig,
}

#[derive(Default)]
pub struct PatchConfigBuilder {
    output_suffix: Option<String>,
    field_width: Option<usize>,
    precision: Option<usize>,
}

impl PatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = Some(suffix.into());
        self
    }
    pub fn field_width(mut self, width: usize) -> Self {
        self.field_width = Some(width);
        self
    }
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn build(self) -> Result<PatchConfig, ConfigError> {
        let suffix = self
            .output_suffix
            .ok_or(ConfigError::MissingParameter("output_suffix"))?;
        if suffix.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "output_suffix",
                reason: "suffix must not be empty, the source file would be overwritten"
                    .to_string(),
            });
        }
        let precision = self
            .precision
            .ok_or(ConfigError::MissingParameter("precision"))?;
        if precision > MAX_PRECISION {
            return Err(ConfigError::InvalidParameter {
                name: "precision",
                reason: format!("must be at most {}, got {}", MAX_PRECISION, precision),
            });
        }
        let width = self
            .field_width
            .ok_or(ConfigError::MissingParameter("field_width"))?;

        Ok(PatchConfig {
            output: OutputConfig {
                suffix,
                format: TableFormat { width, precision },
            },
        })
    }
}

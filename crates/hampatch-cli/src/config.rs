mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use hampatch::engine::config::{PatchConfig, PatchConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    suffix: Option<String>,
    #[serde(rename = "field-width")]
    field_width: Option<usize>,
    precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialPatchConfig {
    output: Option<PartialOutputConfig>,
}

impl PartialPatchConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config` if given, otherwise starts empty.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &Cli) -> Result<PatchConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let output = self.output.take().unwrap_or_default();

        let config = PatchConfigBuilder::new()
            .output_suffix(output.suffix.unwrap_or(defaults.output_suffix))
            .field_width(output.field_width.unwrap_or(defaults.field_width))
            .precision(output.precision.unwrap_or(defaults.precision))
            .build()?;

        debug!("Final patch configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let output = self.output.get_or_insert_with(Default::default);

            let parse_usize = |value: &str| -> Result<usize> {
                value.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value))
                })
            };

            match key {
                "output.suffix" => output.suffix = Some(value_str.to_string()),
                "output.field-width" => output.field_width = Some(parse_usize(value_str)?),
                "output.precision" => output.precision = Some(parse_usize(value_str)?),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

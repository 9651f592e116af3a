use hampatch::core::io::table::{DEFAULT_FIELD_WIDTH, DEFAULT_PRECISION};
use hampatch::engine::config::DEFAULT_OUTPUT_SUFFIX;

pub struct DefaultsConfig {
    pub output_suffix: String,
    pub field_width: usize,
    pub precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            field_width: DEFAULT_FIELD_WIDTH,
            precision: DEFAULT_PRECISION,
        }
    }
}

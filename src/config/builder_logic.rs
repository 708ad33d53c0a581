// src/config/builder_logic.rs

use super::ConfigBuilder;
use crate::errors::{ConfigError, Result};

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if let Some(dir) = &builder.input_dir {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                option: "input directory".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
    }
    if let Some(output) = &builder.output_path {
        if output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                option: "--output".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

// src/config/validation.rs

use crate::errors::ConfigError;

/// Rejects ceilings that cannot describe a file size.
pub(super) fn validate_max_file_size(mb: f64) -> Result<(), ConfigError> {
    if !mb.is_finite() || mb < 0.0 {
        return Err(ConfigError::InvalidValue {
            option: "--max-file-size".to_string(),
            reason: format!("must be a finite, non-negative number of megabytes (got {mb})"),
        });
    }
    Ok(())
}

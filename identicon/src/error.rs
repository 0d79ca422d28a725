use thiserror::Error;

/// Smallest accepted image size in pixels.
pub const MIN_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdenticonError {
    #[error("image size {size} is smaller than the minimum of {min} pixels")]
    SizeTooSmall { size: u32, min: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color '{0}' must have 3 or 6 hex digits")]
    InvalidLength(String),

    #[error("invalid hex digit '{0}' in color '{1}'")]
    InvalidDigit(char, String),
}

/// Reject sizes below [`MIN_SIZE`].
pub fn check_size(size: u32) -> Result<(), IdenticonError> {
    if size < MIN_SIZE {
        return Err(IdenticonError::SizeTooSmall {
            size,
            min: MIN_SIZE,
        });
    }
    Ok(())
}

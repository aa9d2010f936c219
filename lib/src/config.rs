use crate::error::ConvertError;

/// Default output width in character columns
pub const DEFAULT_WIDTH: u32 = 50;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiConfig {
    /// Output width in character columns
    pub width: u32,              // >= 1, default 50
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.width < 1 {
            return Err(ConvertError::InvalidWidth(self.width));
        }
        Ok(())
    }
}

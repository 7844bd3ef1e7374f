//! Error types for the wifi_diagram crate
//!
//! The geometry core is infallible. These errors only come from the
//! boundaries: record parsing, channel validation, and configuration.

use crate::model::RadioBand;
use thiserror::Error;

/// Errors that can occur when preparing a diagram
#[derive(Error, Debug)]
pub enum DiagramError {
    /// Channel is not part of the band's valid channel set
    #[error("Channel {channel} is not valid for the {band} band")]
    InvalidChannel { channel: i32, band: RadioBand },

    /// A record line could not be parsed
    #[error("Record parse error on line {line}: {reason}")]
    RecordParse { line: usize, reason: String },

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for diagram operations
pub type Result<T> = std::result::Result<T, DiagramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_channel_message() {
        let err = DiagramError::InvalidChannel {
            channel: 15,
            band: RadioBand::TwoPointFourGHz,
        };
        assert_eq!(err.to_string(), "Channel 15 is not valid for the 2.4GHz band");
    }

    #[test]
    fn test_record_parse_message() {
        let err = DiagramError::RecordParse {
            line: 3,
            reason: "missing channel".to_string(),
        };
        assert_eq!(err.to_string(), "Record parse error on line 3: missing channel");
    }
}

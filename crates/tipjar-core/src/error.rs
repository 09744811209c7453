//! Error types for Tipjar

use thiserror::Error;

/// Main error type for Tipjar operations
#[derive(Error, Debug)]
pub enum TipError {
    /// Venue id is not in the reminder book
    #[error("Venue not found: {0}")]
    VenueNotFound(String),

    /// Device id is not in the session list
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// The device running the app cannot be revoked
    #[error("Cannot revoke the current device: {0}")]
    CurrentDeviceProtected(String),

    /// Custom quiet hours need both a start and an end time
    #[error("Invalid quiet hours: {0}")]
    InvalidQuietHours(String),

    /// Reminder cap outside the accepted range
    #[error("Invalid reminder cap: {0}")]
    InvalidCap(u32),

    /// Simulated backend call failed
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration file could not be interpreted
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TipError
pub type TipResult<T> = Result<T, TipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TipError::VenueNotFound("v-42".to_string());
        assert_eq!(format!("{}", err), "Venue not found: v-42");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tip_err: TipError = io_err.into();
        assert!(matches!(tip_err, TipError::Io(_)));
    }

    #[test]
    fn test_current_device_message() {
        let err = TipError::CurrentDeviceProtected("dev-1".to_string());
        assert!(err.to_string().contains("current device"));
    }
}

// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Feedback(FeedbackError),
}

/// Failures raised by feedback adapters (haptics, sound effects).
///
/// These never reach bulletin callers: the lifecycle controller logs them
/// and carries on presenting without the effect.
#[derive(Debug, Clone)]
pub enum FeedbackError {
    /// The sound effect file could not be found or read.
    SoundUnavailable(String),

    /// The platform has no device able to play the cue.
    DeviceUnavailable,

    /// Generic error with raw message
    Other(String),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackError::SoundUnavailable(path) => {
                write!(f, "Sound effect unavailable: {}", path)
            }
            FeedbackError::DeviceUnavailable => write!(f, "No feedback device available"),
            FeedbackError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Feedback(e) => write!(f, "Feedback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FeedbackError> for Error {
    fn from(err: FeedbackError) -> Self {
        Error::Feedback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn feedback_error_converts_and_displays_path() {
        let err: Error = FeedbackError::SoundUnavailable("chime.wav".into()).into();
        assert!(matches!(err, Error::Feedback(_)));
        assert!(format!("{}", err).contains("chime.wav"));
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}

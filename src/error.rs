//! Error type shared by the synthesis core and the PCM sinks.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or rendering a bass patch.
#[derive(Debug)]
pub enum Error {
    /// A parameter failed validation before any buffer was computed.
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    /// The oscillator bank was given no detune offsets.
    EmptyDetune,
    /// Creating or writing the output failed.
    Io(std::io::Error),
    /// The WAV encoder rejected the data.
    #[cfg(feature = "wav")]
    Encode(hound::Error),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
            Error::EmptyDetune => write!(f, "detune set must contain at least one offset"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "wav")]
            Error::Encode(e) => write!(f, "WAV encoding error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            #[cfg(feature = "wav")]
            Error::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "wav")]
impl From<hound::Error> for Error {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(io) => Error::Io(io),
            other => Error::Encode(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::invalid("attack", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'attack': must be greater than zero"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(feature = "wav")]
    #[test]
    fn test_hound_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = hound::Error::IoError(io).into();
        assert!(matches!(err, Error::Io(_)));

        let err: Error = hound::Error::Unsupported.into();
        assert!(matches!(err, Error::Encode(_)));
    }
}

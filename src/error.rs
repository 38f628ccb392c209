//! Crate-level error types.

use std::fmt;

/// Errors produced by the phalanx crate.
///
/// The motion core itself never fails; errors only arise at the
/// configuration boundary when options are read, written, or validated.
#[derive(Debug)]
pub enum PhalanxError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold a value the engine cannot run with.
    InvalidOption(String),
}

impl fmt::Display for PhalanxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl std::error::Error for PhalanxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PhalanxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = PhalanxError::InvalidOption("patrol.speed must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid option: patrol.speed must be positive"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = PhalanxError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(PhalanxError::OptionsParse("bad".into()).source().is_none());
    }
}

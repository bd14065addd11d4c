//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Startup and transport faults. The validator core has no error
/// surface: it is total over well-typed input.
#[derive(Error, Debug)]
pub enum PipecheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CORS origin '{origin}'")]
    InvalidOrigin { origin: String },
}

impl FixSuggestion for PipecheckError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            PipecheckError::Io(_) => {
                Some("Check the bind address is valid and the port is free")
            }
            PipecheckError::InvalidOrigin { .. } => {
                Some("Use a full origin like http://localhost:3000, or * to allow any")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origin_names_the_origin() {
        let err = PipecheckError::InvalidOrigin {
            origin: "not a header value\u{7f}".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid CORS origin"));
        assert!(err.fix_suggestion().is_some());
    }

    #[test]
    fn io_error_converts_and_suggests() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err = PipecheckError::from(io);
        assert!(matches!(err, PipecheckError::Io(_)));
        assert!(err.fix_suggestion().unwrap().contains("port"));
    }
}

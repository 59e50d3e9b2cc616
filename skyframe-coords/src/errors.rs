use skyframe_core::TargetError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordError {
    #[error("{source}")]
    Target {
        #[from]
        source: TargetError,
    },

    #[error("Unknown coordinate system: {name}")]
    UnknownSystem { name: String },

    #[error("Incomplete Horizons link: {message}")]
    IncompleteHorizonsLink { message: String },

    #[error("{operation} is not available for {kind} targets")]
    KindMismatch { operation: String, kind: String },
}

impl CoordError {
    pub fn unknown_system(name: impl Into<String>) -> Self {
        Self::UnknownSystem { name: name.into() }
    }

    pub fn incomplete_horizons_link(message: impl Into<String>) -> Self {
        Self::IncompleteHorizonsLink {
            message: message.into(),
        }
    }

    pub fn kind_mismatch(operation: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::KindMismatch {
            operation: operation.into(),
            kind: kind.into(),
        }
    }

    pub fn invalid_frame_option(option: &str, system: &str) -> Self {
        TargetError::invalid_frame_option(option, system).into()
    }

    pub fn unsupported_conversion(from: &str, to: &str) -> Self {
        TargetError::unsupported_conversion(from, to).into()
    }

    /// The underlying unit, format or frame error, if this is one.
    pub fn as_target_error(&self) -> Option<&TargetError> {
        match self {
            Self::Target { source } => Some(source),
            _ => None,
        }
    }
}

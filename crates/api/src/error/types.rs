//! Error type definitions for engine operations

/// Runtime error code raised by a failing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A value would outgrow its configured capacity
    NoMemory,
    /// Undefined operation or invalid input
    NoValid,
    /// Caller buffer has the wrong size
    NoBuffer,
    /// Requested curve or parameter set is not available
    NoCurve,
    /// A lower layer failed and the error was re-raised
    Caught,
}

impl ErrorKind {
    /// Short upper-case name of the code
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoMemory => "ERR_NO_MEMORY",
            Self::NoValid => "ERR_NO_VALID",
            Self::NoBuffer => "ERR_NO_BUFFER",
            Self::NoCurve => "ERR_NO_CURVE",
            Self::Caught => "ERR_CAUGHT",
        }
    }
}

/// Primary error type for engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Capacity exhausted
    NoMemory { context: &'static str },

    /// Invalid input or undefined operation
    NoValid { context: &'static str },

    /// Buffer size mismatch
    NoBuffer {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Parameter set not available
    NoCurve { context: &'static str },

    /// Error re-raised by an enclosing operation
    Caught {
        context: &'static str,
        kind: ErrorKind,
    },
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Code carried by this error. A re-raised error keeps the code of its origin.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoMemory { .. } => ErrorKind::NoMemory,
            Self::NoValid { .. } => ErrorKind::NoValid,
            Self::NoBuffer { .. } => ErrorKind::NoBuffer,
            Self::NoCurve { .. } => ErrorKind::NoCurve,
            Self::Caught { kind, .. } => *kind,
        }
    }

    /// Context string of the innermost layer that touched the error
    pub const fn context(&self) -> &'static str {
        match self {
            Self::NoMemory { context }
            | Self::NoValid { context }
            | Self::NoBuffer { context, .. }
            | Self::NoCurve { context }
            | Self::Caught { context, .. } => context,
        }
    }

    /// Whether the error was re-raised by an enclosing operation
    pub const fn is_caught(&self) -> bool {
        matches!(self, Self::Caught { .. })
    }

    /// Re-raise the error from an enclosing operation
    pub fn with_context(self, context: &'static str) -> Self {
        Self::Caught {
            context,
            kind: self.kind(),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        let context = "unspecified";
        match kind {
            ErrorKind::NoMemory => Self::NoMemory { context },
            ErrorKind::NoValid => Self::NoValid { context },
            ErrorKind::NoBuffer => Self::NoBuffer {
                context,
                expected: 0,
                actual: 0,
            },
            ErrorKind::NoCurve => Self::NoCurve { context },
            ErrorKind::Caught => Self::Caught {
                context,
                kind: ErrorKind::Caught,
            },
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoMemory { context } => {
                write!(f, "{}: capacity exceeded", context)
            }
            Self::NoValid { context } => {
                write!(f, "{}: invalid input", context)
            }
            Self::NoBuffer {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid buffer length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::NoCurve { context } => {
                write!(f, "{}: parameters not available", context)
            }
            Self::Caught { context, kind } => {
                write!(f, "{}: caught {}", context, kind)
            }
        }
    }
}

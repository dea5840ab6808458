//! Error handling traits

use super::types::{Error, ErrorKind, Result};

/// Extension trait for engine results
pub trait ResultExt<T>: Sized {
    /// Re-raise a failure from the calling layer, keeping its code
    fn caught(self, context: &'static str) -> Result<T>;

    /// Code of the failure, if any
    fn kind(&self) -> Option<ErrorKind>;
}

impl<T> ResultExt<T> for Result<T> {
    fn caught(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn kind(&self) -> Option<ErrorKind> {
        self.as_ref().err().map(Error::kind)
    }
}

//! Error types for the property-list codec.

use thiserror::Error;

/// Main error type for property-list operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Decode input violated the zero-terminated key/value pair layout
    #[error("Malformed property list: {0}")]
    MalformedPropertyList(String),

    /// A value cannot be represented in the native property word
    #[error("Value {value} does not fit the {bits}-bit native property word")]
    UnsupportedValueWidth { value: i64, bits: u32 },
}

impl Error {
    /// Create a malformed-list error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPropertyList(msg.into())
    }
}

/// Result type alias for property-list operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::malformed("no terminating zero");
        assert!(e.to_string().contains("terminating zero"));

        let e = Error::UnsupportedValueWidth { value: 1 << 40, bits: 32 };
        assert!(e.to_string().contains("32-bit"));
        assert!(e.to_string().contains(&(1i64 << 40).to_string()));
    }
}

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Errors from converting between packed IDs and byte buffers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagError {
    #[error("a packed id needs exactly 4 bytes, found {0}")]
    InvalidLength(usize),

    #[error("buffer of {0} bytes is too short to hold a packed id")]
    BufferTooShort(usize),
}

#[cfg(test)]
mod tests {
    use super::TagError;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn render(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn messages() {
        assert_eq!(
            render(&TagError::InvalidLength(3)),
            "a packed id needs exactly 4 bytes, found 3"
        );
        assert_eq!(
            render(&TagError::BufferTooShort(2)),
            "buffer of 2 bytes is too short to hold a packed id"
        );
    }
}

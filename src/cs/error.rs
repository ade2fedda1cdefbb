use thiserror::Error;

/// Errors raised by the algorithms in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated a precondition of the algorithm.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An input exceeded the largest size the algorithm can handle.
    #[error("input too large: {length} exceeds maximum of {max_length}")]
    InputTooLarge { length: usize, max_length: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("x must be a power of two");
        assert_eq!(err.to_string(), "invalid input: x must be a power of two");

        let err = Error::InputTooLarge {
            length: 64,
            max_length: 63,
        };
        assert_eq!(err.to_string(), "input too large: 64 exceeds maximum of 63");
    }
}

use std::error;
use std::fmt;
use std::result;

/// Errors returned by operations on the ordered maps and sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The key passed to `set` does not exist in the map.
    KeyNotFound,
    /// An operation that needs at least one element was called on an empty container.
    EmptyContainer,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key does not exist"),
            Error::EmptyContainer => write!(f, "container is empty"),
        }
    }
}

/// Convenience `Result` type for ordered container operations.
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::KeyNotFound.to_string(), "key does not exist");
        assert_eq!(Error::EmptyContainer.to_string(), "container is empty");
    }
}

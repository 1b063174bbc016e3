use thiserror::Error;

/// Raised when a value is requested from a container that holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("List is empty")]
    EmptyList,
    #[error("Stack is empty. No top element.")]
    EmptyStack,
}

pub type Result<T> = std::result::Result<T, Error>;

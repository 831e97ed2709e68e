use thiserror::Error;

/// Errors surfaced by tab container operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The page is not a member of the container's page list.
    #[error("page \"{0}\" is not managed by this container")]
    NotFound(String),
}

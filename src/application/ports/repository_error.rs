#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A record referenced another record that is not stored, e.g. a
    /// painting naming a conversation id the store has never assigned.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// The backing store could not be reached or answered abnormally.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

use thiserror::Error;

/// The submitted choice is absent, empty, or not one of the three labels.
///
/// This is a caller-input problem; it is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid choice")]
pub struct InvalidChoice;

use crate::{db::BuildError, record::RecordError, time::TimeError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error surface aggregating the per-concern errors.
/// Point lookups and queries never produce errors; only record coercion,
/// timestamp parsing, and database construction can fail.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    RecordError(#[from] RecordError),

    #[error(transparent)]
    TimeError(#[from] TimeError),
}

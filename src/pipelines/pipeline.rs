//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each build step,
/// and is generic over the return type so that
/// steps reporting something richer than a count can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

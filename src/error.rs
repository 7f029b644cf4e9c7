use derive_more::{Display, Error};

/// Result type used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by the pixel buffer, the pixel API and the scene runner.
///
/// An error here means the caller has a programming defect (a bad index or a
/// scene that does not fit its buffer). Nothing is clamped silently.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pixel index outside `0..len`.
    #[display("pixel index {index} out of range for a strip of {len} pixels")]
    IndexOutOfRange { index: usize, len: usize },
    /// A scene builder ran out of step capacity.
    #[display("scene is full ({capacity} steps)")]
    SceneFull { capacity: usize },
}

/// Validate `index` against a strip of `len` pixels.
pub(crate) const fn check_index(index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

//! Error taxonomy.
//!
//! The core has few invalid-input paths: construction parameters and
//! service-class parsing. An empty station or a non-empty queue are
//! normal states, not errors.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the scheduling core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A scheduler was constructed with zero stations.
    #[error("station count must be positive, got {0}")]
    InvalidStationCount(u32),

    /// The average-service-duration estimation constant was not positive.
    #[error("average service duration must be positive minutes, got {0}")]
    InvalidAvgServiceDuration(i64),

    /// A service-class code outside the fixed catalog.
    #[error("unknown service class '{0}'")]
    UnknownServiceClass(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::InvalidStationCount(0);
        assert_eq!(e.to_string(), "station count must be positive, got 0");

        let e = Error::UnknownServiceClass("mega".into());
        assert_eq!(e.to_string(), "unknown service class 'mega'");
    }
}

use thiserror::Error;

/// Error types for Savitzky-Golay filter operations.
///
/// Parameter violations are reported eagerly, before any computation, and are
/// never silently corrected. `SingularDesignMatrix` indicates inconsistent
/// parameters rather than a recoverable runtime condition; retrying without
/// changing inputs is meaningless since the filter is deterministic.
#[derive(Debug, Error)]
pub enum SavgolError {
    /// Window must be a positive odd integer.
    #[error("invalid window {0}: window must be a positive odd integer")]
    InvalidWindow(usize),

    /// Window too small for requested polynomial order (need `window >= order + 2`).
    #[error("window {window} too small for requested polynomial order {order} (need window >= order + 2)")]
    WindowTooSmall { window: usize, order: usize },

    /// Requested derivative exceeds the polynomial order; the fit carries no
    /// information about higher derivatives.
    #[error("derivative order {derivative} exceeds polynomial order {order}")]
    DerivativeTooHigh { derivative: usize, order: usize },

    /// Sample rate must be positive and finite when differentiating.
    #[error("invalid sample rate {0}: rate must be positive and finite")]
    InvalidRate(f64),

    /// Signal is too short to build the boundary padding for this window.
    #[error("insufficient data: {len} samples cannot be edge-padded for window {window}")]
    InsufficientData { len: usize, window: usize },

    /// The design matrix could not be pseudo-inverted.
    #[error("design matrix is numerically singular: {0}")]
    SingularDesignMatrix(&'static str),

    /// Named column is missing from the CSV header.
    #[error("column '{0}' not found in CSV header")]
    ColumnNotFound(String),

    /// CSV read failure (I/O or malformed records).
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type for Savitzky-Golay operations.
pub type Result<T> = std::result::Result<T, SavgolError>;

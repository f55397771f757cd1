//! # savgol
//!
//! Savitzky-Golay smoothing and numerical differentiation for one-dimensional
//! measurement signals, such as friction-coefficient records from biaxial
//! shear experiments.
//!
//! The Savitzky-Golay filter fits a least-squares polynomial to a moving
//! window of samples and evaluates the fit (or its derivative) at the window
//! center. It removes high-frequency noise while preserving the shape and
//! features of the signal better than moving-average techniques.
//!
//! ## Features
//!
//! - Exact least-squares coefficients via an SVD-based pseudo-inverse
//! - Smoothing and arbitrary-order differentiation with sample-rate scaling
//! - Odd-reflection edge padding, so output length always equals input length
//! - Eager parameter validation; bad parameters are never silently corrected
//! - CSV column ingestion for feeding real measurement tables through the filter
//!
//! ## Example
//!
//! ```rust
//! use savgol::{smooth, SavgolFilter};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
//!
//! // One-shot smoothing with window 5, quadratic fit.
//! let smoothed = smooth(&data, 5, 2)?;
//! assert_eq!(smoothed.len(), data.len());
//!
//! // Reusable filter: coefficients are computed once at construction.
//! let filter = SavgolFilter::with_derivative(5, 2, 1, 0.1)?;
//! let slope = filter.apply(&data)?;
//! # Ok::<(), savgol::SavgolError>(())
//! ```

mod coefficients;
mod error;
mod filter;
mod io;

pub use coefficients::compute_coefficients;
pub use error::{Result, SavgolError};
pub use filter::SavgolFilter;
pub use io::{read_column, read_column_at};

/// Smooths the signal with a degree-`order` local polynomial fit over a
/// `window`-length moving window.
///
/// Convenience wrapper over [`SavgolFilter`]; construct the filter directly to
/// reuse coefficients across many signals.
///
/// # Example
///
/// ```rust
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
/// let smoothed = savgol::smooth(&data, 5, 2)?;
/// # Ok::<(), savgol::SavgolError>(())
/// ```
pub fn smooth(signal: &[f64], window: usize, order: usize) -> Result<Vec<f64>> {
    SavgolFilter::new(window, order)?.apply(signal)
}

/// Computes the first derivative of the smoothed signal, scaled for samples
/// spaced `rate` apart.
pub fn derivative(signal: &[f64], window: usize, order: usize, rate: f64) -> Result<Vec<f64>> {
    SavgolFilter::with_derivative(window, order, 1, rate)?.apply(signal)
}

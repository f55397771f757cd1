use nalgebra::DMatrix;

use crate::error::{Result, SavgolError};

/// Computes Savitzky-Golay convolution coefficients by least-squares polynomial
/// fitting.
///
/// The filter fits a polynomial of degree `order` to each `window`-length
/// neighborhood of the signal and evaluates the fit (or its `derivative`-th
/// derivative) at the center point. Both steps collapse into a single fixed
/// coefficient vector: the `derivative`-th row of the Moore-Penrose
/// pseudo-inverse of the design matrix, scaled by
/// `rate^derivative * derivative!`.
///
/// # Arguments
///
/// * `window` - Length of the moving window (positive odd integer)
/// * `order` - Degree of the fitting polynomial (needs `window >= order + 2`)
/// * `derivative` - Derivative order (0 for smoothing; must not exceed `order`)
/// * `rate` - Sample spacing scale, only consulted when `derivative > 0`
///
/// # Returns
///
/// A `window`-length coefficient vector to correlate against the signal.
pub fn compute_coefficients(
    window: usize,
    order: usize,
    derivative: usize,
    rate: f64,
) -> Result<Vec<f64>> {
    if window % 2 == 0 || window == 0 {
        return Err(SavgolError::InvalidWindow(window));
    }
    if window < order + 2 {
        return Err(SavgolError::WindowTooSmall { window, order });
    }
    if derivative > order {
        return Err(SavgolError::DerivativeTooHigh { derivative, order });
    }
    if derivative > 0 && !(rate.is_finite() && rate > 0.0) {
        return Err(SavgolError::InvalidRate(rate));
    }

    let half_window = (window - 1) / 2;

    // Design matrix: one row per offset k in -half_window..=half_window,
    // columns are the polynomial basis k^0, k^1, ..., k^order.
    let design = DMatrix::<f64>::from_fn(window, order + 1, |i, j| {
        let k = i as f64 - half_window as f64;
        k.powi(j as i32)
    });

    // Row `derivative` of the pseudo-inverse solves the least-squares fit for
    // the derivative-th polynomial coefficient at the window center.
    let pinv = design
        .pseudo_inverse(1e-12)
        .map_err(SavgolError::SingularDesignMatrix)?;

    let scale = rate.powi(derivative as i32) * factorial(derivative);
    Ok(pinv.row(derivative).iter().map(|c| c * scale).collect())
}

fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

use crate::coefficients::compute_coefficients;
use crate::error::{Result, SavgolError};

/// A Savitzky-Golay filter for signal smoothing and differentiation.
///
/// Parameters are validated and the convolution coefficients computed once at
/// construction; `apply` is then a pure function of the input signal and may be
/// called from any number of threads.
#[derive(Debug, Clone)]
pub struct SavgolFilter {
    window: usize,
    order: usize,
    derivative: usize,
    rate: f64,
    coefficients: Vec<f64>,
}

impl SavgolFilter {
    /// Creates a smoothing filter.
    ///
    /// # Arguments
    ///
    /// * `window` - Length of the moving window (positive odd integer)
    /// * `order` - Degree of the fitting polynomial (needs `window >= order + 2`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use savgol::SavgolFilter;
    ///
    /// let filter = SavgolFilter::new(5, 2).expect("valid parameters");
    /// ```
    pub fn new(window: usize, order: usize) -> Result<Self> {
        Self::with_derivative(window, order, 0, 1.0)
    }

    /// Creates a differentiating filter.
    ///
    /// `derivative = 0` is plain smoothing; `derivative = k` produces the k-th
    /// derivative of the smoothed signal, scaled for samples spaced `rate`
    /// apart. Requires `derivative <= order`.
    pub fn with_derivative(
        window: usize,
        order: usize,
        derivative: usize,
        rate: f64,
    ) -> Result<Self> {
        let coefficients = compute_coefficients(window, order, derivative, rate)?;
        Ok(Self {
            window,
            order,
            derivative,
            rate,
            coefficients,
        })
    }

    /// Window length.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Polynomial order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Derivative order (0 for smoothing).
    pub fn derivative(&self) -> usize {
        self.derivative
    }

    /// Sample spacing used to scale derivative output.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The precomputed convolution coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Applies the filter, returning a signal of identical length.
    ///
    /// The signal is extended by `(window - 1) / 2` synthetic samples on each
    /// side (odd reflection about the boundary value) before convolving, so
    /// the output never shrinks at the edges. Signals with fewer than
    /// `half_window + 1` samples cannot be padded and are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use savgol::SavgolFilter;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    /// let filter = SavgolFilter::new(5, 2).expect("valid parameters");
    /// let smoothed = filter.apply(&data).expect("enough samples");
    /// assert_eq!(smoothed.len(), data.len());
    /// ```
    pub fn apply(&self, signal: &[f64]) -> Result<Vec<f64>> {
        let half_window = (self.window - 1) / 2;
        if signal.len() <= half_window {
            return Err(SavgolError::InsufficientData {
                len: signal.len(),
                window: self.window,
            });
        }

        let padded = pad_reflect_odd(signal, half_window);

        // Valid-mode convolution of the reversed coefficient vector. The
        // kernel is reversed once by the convolution definition and once
        // explicitly, so the two cancel into a direct correlation.
        let mut output = vec![0.0; signal.len()];
        for (i, slot) in output.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (t, &c) in self.coefficients.iter().enumerate() {
                acc += c * padded[i + t];
            }
            *slot = acc;
        }

        Ok(output)
    }
}

/// Extends `signal` by `half_window` samples on each side using odd reflection
/// about the boundary value.
///
/// Left pad entries are `signal[0] - |signal[i] - signal[0]|` for the mirrored
/// interior samples (the boundary sample itself is excluded); the right pad is
/// `signal[n-1] + |signal[n-1-j] - signal[n-1]|`. Anchoring at the true
/// boundary value preserves the sign of the local slope. Not equivalent to
/// plain mirror padding.
fn pad_reflect_odd(signal: &[f64], half_window: usize) -> Vec<f64> {
    let n = signal.len();
    let first = signal[0];
    let last = signal[n - 1];

    let mut padded = Vec::with_capacity(n + 2 * half_window);
    for i in (1..=half_window).rev() {
        padded.push(first - (signal[i] - first).abs());
    }
    padded.extend_from_slice(signal);
    for j in 1..=half_window {
        padded.push(last + (signal[n - 1 - j] - last).abs());
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn padding_reflects_about_boundary_values() {
        let signal = [1.0, 3.0, 2.0, 5.0, 4.0];
        let padded = pad_reflect_odd(&signal, 2);

        // Left: 1 - |2 - 1|, 1 - |3 - 1|; right: 4 + |5 - 4|, 4 + |2 - 4|
        let expected = [0.0, -1.0, 1.0, 3.0, 2.0, 5.0, 4.0, 5.0, 6.0];
        assert_eq!(padded.len(), expected.len());
        for (p, e) in padded.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(p, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn padding_extends_a_ramp_exactly() {
        let ramp: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let padded = pad_reflect_odd(&ramp, 2);
        let expected: Vec<f64> = (-2..8).map(|i| i as f64).collect();

        for (p, e) in padded.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(p, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn smoothing_preserves_a_quadratic_interior() {
        let filter = SavgolFilter::new(5, 2).unwrap();
        let data: Vec<f64> = (0..20).map(|x| (x as f64).powi(2)).collect();
        let smoothed = filter.apply(&data).unwrap();

        // Interior points are exact; edges feel the padding approximation.
        for i in 2..18 {
            assert_abs_diff_eq!(smoothed[i], data[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn linear_signals_survive_including_edges() {
        // The odd-reflection pad extends a line exactly, so even the edge
        // outputs reproduce the input.
        let filter = SavgolFilter::new(7, 2).unwrap();
        let data: Vec<f64> = (0..12).map(|i| 2.0 * i as f64 + 3.0).collect();
        let smoothed = filter.apply(&data).unwrap();

        for (s, d) in smoothed.iter().zip(data.iter()) {
            assert_abs_diff_eq!(s, d, epsilon = 1e-9);
        }
    }

    #[test]
    fn short_signal_is_rejected() {
        let filter = SavgolFilter::new(7, 2).unwrap();
        let result = filter.apply(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(SavgolError::InsufficientData { len: 3, window: 7 })
        ));

        let empty: [f64; 0] = [];
        assert!(matches!(
            filter.apply(&empty),
            Err(SavgolError::InsufficientData { len: 0, window: 7 })
        ));
    }

    #[test]
    fn accessors_report_construction_parameters() {
        let filter = SavgolFilter::with_derivative(9, 3, 1, 0.25).unwrap();
        assert_eq!(filter.window(), 9);
        assert_eq!(filter.order(), 3);
        assert_eq!(filter.derivative(), 1);
        assert_abs_diff_eq!(filter.rate(), 0.25, epsilon = 0.0);
        assert_eq!(filter.coefficients().len(), 9);
    }
}

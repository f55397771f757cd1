//! Walkthrough of the savgol crate: smoothing and differentiating a noisy
//! synthetic signal.

use savgol::{derivative, smooth, SavgolFilter};

fn main() -> Result<(), savgol::SavgolError> {
    println!("=== Savitzky-Golay Filter Examples ===\n");

    // Clean test signal
    let clean_signal: Vec<f64> = (0..20)
        .map(|i| {
            let x = i as f64 * 0.1;
            (2.0 * std::f64::consts::PI * x).sin() + 0.5 * (4.0 * std::f64::consts::PI * x).cos()
        })
        .collect();

    // Add deterministic noise
    let noisy_signal: Vec<f64> = clean_signal
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if i % 3 == 0 {
                v + 0.3 * (i as f64 % 2.0 - 0.5)
            } else {
                *v
            }
        })
        .collect();

    println!("Original noisy signal:");
    print_signal(&noisy_signal);

    println!("\n1. Basic smoothing (window=5, order=2):");
    let smoothed = smooth(&noisy_signal, 5, 2)?;
    print_signal(&smoothed);

    println!("\n2. Wider window (window=7, order=3):");
    let wide = SavgolFilter::new(7, 3)?;
    print_signal(&wide.apply(&noisy_signal)?);

    println!("\n3. First derivative (window=7, order=2, rate=10):");
    let first_deriv = derivative(&clean_signal, 7, 2, 10.0)?;
    print_signal(&first_deriv);

    println!("\n4. Second derivative (window=7, order=3):");
    let second = SavgolFilter::with_derivative(7, 3, 2, 10.0)?;
    print_signal(&second.apply(&clean_signal)?);

    Ok(())
}

fn print_signal(signal: &[f64]) {
    let formatted: Vec<String> = signal.iter().map(|v| format!("{:6.3}", v)).collect();
    println!("[{}]", formatted.join(", "));
}

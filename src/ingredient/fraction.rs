//! Decimal-to-fraction rendering for ingredient counts.

const DEFAULT_TOLERANCE: f64 = 0.0001;

// Hard cap on the approximation search. The walk below converges fast
// for kitchen quantities; the cap guarantees termination for inputs
// where the tolerance is never reached.
const MAX_ITERATIONS: u32 = 10_000;

/// Render a count as a human-readable mixed fraction: `"4 1/2"`,
/// `"1/2"` or `"3"`. Non-finite inputs render as an empty string.
pub fn format_fraction(value: f64) -> String {
    format_fraction_with_tolerance(value, DEFAULT_TOLERANCE)
}

/// Same as [`format_fraction`] with an explicit relative tolerance for
/// the rational approximation.
pub fn format_fraction_with_tolerance(value: f64, tolerance: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let whole = value.trunc() as i64;
    let mut fractional = value - value.trunc();
    if fractional == 0.0 {
        return whole.to_string();
    }
    if fractional < 0.0 {
        fractional = -value;
    }

    let (numerator, denominator) = approximate(fractional, tolerance);
    let fraction = format!("{}/{}", numerator, denominator);
    if whole > 0 {
        format!("{} {}", whole, fraction)
    } else {
        fraction
    }
}

/// Best-first walk towards `target`: grow whichever of
/// numerator/denominator moves the ratio closer. Returns the best
/// candidate seen when the iteration cap is hit before convergence.
fn approximate(target: f64, tolerance: f64) -> (u64, u64) {
    let mut numerator: u64 = 1;
    let mut denominator: u64 = 1;
    let mut best = (numerator, denominator);
    let mut best_error = f64::INFINITY;

    for _ in 0..MAX_ITERATIONS {
        let ratio = numerator as f64 / denominator as f64;
        let error = ((ratio - target) / target).abs();
        if error < best_error {
            best_error = error;
            best = (numerator, denominator);
        }
        if error < tolerance {
            return (numerator, denominator);
        }
        if ratio < target {
            numerator += 1;
        } else {
            denominator += 1;
        }
    }

    best
}

//! Savings of an optimized route over the input order.

/// Percentage saved by `optimized` relative to `naive`, in `[0, 100]`.
///
/// Returns 0 when `naive` is not a positive finite distance.
///
/// ```
/// use smartcart_solver::savings_percentage;
///
/// assert_eq!(savings_percentage(75.0, 100.0), 25.0);
/// assert_eq!(savings_percentage(120.0, 100.0), 0.0);
/// assert_eq!(savings_percentage(0.0, 0.0), 0.0);
/// ```
pub fn savings_percentage(optimized: f64, naive: f64) -> f64 {
    if !(naive.is_finite() && naive > 0.0) || !optimized.is_finite() {
        return 0.0;
    }
    ((1.0 - optimized / naive) * 100.0).clamp(0.0, 100.0)
}

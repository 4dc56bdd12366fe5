/// Hyperbolic tangent written out as `2 / (1 + e^(-2x)) - 1`.
///
/// Agrees with `f64::tanh` to within 1e-9 on [-10, 10].  Past roughly |x| > 19
/// the result rounds to exactly ±1.0, same as the standard library, and ±∞
/// saturate to ±1 rather than producing NaN.
pub fn tanh(x: f64) -> f64 {
    2.0 / (1.0 + (-2.0 * x).exp()) - 1.0
}

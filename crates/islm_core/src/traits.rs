/// A market-clearing relation that is linear in output `Y` and the interest
/// rate `i`:
///
/// ```text
/// output_coefficient * Y + rate_coefficient * i = rhs
/// ```
pub trait LinearRelation {
    /// Coefficient multiplying the output level `Y`.
    fn output_coefficient(&self) -> f64;

    /// Coefficient multiplying the interest rate `i`.
    fn rate_coefficient(&self) -> f64;

    /// Constant right-hand side.
    fn rhs(&self) -> f64;

    /// Interest rate on the curve at output `y`.
    /// Returns `None` when the curve is vertical in `(Y, i)` space.
    fn rate_at(&self, y: f64) -> Option<f64>;

    /// `lhs - rhs` evaluated at `(y, i)`; zero on the curve.
    fn residual(&self, y: f64, i: f64) -> f64 {
        self.output_coefficient() * y + self.rate_coefficient() * i - self.rhs()
    }
}

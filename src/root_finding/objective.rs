//! Target-function capability shared by every engine.
//!
//! Engines never call a concrete function type. They call
//! [`Objective::evaluate`] with the current point and the extra arguments
//! from [`IterationCfg::args`](super::config::IterationCfg::args), so a single
//! formula can serve a whole family of functions.


/// A real function of one real variable, optionally parametrized.
pub trait Objective {
    /// Evaluates the function at `x` with the extra parameters `args`.
    fn evaluate(&mut self, x: f64, args: &[f64]) -> f64;
}

impl<F> Objective for F
where F: FnMut(f64, &[f64]) -> f64 {
    #[inline]
    fn evaluate(&mut self, x: f64, args: &[f64]) -> f64 {
        self(x, args)
    }
}


/// Adapts a plain `FnMut(f64) -> f64` into an [`Objective`] that ignores
/// extra arguments.
///
/// ```
/// use rootseq::root_finding::{unary, Objective};
///
/// let mut f = unary(|x: f64| x * x - 2.0);
/// assert_eq!(f.evaluate(2.0, &[]), 2.0);
/// ```
pub fn unary<F>(mut f: F) -> impl FnMut(f64, &[f64]) -> f64
where F: FnMut(f64) -> f64 {
    move |x: f64, _args: &[f64]| f(x)
}

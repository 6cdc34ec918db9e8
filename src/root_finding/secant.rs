use super::algorithms::Algorithm;
use super::common::{Evaluator, Recorder};
use super::config::IterationCfg;
use super::objective::Objective;
use super::report::{Stencil, Trace};

const ALGORITHM: Algorithm = Algorithm::Secant;


/// Calculates the secant step from `(x1, fx1)` through `(x0, fx0)`.
///
/// `x1 - fx1 * (x1 - x0) / (fx1 - fx0)`
///
/// No guard on `fx1 == fx0`: the result is then non-finite.
#[inline]
fn secant_step((x0, fx0): (f64, f64), (x1, fx1): (f64, f64)) -> f64 {
    x1 - fx1 * (x1 - x0) / (fx1 - fx0)
}


/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func`       : function whose root is sought
/// - `exact_root` : reference root used only to measure error
/// - `x0`, `x1`   : seeds, not included in the output
/// - `cfg`        : [`IterationCfg`]
///
/// # Returns
/// [`Trace`] with `points[i] = x[i+2]` and `errors[i] = |x[i+2] - exact_root|`.
///
/// # Notes
/// - If two consecutive iterates have equal function values the next point
///   is non-finite, and every later point follows. The run is not cut short;
///   the budget is spent on non-finite points and errors.
/// - Oscillation and divergence are likewise left to the caller to spot in
///   the error sequence.
pub fn secant<F>(
    func: F,
    exact_root: f64,
    x0: f64,
    x1: f64,
    cfg: &IterationCfg,
) -> Trace
where F: Objective {
    let mut eval = Evaluator::new(func, cfg.args());
    let mut rec  = Recorder::new(ALGORITHM, exact_root, cfg);

    let mut prev   = x0;
    let mut curr   = x1;
    let mut f_prev = eval.eval(prev);
    let mut f_curr = eval.eval(curr);
    while rec.proceed() {
        let next = secant_step((prev, f_prev), (curr, f_curr));

        rec.record(next, next);
        prev   = curr;
        f_prev = f_curr;
        curr   = next;
        f_curr = eval.eval(curr);
    }

    rec.finish_exhausted(Stencil::doubleton(prev, curr), eval.evals())
}

//! Newton's method with a secant-estimated derivative.

use log::warn;

use super::algorithms::Algorithm;
use super::common::{Evaluator, Recorder};
use super::config::IterationCfg;
use super::objective::Objective;
use super::report::{Stencil, Termination, Trace};

const ALGORITHM: Algorithm = Algorithm::Newton;


/// Slope of the chord through `(x0, fx0)` and `(x1, fx1)`.
///
/// Not guarded: equal abscissae give a non-finite slope, which the caller
/// detects through the resulting step.
#[inline]
fn chord_slope((x0, fx0): (f64, f64), (x1, fx1): (f64, f64)) -> f64 {
    (fx1 - fx0) / (x1 - x0)
}


/// Finds a root of `f` with
/// [Newton's method](https://en.wikipedia.org/wiki/Newton%27s_method), using a
/// two-point slope in place of an analytic derivative.
///
/// # Arguments
/// - `f`          : function whose root is sought
/// - `exact_root` : reference root used only to measure error
/// - `x0`, `x1`   : seeds; their chord gives the first slope estimate
/// - `cfg`        : [`IterationCfg`]
///
/// # Behavior
/// - Iteration `i` steps `x[i+2] = x[i+1] - f(x[i+1]) / d[i]`, then refreshes
///   the slope from the two function values evaluated in that same step:
///   `d[i+1] = (f(x[i+1]) - f(x[i])) / (x[i+1] - x[i])`.
/// - `errors[i]` is `|x[i] - exact_root|`, two iterates behind `points[i]`.
/// - Each iterate is evaluated once: `2 + n` evaluations for `n` recorded
///   iterations.
/// - A non-finite `x[i+2]` ends the run with [`Termination::NonFiniteStep`];
///   nothing is recorded for that iteration.
///
/// # Notes
/// - Convergence is local. Seeds far from the root can diverge or cycle.
/// - Once the iterates stop moving, the chord through two equal points
///   becomes `0 / 0` and the run ends through [`Termination::NonFiniteStep`].
pub fn newton<F>(
    f: F,
    exact_root: f64,
    x0: f64,
    x1: f64,
    cfg: &IterationCfg,
) -> Trace
where F: Objective {
    let mut eval = Evaluator::new(f, cfg.args());
    let mut rec  = Recorder::new(ALGORITHM, exact_root, cfg);

    let mut prev   = x0;
    let mut curr   = x1;
    let mut f_prev = eval.eval(prev);
    let mut f_curr = eval.eval(curr);
    let mut slope  = chord_slope((prev, f_prev), (curr, f_curr));

    while rec.proceed() {
        let next       = curr - f_curr / slope;
        let next_slope = chord_slope((prev, f_prev), (curr, f_curr));

        if !next.is_finite() {
            warn!(
                "{ALGORITHM}: non-finite step at iteration {} from x={curr:e}, slope={slope:e}",
                rec.iteration()
            );
            return rec.finish(
                Termination::NonFiniteStep,
                Stencil::doubleton(prev, curr),
                eval.evals(),
            );
        }

        rec.record(next, prev);
        prev   = curr;
        f_prev = f_curr;
        curr   = next;
        f_curr = eval.eval(curr);
        slope  = next_slope;
    }

    rec.finish_exhausted(Stencil::doubleton(prev, curr), eval.evals())
}

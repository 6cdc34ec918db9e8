//! Fixed-point relaxation.

use super::algorithms::Algorithm;
use super::common::{Evaluator, Recorder};
use super::config::IterationCfg;
use super::objective::Objective;
use super::report::{Stencil, Trace};

const ALGORITHM: Algorithm = Algorithm::Relaxation;


/// Iterates the fixed-point map `x[i+1] = g(x[i])` starting from `x0`.
///
/// # Arguments
///
/// ┌ `g`          - The fixed-point map. Its fixed point is a root of the
/// │                underlying equation.
/// ├ `exact_root` - Reference fixed point used only to measure error.
/// ├ `x0`         - Seed point. Not included in the output.
/// └ `cfg`        - Iteration budget, stop condition and extra args for `g`.
///
/// # Returns
///
/// A [`Trace`] whose `points[i]` is `x[i+1]` and whose `errors[i]` is
/// `|x[i] - exact_root|`: each error belongs to the value the step started
/// from, one step behind the appended point.
///
/// # Notes
/// ├ Divergence is not detected. A non-contractive `g` simply runs out the
/// │ budget with growing error.
/// └ Exactly one evaluation of `g` per iteration.
pub fn relaxation<G>(
    g: G,
    exact_root: f64,
    x0: f64,
    cfg: &IterationCfg,
) -> Trace
where G: Objective {
    let mut eval = Evaluator::new(g, cfg.args());
    let mut rec  = Recorder::new(ALGORITHM, exact_root, cfg);

    let mut x = x0;
    while rec.proceed() {
        let x_next = eval.eval(x);
        rec.record(x_next, x);
        x = x_next;
    }

    rec.finish_exhausted(Stencil::singleton(x), eval.evals())
}

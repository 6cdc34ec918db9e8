use log::warn;

use super::algorithms::Algorithm;
use super::common::{Evaluator, Recorder};
use super::config::IterationCfg;
use super::objective::Objective;
use super::report::{Stencil, Termination, Trace};
use super::signs::{opposite_sign, select_half, Half};

const ALGORITHM: Algorithm = Algorithm::FalsePosition;


/// Calculates the x-intercept of the line connecting `(a, fa)` and `(b, fb)`.
///
/// `(a * fb - b * fa) / (fb - fa)`
///
/// Only called on a strict sign change, so `fb - fa` is nonzero.
#[inline]
fn calculate_x_intercept((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    (a * fb - b * fa) / (fb - fa)
}


/// Finds a root of a function using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same bracket bookkeeping as [`bisection`](super::bisection::bisection),
/// but each new point is where the chord across the current bracket crosses
/// zero instead of the midpoint.
///
/// # Arguments
///
/// ┌ `func`       - The function whose root is to be found.
/// ├ `exact_root` - Reference root used only to measure error.
/// ├ `a`          - Left end of the seed bracket.
/// ├ `b`          - Right end of the seed bracket.
/// └ `cfg`        - [`IterationCfg`].
///
/// # Returns
///
/// A [`Trace`] with the chord intercepts in `points`, their errors in
/// `errors`, and the final bracket in `stencil`. The intercept of the seed
/// bracket is the starting estimate and is not part of `points`.
///
/// # Notes
/// ├ For convex or concave `func` one endpoint usually never moves, and the
/// │ tail of the convergence is linear and can be much slower than bisection.
/// ├ Bracket violations end the run exactly as in bisection, with
/// │ [`Termination::BracketViolated`].
/// └ One evaluation per iteration after the two for the seed bracket.
pub fn false_position<F>(
    func: F,
    exact_root: f64,
    mut a: f64,
    mut b: f64,
    cfg: &IterationCfg,
) -> Trace
where F: Objective {
    let mut eval = Evaluator::new(func, cfg.args());
    let mut rec  = Recorder::new(ALGORITHM, exact_root, cfg);

    let mut fa = eval.eval(a);
    let mut fb = eval.eval(b);
    if !opposite_sign(fa, fb) {
        warn!("{ALGORITHM}: no sign change on [{a}, {b}]: f(a)={fa:e}, f(b)={fb:e}");
        return rec.finish(
            Termination::BracketViolated { iteration: 0 },
            Stencil::bracket(a, b),
            eval.evals(),
        );
    }

    let mut c = calculate_x_intercept((a, fa), (b, fb));
    while rec.proceed() {
        let fc = eval.eval(c);

        let c_next = match select_half(fa, fc, fb) {
            Some(Half::Left) => {
                b  = c;
                fb = fc;
                calculate_x_intercept((a, fa), (b, fb))
            }
            Some(Half::Right) => {
                a  = c;
                fa = fc;
                calculate_x_intercept((a, fa), (b, fb))
            }
            None => {
                let iteration = rec.iteration();
                warn!("{ALGORITHM}: bracket conditions not met at iteration {iteration}");
                return rec.finish(
                    Termination::BracketViolated { iteration },
                    Stencil::bracket(a, b),
                    eval.evals(),
                );
            }
        };

        rec.record(c_next, c_next);
        c = c_next;
    }

    rec.finish_exhausted(Stencil::bracket(a, b), eval.evals())
}

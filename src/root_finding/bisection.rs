use log::warn;

use super::algorithms::Algorithm;
use super::common::{Evaluator, Recorder};
use super::config::IterationCfg;
use super::objective::Objective;
use super::report::{Stencil, Termination, Trace};
use super::signs::{opposite_sign, select_half, Half};

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs.
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
/// A [`Trace`] where
/// ├ `points[i]`  : midpoint of the bracket after `i + 1` halvings
/// ├ `errors[i]`  : `|points[i] - exact_root|`
/// └ `stencil`    : [`Stencil::Bracket`] with the final bracket, of width
///                  `(b - a) / 2^n` after `n` iterations
///
/// The midpoint of the seed bracket is the starting estimate and is not part
/// of `points`.
///
/// # Bracket violations
///
/// ┌ Seed bracket without a strict sign change → empty trace,
/// │ [`Termination::BracketViolated`] with `iteration: 0`.
/// └ Neither half changes sign at iteration `i` (usually an exact zero was
///   hit) → the `i` completed iterations are returned with
///   [`Termination::BracketViolated`] `{ iteration: i }`.
///
/// Neither case is an error: the run just ends early.
///
/// Endpoint values are carried between iterations, so a run of `n`
/// iterations on a dyadic bracket costs `2 + n` evaluations.
pub fn bisection<F>(
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

    let mut c = calculate_bisection(a, b);
    while rec.proceed() {
        let fc = eval.eval(c);

        // half-width of the bracket before this step
        let sigma = (b - a) / 2.0;
        let c_next = match select_half(fa, fc, fb) {
            Some(Half::Left) => {
                let c_next = calculate_bisection(a, c);
                let a_next = c - sigma;
                // rounding in the offset can shift the kept endpoint
                if a_next != a {
                    fa = eval.eval(a_next);
                }
                a  = a_next;
                b  = c;
                fb = fc;
                c_next
            }
            Some(Half::Right) => {
                let c_next = calculate_bisection(c, b);
                let b_next = c + sigma;
                if b_next != b {
                    fb = eval.eval(b_next);
                }
                b  = b_next;
                a  = c;
                fa = fc;
                c_next
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

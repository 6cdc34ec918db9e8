//! Plot-ready data derived from a [`Trace`].
//!
//! Nothing here draws. These helpers produce the arrays a renderer needs:
//! ┌ [`overlay`]     : function curve around the root, the root marker, and
//! │                   the iterates placed on the curve
//! └ [`convergence`] : `(iteration, error)` pairs for a log-scaled error plot

use super::objective::Objective;
use super::report::Trace;


/// Number of curve samples produced by [`overlay`].
pub const OVERLAY_SAMPLES: usize = 100;

/// Half-width of the window around the root sampled by [`overlay`].
pub const OVERLAY_HALF_SPAN: f64 = 1.0;


/// `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// `n == 1` yields `[start]`, `n == 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}


/// Function samples for overlaying a run on its target function.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// `(exact_root, f(exact_root))`
    pub root     : [f64; 2],
    /// `(x, f(x))` over `[exact_root - 1, exact_root + 1]`
    pub curve    : Vec<[f64; 2]>,
    /// `(x, f(x))` for every point of the trace, in order
    pub iterates : Vec<[f64; 2]>,
}

/// Evaluates `func` at the reference root, on a dense window around it, and
/// at every produced point of `trace`.
///
/// `args` are forwarded like in the engines. For a relaxation trace pass
/// the function whose root is sought, not the fixed-point map.
pub fn overlay<F>(mut func: F, trace: &Trace, args: &[f64]) -> Overlay
where F: Objective {
    let r = trace.exact_root;
    let mut sample = |x: f64| [x, func.evaluate(x, args)];

    let root     = sample(r);
    let curve    = linspace(r - OVERLAY_HALF_SPAN, r + OVERLAY_HALF_SPAN, OVERLAY_SAMPLES)
        .into_iter()
        .map(&mut sample)
        .collect();
    let iterates = trace.points.iter().map(|&x| sample(x)).collect();

    Overlay { root, curve, iterates }
}


/// Pairs each error with its 1-based iteration number.
///
/// Zero errors are kept; a log-scaled axis has to drop or clamp them itself.
pub fn convergence(errors: &[f64]) -> Vec<[f64; 2]> {
    errors
        .iter()
        .enumerate()
        .map(|(i, &e)| [(i + 1) as f64, e])
        .collect()
}

//! Defines the [`Trace`] struct returned by all root-finding algorithms.

use super::algorithms::Algorithm;


/// Reasons a root-finding run may stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The iteration budget was spent.
    IterationLimit,
    /// The smallest recorded error reached `stop_condition`.
    StopConditionReached,
    /// Newton produced a non-finite iterate; it was not recorded.
    NonFiniteStep,
    /// Neither half of the bracket changed sign at iteration `iteration`.
    /// `iteration == 0` means the seed bracket itself was invalid.
    BracketViolated { iteration: usize },
}

impl Termination {
    /// `true` for the two outcomes that end a run before its budget for a
    /// numerical or input reason.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Termination::NonFiniteStep | Termination::BracketViolated { .. })
    }
}


/// Method-specific data describing where a run left off.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval
/// - [`Stencil::Open`]    : open methods
///     - `x` = the most recent iterates, oldest first
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }

    /// Width of the final bracket, `None` for open methods.
    pub fn width(&self) -> Option<f64> {
        match self {
            Stencil::Bracket { bounds } => Some(bounds[1] - bounds[0]),
            Stencil::Open { .. }        => None,
        }
    }
}


/// Record of one root-finding run.
///
/// [`Trace`]
/// - `points`      : iterates in production order, seeds excluded
/// - `errors`      : absolute error for each iteration, same length as `points`
/// - `exact_root`  : the reference root, echoed back unchanged
/// - `evaluations` : total target-function evaluations
/// - `termination` : why the run stopped ([`Termination`])
/// - `stencil`     : final bracket or most recent iterates ([`Stencil`])
/// - `algorithm`   : which method produced it
///
/// # Notes
/// └ For [`Algorithm::Relaxation`] and [`Algorithm::Newton`], `errors[i]` is
///   the error of the iterate *preceding* `points[i]`. See
///   [`Algorithm::lags_error`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub points      : Vec<f64>,
    pub errors      : Vec<f64>,
    pub exact_root  : f64,
    pub evaluations : usize,
    pub termination : Termination,
    pub stencil     : Stencil,
    pub algorithm   : Algorithm,
}

impl Trace {
    /// Number of completed iterations.
    pub fn iterations(&self) -> usize {
        self.points.len()
    }

    /// Smallest finite error recorded, `f64::INFINITY` for an empty trace.
    pub fn best_error(&self) -> f64 {
        self.errors.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Most recent iterate, if any iteration completed.
    pub fn last_point(&self) -> Option<f64> {
        self.points.last().copied()
    }

    /// Index of the first iteration whose error is `<= tol`.
    pub fn first_below(&self, tol: f64) -> Option<usize> {
        self.errors.iter().position(|&e| e <= tol)
    }

    /// Splits into the `(points, errors, exact_root)` triple.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, f64) {
        (self.points, self.errors, self.exact_root)
    }
}

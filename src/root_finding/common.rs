//! Shared iteration machinery for root-finding algorithms.
//!
//! ┌ [`Evaluator`] : counted calls to the target function, args forwarded
//! └ [`Recorder`]  : iterate/error storage and the common stopping rule
//!
//! The stopping rule: another iteration runs only while fewer than
//! `iterations` have completed and the smallest error recorded so far is
//! still above `stop_condition`.

use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::IterationCfg;
use super::objective::Objective;
use super::report::{Stencil, Termination, Trace};


/// Wraps the target function; every call forwards the configured extra
/// arguments and bumps the evaluation count.
pub(crate) struct Evaluator<'a, O> {
    func  : O,
    args  : &'a [f64],
    evals : usize,
}

impl<'a, O: Objective> Evaluator<'a, O> {
    pub(crate) fn new(func: O, args: &'a [f64]) -> Self {
        Self { func, args, evals: 0 }
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> f64 {
        self.evals += 1;
        self.func.evaluate(x, self.args)
    }

    #[inline]
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }
}


/// Collects completed iterations for a single run.
///
/// Storage is reserved for the whole budget up front but only ever holds
/// completed iterations, so nothing placeholder-valued reaches the [`Trace`].
pub(crate) struct Recorder<'a> {
    cfg        : &'a IterationCfg,
    algorithm  : Algorithm,
    exact_root : f64,
    points     : Vec<f64>,
    errors     : Vec<f64>,
    best       : f64,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(algorithm: Algorithm, exact_root: f64, cfg: &'a IterationCfg) -> Self {
        let n = cfg.iterations();
        Self {
            cfg,
            algorithm,
            exact_root,
            points : Vec::with_capacity(n),
            errors : Vec::with_capacity(n),
            best   : f64::INFINITY,
        }
    }

    /// Index of the iteration about to run.
    #[inline]
    pub(crate) fn iteration(&self) -> usize {
        self.points.len()
    }

    /// `true` if another iteration may run.
    #[inline]
    pub(crate) fn proceed(&self) -> bool {
        self.points.len() < self.cfg.iterations() && self.cfg.keeps_going(self.best)
    }

    /// Appends `point` with the absolute error of `measured` against the
    /// reference root. `measured` is `point` itself for non-lagging methods.
    pub(crate) fn record(&mut self, point: f64, measured: f64) {
        let error = (measured - self.exact_root).abs();
        trace!(
            "{} iter={} x={point:e} err={error:e}",
            self.algorithm, self.points.len()
        );

        self.points.push(point);
        self.errors.push(error);
        // NaN errors leave `best` untouched
        self.best = self.best.min(error);
    }

    /// Why the loop condition ended the run.
    fn exhausted(&self) -> Termination {
        if self.cfg.keeps_going(self.best) {
            Termination::IterationLimit
        } else {
            Termination::StopConditionReached
        }
    }

    /// Finishes a run that ended through the loop condition.
    pub(crate) fn finish_exhausted(self, stencil: Stencil, evaluations: usize) -> Trace {
        let termination = self.exhausted();
        self.finish(termination, stencil, evaluations)
    }

    pub(crate) fn finish(
        self,
        termination: Termination,
        stencil: Stencil,
        evaluations: usize,
    ) -> Trace {
        debug!(
            "{}: {:?} after {} iterations ({} evaluations), best error {:e}",
            self.algorithm, termination, self.points.len(), evaluations, self.best
        );

        Trace {
            points      : self.points,
            errors      : self.errors,
            exact_root  : self.exact_root,
            evaluations,
            termination,
            stencil,
            algorithm   : self.algorithm,
        }
    }
}

//! Shared configuration for root-finding algorithms.
//!
//! Provides [`IterationCfg`], used by every engine.
//!
//! [`IterationCfg`] — universal fields
//! ├ `iterations`     : iteration budget
//! ├ `stop_condition` : error threshold for early exit
//! └ `args`           : extra parameters forwarded to the target function
//!
//! [`IterationCfg::new`] initializes configuration with default values.


use super::algorithms::DEFAULT_ITERATIONS;
use super::errors::ConfigError;


/// Default stop condition. Errors are never negative, so early exit is off.
pub const DEFAULT_STOP_CONDITION: f64 = -1.0;


/// Iteration settings shared by all engines.
///
/// # Defaults
///
/// ┌ `iterations`     = [`DEFAULT_ITERATIONS`] (100)
/// ├ `stop_condition` = [`DEFAULT_STOP_CONDITION`] (-1.0, disabled)
/// └ `args`           = empty
///
/// # Validation:
/// └ Performed by the setters, so an engine never sees a bad config.
///    ├ `iterations`     >= 1
///    └ `stop_condition` is not NaN
#[derive(Debug, Clone, PartialEq)]
pub struct IterationCfg {
    iterations:     usize,
    stop_condition: f64,
    args:           Vec<f64>,
}

impl IterationCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    // getters
    #[inline] #[must_use] pub fn iterations(&self)     -> usize  { self.iterations }
    #[inline] #[must_use] pub fn stop_condition(&self) -> f64    { self.stop_condition }
    #[inline] #[must_use] pub fn args(&self)           -> &[f64] { &self.args }

    pub fn set_iterations(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidIterations { got: v });
        }
        self.iterations = v;
        Ok(self)
    }

    /// Stop once the smallest recorded error is `<= v`.
    /// Any negative value disables early exit.
    pub fn set_stop_condition(mut self, v: f64) -> Result<Self, ConfigError> {
        if v.is_nan() {
            return Err(ConfigError::InvalidStopCondition { got: v });
        }
        self.stop_condition = v;
        Ok(self)
    }

    /// Extra parameters passed to every evaluation of the target function.
    #[must_use]
    pub fn with_args(mut self, args: impl Into<Vec<f64>>) -> Self {
        self.args = args.into();
        self
    }

    /// `true` while early exit is still possible for `best_error`.
    #[inline]
    pub(crate) fn keeps_going(&self, best_error: f64) -> bool {
        best_error > self.stop_condition
    }
}

impl Default for IterationCfg {
    fn default() -> Self {
        Self {
            iterations:     DEFAULT_ITERATIONS,
            stop_condition: DEFAULT_STOP_CONDITION,
            args:           Vec::new(),
        }
    }
}

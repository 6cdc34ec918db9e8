//! Root-finding error types.  
//! 
//! └ [`ConfigError`] : invalid iteration settings  
//!     ├ zero iteration budget  
//!     └ NaN stop condition  
//!
//! The engines themselves never fail. A run that cannot continue ends early
//! and says why through [`Termination`](super::report::Termination).


use thiserror::Error; 


/// Configuration errors raised by the [`IterationCfg`](super::config::IterationCfg) setters.  
/// 
/// ┌ Iteration budget of zero  
/// └ Stop condition that can never be compared (NaN)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid iterations: must be >= 1. got iterations={got}")]
    InvalidIterations { got: usize },

    #[error("invalid `stop_condition`: must not be NaN. got {got}")]
    InvalidStopCondition { got: f64 },
}

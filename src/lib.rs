//! Iterative root-finding methods for scalar functions of one variable.
//!
//! Every method records the full sequence of iterates together with the
//! absolute error of each iterate against a caller-supplied reference root,
//! so convergence behavior can be inspected or plotted afterwards.
//!
//! ```
//! use rootseq::root_finding::{bisection, unary, IterationCfg};
//!
//! let f     = unary(|x: f64| x * x - 2.0);
//! let cfg   = IterationCfg::new().set_iterations(40).unwrap();
//! let trace = bisection(f, 2.0_f64.sqrt(), 0.0, 2.0, &cfg);
//!
//! assert_eq!(trace.points.len(), trace.errors.len());
//! assert!(trace.best_error() < 1e-10);
//! ```

pub mod root_finding;

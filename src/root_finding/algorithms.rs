//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods
//! together with their static properties (seed count, bracketing, error lag).


/// Iteration budget used when none is configured.
pub const DEFAULT_ITERATIONS: usize = 100;


/// Root-finding algorithm variants.
/// - [`Algorithm::Relaxation`]    fixed-point iteration `x = g(x)`
/// - [`Algorithm::Newton`]        Newton step with a two-point slope estimate
/// - [`Algorithm::Secant`]        two-point open method
/// - [`Algorithm::Bisection`]     bracketing, midpoint update (Bolzano)
/// - [`Algorithm::FalsePosition`] bracketing, linear interpolation (regula falsi)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Relaxation,
    Newton,
    Secant,
    Bisection,
    FalsePosition,
}

impl Algorithm {
    /// Every supported method, in a stable order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Relaxation,
        Algorithm::Newton,
        Algorithm::Secant,
        Algorithm::Bisection,
        Algorithm::FalsePosition,
    ];

    /// Algorithm names stored in [`Trace::algorithm`](super::report::Trace).
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Relaxation    => "relaxation",
            Algorithm::Newton        => "newton",
            Algorithm::Secant        => "secant",
            Algorithm::Bisection     => "bisection",
            Algorithm::FalsePosition => "false_position",
        }
    }

    /// Number of seed points the method consumes.
    pub const fn seed_count(self) -> usize {
        match self {
            Algorithm::Relaxation => 1,
            _                     => 2,
        }
    }

    /// `true` for methods that keep a sign-changing bracket `[a, b]`.
    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bisection | Algorithm::FalsePosition)
    }

    /// `true` when the error recorded at iteration `i` belongs to the iterate
    /// *before* the one appended at `i`.
    ///
    /// # Notes
    /// ├ Relaxation records `|x[i] - r|` while appending `x[i+1]`.
    /// ├ Newton records `|x[i] - r|` while appending `x[i+2]`.
    /// └ Secant and both bracketing methods record the error of the appended point.
    pub const fn lags_error(self) -> bool {
        matches!(self, Algorithm::Relaxation | Algorithm::Newton)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

//! tests for the secant-slope Newton method
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rootseq::root_finding::errors::ConfigError;
use rootseq::root_finding::{newton, unary, Algorithm, IterationCfg, Stencil, Termination};

type TestResult = Result<(), ConfigError>;

fn sqrt2_poly(x: f64) -> f64 {
    x * x - 2.0
}

#[test]
fn finds_sqrt_2_within_10() -> TestResult {
    let root  = 2.0_f64.sqrt();
    let cfg   = IterationCfg::new().set_iterations(10)?;
    let trace = newton(unary(sqrt2_poly), root, 1.0, 1.5, &cfg);

    assert_eq!(trace.iterations(), 10);
    assert!(trace.best_error() < 1e-10);
    assert_abs_diff_eq!(trace.last_point().unwrap(), root, epsilon = 1e-15);
    Ok(())
}

#[test]
fn first_step_uses_seed_chord() -> TestResult {
    // chord through (1, -1) and (1.5, 0.25) has slope 2.5
    let cfg   = IterationCfg::new().set_iterations(1)?;
    let trace = newton(unary(sqrt2_poly), 2.0_f64.sqrt(), 1.0, 1.5, &cfg);

    assert_relative_eq!(trace.points[0], 1.4, max_relative = 1e-15);
    Ok(())
}

#[test]
fn errors_trail_the_seeds() {
    let root  = 2.0_f64.sqrt();
    let trace = newton(unary(sqrt2_poly), root, 1.0, 1.5, &IterationCfg::new());

    assert!(Algorithm::Newton.lags_error());
    assert_eq!(trace.errors[0], (1.0 - root).abs());
    assert_eq!(trace.errors[1], (1.5 - root).abs());
    for i in 0..trace.iterations() - 2 {
        assert_eq!(trace.errors[i + 2], (trace.points[i] - root).abs());
    }
}

#[test]
fn halts_on_non_finite_step() {
    // once the iterates coincide the chord slope is 0/0
    let trace = newton(unary(sqrt2_poly), 2.0_f64.sqrt(), 1.0, 1.5, &IterationCfg::new());

    assert_eq!(trace.termination, Termination::NonFiniteStep);
    assert!(trace.iterations() < 100);
    assert_eq!(trace.points.len(), trace.errors.len());
    assert!(trace.points.iter().all(|x| x.is_finite()));
}

#[test]
fn coincident_seeds_give_empty_trace() {
    let trace = newton(unary(sqrt2_poly), 2.0_f64.sqrt(), 1.0, 1.0, &IterationCfg::new());

    assert!(trace.points.is_empty());
    assert!(trace.errors.is_empty());
    assert_eq!(trace.termination, Termination::NonFiniteStep);
    assert_eq!(trace.stencil, Stencil::doubleton(1.0, 1.0));
}

#[test]
fn flat_seed_chord_gives_empty_trace() {
    // f(-1) == f(1): zero slope, infinite step
    let trace = newton(unary(sqrt2_poly), 2.0_f64.sqrt(), -1.0, 1.0, &IterationCfg::new());

    assert!(trace.points.is_empty());
    assert_eq!(trace.termination, Termination::NonFiniteStep);
}

#[test]
fn stops_at_threshold() -> TestResult {
    let root  = 2.0_f64.sqrt();
    let cfg   = IterationCfg::new().set_stop_condition(1e-6)?;
    let trace = newton(unary(sqrt2_poly), root, 1.0, 1.5, &cfg);

    let n = trace.iterations();
    assert_eq!(trace.termination, Termination::StopConditionReached);
    assert_eq!(trace.first_below(1e-6), Some(n - 1));
    Ok(())
}

#[test]
fn evaluation_count() -> TestResult {
    let cfg   = IterationCfg::new().set_iterations(3)?;
    let trace = newton(unary(sqrt2_poly), 2.0_f64.sqrt(), 1.0, 1.5, &cfg);

    // two for the seed chord, one per new iterate
    assert_eq!(trace.evaluations, 2 + 3);
    Ok(())
}

#[test]
fn cube_root_family() {
    let f     = |x: f64, args: &[f64]| x.powi(3) - args[0];
    let cfg   = IterationCfg::new().with_args(vec![27.0]);
    let trace = newton(f, 3.0, 2.0, 2.5, &cfg);

    assert!(trace.best_error() < 1e-12);
}

//! tests for fixed-point relaxation
use approx::assert_abs_diff_eq;
use rootseq::root_finding::errors::ConfigError;
use rootseq::root_finding::{relaxation, unary, IterationCfg, Stencil, Termination};

type TestResult = Result<(), ConfigError>;

/// Fixed point of cos(x).
const DOTTIE: f64 = 0.739_085_133_215_160_7;

#[test]
fn cos_fixed_point_within_default_budget() {
    let cfg   = IterationCfg::new();
    let trace = relaxation(unary(f64::cos), DOTTIE, 1.0, &cfg);

    assert_eq!(trace.iterations(), 100);
    assert_eq!(trace.termination, Termination::IterationLimit);
    assert!(trace.first_below(1e-6).is_some());
    assert_abs_diff_eq!(trace.last_point().unwrap(), DOTTIE, epsilon = 1e-12);
}

#[test]
fn error_settles_below_tolerance() {
    let trace = relaxation(unary(f64::cos), DOTTIE, 1.0, &IterationCfg::new());

    // oscillating approach, so only the tail is checked
    let k = trace.first_below(1e-6).unwrap();
    assert!(trace.errors[k..].iter().all(|&e| e < 1e-6));
}

#[test]
fn error_lags_one_step_behind_points() {
    let trace = relaxation(unary(f64::cos), DOTTIE, 1.0, &IterationCfg::new());

    assert_eq!(trace.points[0], 1.0_f64.cos());
    assert_eq!(trace.errors[0], (1.0 - DOTTIE).abs());
    for i in 0..trace.iterations() - 1 {
        assert_eq!(trace.errors[i + 1], (trace.points[i] - DOTTIE).abs());
    }
}

#[test]
fn stops_at_threshold() -> TestResult {
    let cfg   = IterationCfg::new().set_stop_condition(1e-3)?;
    let trace = relaxation(unary(f64::cos), DOTTIE, 1.0, &cfg);

    let n = trace.iterations();
    assert_eq!(trace.termination, Termination::StopConditionReached);
    assert!(trace.errors[n - 1] <= 1e-3);
    assert!(trace.errors[..n - 1].iter().all(|&e| e > 1e-3));
    Ok(())
}

#[test]
fn divergence_runs_out_budget() -> TestResult {
    // g(x) = 2x + 1 has fixed point -1 but is expanding
    let cfg   = IterationCfg::new().set_iterations(20)?.set_stop_condition(1e-8)?;
    let trace = relaxation(unary(|x: f64| 2.0 * x + 1.0), -1.0, 0.0, &cfg);

    assert_eq!(trace.iterations(), 20);
    assert_eq!(trace.termination, Termination::IterationLimit);
    assert!(trace.errors.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(trace.errors[19], 2.0_f64.powi(19));
    Ok(())
}

#[test]
fn one_evaluation_per_iteration() -> TestResult {
    let cfg   = IterationCfg::new().set_iterations(7)?;
    let trace = relaxation(unary(f64::cos), DOTTIE, 1.0, &cfg);

    assert_eq!(trace.evaluations, 7);
    assert_eq!(trace.stencil, Stencil::singleton(trace.points[6]));
    Ok(())
}

#[test]
fn parametrized_map() {
    // x = cos(k x) for k = 0.5
    let g     = |x: f64, args: &[f64]| (args[0] * x).cos();
    let cfg   = IterationCfg::new().with_args([0.5]);
    let trace = relaxation(g, 0.0, 1.0, &cfg);

    let x = trace.last_point().unwrap();
    assert_abs_diff_eq!(x, (0.5 * x).cos(), epsilon = 1e-12);
}

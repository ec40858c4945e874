use calculus_methods::config::EngineConfig;
use calculus_methods::dataset::Dataset;
use calculus_methods::derivative_descent::GradientDescent;
use calculus_methods::functions::{lookup_function, FunctionId};
use calculus_methods::linear_fit::{compare_learning_rates, fit_linear};
use calculus_methods::objective::MeanSquaredError;
use calculus_methods::riemann::{riemann_sum, RiemannMethod};
use calculus_methods::surface::descend_surface;
use calculus_methods::{last, tee, EngineError};
use ndarray::arr1;
use streaming_iterator::*;

#[test]
fn configured_fit_end_to_end() {
    let config = EngineConfig::from_yaml_str(
        "
dataset:
  seed: 3
  noise_std: 0.5
linear_fit:
  learning_rate: 0.01
  iterations: 5000
",
    )
    .unwrap();
    let data = Dataset::generate(&config.dataset).unwrap();
    let fit = fit_linear(
        &data,
        config.linear_fit.learning_rate,
        config.linear_fit.iterations,
    )
    .unwrap();
    assert_eq!(fit.trajectory.len(), 5001);
    assert_eq!(fit.loss_history.len(), 5000);

    let (b, w) = data.least_squares();
    assert!((fit.slope - w).abs() < 1e-3);
    assert!((fit.intercept - b).abs() < 1e-2);
    // With σ = 0.5 the residual error settles near σ².
    let final_loss = fit.final_loss().unwrap();
    assert!(final_loss < 0.5, "{}", final_loss);
}

#[test]
fn learning_rate_impact_panel() {
    let data = Dataset::generate(&EngineConfig::default().dataset).unwrap();
    let runs = compare_learning_rates(&data, &[0.01, 0.1, 0.5], 50).unwrap();
    let finals: Vec<f64> = runs.iter().map(|(_, h)| h[h.len() - 1]).collect();
    // 0.01 still converges on this data; the larger rates overshoot.
    assert!(finals[0] < runs[0].1[0]);
    assert!(!finals[1].is_finite() || finals[1] > finals[0]);
    assert!(!finals[2].is_finite() || finals[2] > finals[0]);
}

#[test]
fn streaming_descent_matches_fit_linear() {
    let data = Dataset::generate(&EngineConfig::default().dataset).unwrap();
    let fit = fit_linear(&data, 0.01, 25).unwrap();

    let mut losses = Vec::new();
    let state = {
        let gd = GradientDescent::new(MeanSquaredError::new(&data), 0.01, arr1(&[0., 0.]))
            .take(25);
        let recorded = tee(gd, |s: &GradientDescent<MeanSquaredError>| {
            losses.push(s.prior_cost)
        });
        last(recorded).unwrap()
    };
    assert_eq!(losses, fit.loss_history);
    assert_eq!((state.x[0], state.x[1]), (fit.intercept, fit.slope));
}

#[test]
fn surface_path_contract() {
    let path = descend_surface(-3., 4., 0.1, 50).unwrap();
    assert_eq!(path.points.len(), 51);
    let start = path.start().unwrap();
    assert_eq!((start.x, start.y, start.z), (-3., 4., None));
    let heights = path.heights();
    assert_eq!(heights.len(), 50);
    assert!(heights[49] < heights[0]);
}

#[test]
fn riemann_dashboard_defaults() {
    let config = EngineConfig::default();
    let c = &config.integration;
    let sum = riemann_sum(&c.function, c.lower, c.upper, c.partitions, &c.method).unwrap();
    assert_eq!(sum.method, RiemannMethod::Left);
    assert_eq!(sum.partitions(), 10);
    assert_eq!(sum.rectangles().count(), 10);
    // Left sums of an increasing function underestimate.
    assert!(sum.area < 8. / 3.);
}

#[test]
fn every_catalog_function_integrates() {
    for id in FunctionId::INTEGRABLE.iter() {
        for method in ["left", "right", "midpoint"].iter() {
            let sum = riemann_sum(id.id(), 0., 2., 100, method).unwrap();
            assert!(sum.area.is_finite(), "{} {}", id, method);
        }
    }
}

#[test]
fn strict_and_lenient_lookups_agree_on_known_ids() {
    for id in FunctionId::ALL.iter() {
        assert_eq!(lookup_function(id.id()).unwrap().id, *id);
        assert_eq!(FunctionId::from_id_or_default(id.id()), *id);
    }
    assert!(matches!(
        lookup_function("sinh(x)"),
        Err(EngineError::UnknownFunction(_))
    ));
    assert_eq!(FunctionId::from_id_or_default("sinh(x)"), FunctionId::Square);
}

#[test]
fn invalid_structural_input_is_rejected_everywhere() {
    let data = Dataset::generate(&EngineConfig::default().dataset).unwrap();
    assert!(fit_linear(&data, -1., 10).is_err());
    assert!(descend_surface(0., 0., -1., 10).is_err());
    assert!(riemann_sum("x²", 0., 2., 0, "left").is_err());
    assert!(riemann_sum("x²", 2., 0., 4, "left").is_err());
}

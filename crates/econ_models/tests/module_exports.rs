//! Integration tests for module exports.
//!
//! Verify that every public module is reachable via absolute paths and
//! that the page re-exports match their full paths.

use approx::assert_relative_eq;

/// Production and cost helpers compose without the dashboard layer.
#[test]
fn test_production_and_cost_exports() {
    use econ_models::cost::{average_cost_with_floor, profit, total_cost, total_revenue};
    use econ_models::production::{produce_exponential, produce_linear, MarginalProduct};

    assert_eq!(produce_linear(10.0_f64, 5.0).unwrap(), 15.0);
    assert_eq!(
        econ_models::production::linear_marginal_product::<f64>(),
        MarginalProduct::Unit
    );

    // x·e^(β·0)·K
    let q = produce_exponential(10.0_f64, 0.0, 10.0, 0.15).unwrap();
    assert_relative_eq!(q, 100.0, epsilon = 1e-12);

    let ct = total_cost(100.0_f64, 4.0).unwrap();
    let it = total_revenue(50.0_f64, 10.0).unwrap();
    assert_eq!(profit(it, ct).unwrap(), 100.0);
    assert_eq!(average_cost_with_floor(ct, 0.0, 1e-9).unwrap(), 400.0 / 1e-9);
}

/// Geometry modules are reachable.
#[test]
fn test_geometry_exports() {
    use econ_models::cost_curves::AverageCostShape;
    use econ_models::isoquant::isoquant_labor;
    use econ_models::labor_demand::ValueMarginalProduct;
    use econ_models::production::CobbDouglas;
    use econ_models::surface::ProductionSurface;

    let tech = CobbDouglas::new(1.0_f64, 0.5, 0.5).unwrap();
    // Q = √(K·L) = 5 at K = 5 needs L = 5
    assert_relative_eq!(isoquant_labor(&tech, 5.0, 5.0).unwrap(), 5.0, epsilon = 1e-12);

    let surface = ProductionSurface::evaluate(&tech, &[1.0, 4.0], &[1.0, 9.0]).unwrap();
    assert_eq!(surface.shape(), (2, 2));

    let shape = AverageCostShape::FixedAverage { fixed_cost: 200.0 };
    assert_eq!(shape.value(50.0).unwrap(), 4.0);

    let vmp = ValueMarginalProduct::new(-0.6, 18.0).unwrap();
    assert_relative_eq!(vmp.employment_at_wage(12.0).unwrap(), 10.0, epsilon = 1e-12);
}

/// Page re-exports resolve to the page modules.
#[test]
fn test_dashboard_reexports() {
    use econ_models::dashboard::long_run_cost::LongRunCostParams as FullPath;
    use econ_models::dashboard::LongRunCostParams;

    let a: LongRunCostParams = FullPath::default();
    assert_eq!(a.points, 500);
    assert_eq!(a.techniques.len(), 3);
}

/// Errors convert from the foundation layer.
#[test]
fn test_error_exports() {
    use econ_core::types::DomainError;
    use econ_models::error::ModelError;

    let err: ModelError = DomainError::negative("wage", -1.0).into();
    assert_eq!(err.parameter(), Some("wage"));
    assert_eq!(
        econ_models::long_run::TechniqueFamily::<f64>::new(vec![]).unwrap_err(),
        ModelError::EmptyFamily
    );
}

/// Configuration parses from TOML and validates.
#[test]
fn test_config_exports() {
    use econ_models::config::{ConfigError, ModelConfig};

    let config = ModelConfig::from_toml_str("curve_points = 60\n").unwrap();
    assert_eq!(config.curve_points, 60);
    assert_eq!(config.profit_points, 300);

    let bad = ModelConfig {
        epsilon: 0.0,
        ..ModelConfig::default()
    };
    assert!(matches!(bad.validate(), Err(ConfigError::Invalid(_))));
}
